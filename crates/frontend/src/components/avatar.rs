//! Avatar component with initials fallback.

use core_types::Profile;
use yew::prelude::*;

/// Properties for Avatar component.
#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub profile: Profile,
    #[prop_or_default]
    pub large: bool,
}

/// Avatar component: the profile photo, or initials when there is none.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let class = if props.large { "avatar avatar-large" } else { "avatar" };

    match &props.profile.photo {
        Some(url) => html! {
            <img {class} src={url.clone()} alt={props.profile.name.clone()} />
        },
        None => html! {
            <div class={classes!(class, "avatar-fallback")}>
                { props.profile.initials() }
            </div>
        },
    }
}
