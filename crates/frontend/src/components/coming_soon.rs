//! Placeholder for sub-views that are not built out yet.

use yew::prelude::*;

/// Properties for ComingSoon component.
#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub title: AttrValue,
}

/// Placeholder view.
#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    html! {
        <div class="card coming-soon">
            { format!("{} - Coming Soon", props.title) }
        </div>
    }
}
