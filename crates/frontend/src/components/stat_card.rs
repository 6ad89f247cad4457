//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    /// Extra class for the value accent (e.g. "accent-warning").
    #[prop_or_default]
    pub tone: Classes,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-label">{ &props.label }</div>
            <div class={classes!("stat-value", props.tone.clone())}>{ &props.value }</div>
        </div>
    }
}
