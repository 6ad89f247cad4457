//! Notification list row component.

use core_types::{Notification, NotificationKind};
use yew::prelude::*;

/// Properties for NotificationItem component.
#[derive(Properties, PartialEq)]
pub struct NotificationItemProps {
    pub notification: Notification,
}

/// One notification row on a dashboard list.
#[function_component(NotificationItem)]
pub fn notification_item(props: &NotificationItemProps) -> Html {
    let notification = &props.notification;

    let badge_class = match notification.kind {
        NotificationKind::Warning => "badge badge-destructive",
        NotificationKind::Info | NotificationKind::Success => "badge badge-secondary",
    };

    html! {
        <div class="list-item">
            <div class="list-item-body">
                <h4 class="list-item-title">{ &notification.title }</h4>
                <p class="list-item-subtitle">{ &notification.message }</p>
                <p class="list-item-meta">{ notification.date.format("%b %e, %Y").to_string() }</p>
            </div>
            <span class={badge_class}>{ notification.kind.label() }</span>
        </div>
    }
}
