//! Batch list row component.

use core_types::Batch;
use yew::prelude::*;

/// Properties for BatchItem component.
#[derive(Properties, PartialEq)]
pub struct BatchItemProps {
    pub batch: Batch,
    /// Second badge: enrollment count for teachers, class for students.
    pub detail: String,
}

/// One batch row on a dashboard list.
#[function_component(BatchItem)]
pub fn batch_item(props: &BatchItemProps) -> Html {
    let batch = &props.batch;

    html! {
        <div class="list-item">
            <div class="list-item-body">
                <h3 class="list-item-title">{ &batch.name }</h3>
                <p class="list-item-subtitle">{ &batch.schedule }</p>
                <div class="badge-row">
                    <span class="badge badge-outline">{ &batch.subject }</span>
                    <span class="badge badge-secondary">{ &props.detail }</span>
                </div>
            </div>
        </div>
    }
}
