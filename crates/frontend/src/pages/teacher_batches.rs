//! Teacher batch management page component.

use core_types::Identity;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::use_session;

/// Teacher batch management page component.
#[function_component(TeacherBatchesPage)]
pub fn teacher_batches_page() -> Html {
    let state = use_session();
    let search = use_state(String::new);
    let notice = use_state(|| None::<String>);

    let Some(Identity::Teacher(teacher)) = state.session.current_identity().cloned() else {
        return Html::default();
    };

    let directory = mock_directory::builtin();
    let batches = directory.batches_for_teacher(&teacher.profile.id);
    let total_students: usize = batches.iter().map(|batch| batch.students.len()).sum();

    let needle = search.to_lowercase();
    let filtered: Vec<_> = batches
        .iter()
        .filter(|batch| {
            needle.is_empty()
                || batch.name.to_lowercase().contains(&needle)
                || batch.subject.to_lowercase().contains(&needle)
                || batch.class_name.to_lowercase().contains(&needle)
        })
        .collect();

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    // Batch CRUD is stubbed in the demo: the buttons only explain
    // what the real feature would do.
    let demo_notice = |message: &'static str| {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            notice.set(Some(message.to_string()));
        })
    };
    let on_add = demo_notice(
        "This is a demo feature. In a real app, this would open a form to create a new batch.",
    );
    let on_edit = demo_notice(
        "This is a demo feature. In a real app, this would open a form to edit the batch.",
    );
    let on_delete = demo_notice(
        "This is a demo feature. In a real app, this would delete the batch after confirmation.",
    );
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.set(None))
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{"Batch Management"}</h1>
                    <p class="text-secondary">{"Manage your teaching batches and classes"}</p>
                </div>
                <button class="btn btn-primary" onclick={on_add.clone()}>
                    {"Add New Batch"}
                </button>
            </div>

            if let Some(message) = notice.as_ref() {
                <div class="demo-banner">
                    <span>{ message }</span>
                    <button class="btn btn-ghost" onclick={on_dismiss}>{"Dismiss"}</button>
                </div>
            }

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search batches..."
                    oninput={on_search_input}
                />
                <div class="inline-stats">
                    <div class="inline-stat">
                        <span class="stat-value">{ batches.len() }</span>
                        <span class="stat-label">{"Total Batches"}</span>
                    </div>
                    <div class="inline-stat">
                        <span class="stat-value">{ total_students }</span>
                        <span class="stat-label">{"Total Students"}</span>
                    </div>
                </div>
            </div>

            if filtered.is_empty() {
                <div class="card empty-state">
                    <h3>
                        { if search.is_empty() { "No batches created yet" } else { "No batches found" } }
                    </h3>
                    <p class="text-secondary">
                        { if search.is_empty() {
                            "Create your first batch to start teaching and managing students."
                        } else {
                            "Try adjusting your search terms to find batches."
                        }}
                    </p>
                    if search.is_empty() {
                        <button class="btn btn-primary" onclick={on_add}>
                            {"Create Your First Batch"}
                        </button>
                    }
                </div>
            } else {
                <div class="batch-grid">
                    { for filtered.iter().map(|batch| {
                        let student_names: Vec<String> = batch
                            .students
                            .iter()
                            .map(|id| {
                                directory
                                    .student_by_id(id)
                                    .map(|student| student.profile.name.clone())
                                    .unwrap_or_else(|| "Unknown Student".to_string())
                            })
                            .collect();

                        html! {
                            <div class="card batch-card">
                                <div class="card-header">
                                    <div class="list-item-body">
                                        <h3 class="card-title">{ &batch.name }</h3>
                                        <p class="text-secondary">{ &batch.description }</p>
                                    </div>
                                    <div class="card-actions">
                                        <button class="btn btn-ghost" onclick={on_edit.clone()}>
                                            {"Edit"}
                                        </button>
                                        <button class="btn btn-ghost" onclick={on_delete.clone()}>
                                            {"Delete"}
                                        </button>
                                    </div>
                                </div>

                                <div class="badge-row">
                                    <span class="badge badge-primary">{ &batch.subject }</span>
                                    <span class="badge badge-secondary">{ &batch.class_name }</span>
                                    <span class="badge badge-outline">{ &batch.board }</span>
                                </div>

                                <p class="list-item-subtitle">{ &batch.schedule }</p>
                                <p class="list-item-subtitle">
                                    { format!(
                                        "{} student{}",
                                        batch.students.len(),
                                        if batch.students.len() == 1 { "" } else { "s" },
                                    )}
                                </p>

                                if !student_names.is_empty() {
                                    <div class="enrolled-list">
                                        <p class="list-item-title">{"Enrolled Students:"}</p>
                                        { for student_names.iter().take(3).map(|name| html! {
                                            <p class="list-item-subtitle">{ format!("• {name}") }</p>
                                        })}
                                        if student_names.len() > 3 {
                                            <p class="list-item-subtitle">
                                                { format!("• +{} more students", student_names.len() - 3) }
                                            </p>
                                        }
                                    </div>
                                }
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
