//! Student dashboard page component.

use core_types::{AttendanceStatus, Identity, PaymentStatus};
use yew::prelude::*;

use crate::auth::use_session;
use crate::components::{Avatar, BatchItem, NotificationItem, StatCard};

/// Student dashboard page component.
#[function_component(StudentDashboardPage)]
pub fn student_dashboard_page() -> Html {
    let state = use_session();

    let Some(Identity::Student(student)) = state.session.current_identity().cloned() else {
        return Html::default();
    };

    let directory = mock_directory::builtin();
    let batches = directory.batches_for_student(&student.profile.id);
    let materials = directory.materials_for(&batches);
    let attendance = directory.attendance_for_student(&student.profile.id);
    let payments = directory.payments_for_student(&student.profile.id);

    let attendance_rate = if attendance.is_empty() {
        0
    } else {
        let present = attendance
            .iter()
            .filter(|record| record.status == AttendanceStatus::Present)
            .count();
        ((present as f64 / attendance.len() as f64) * 100.0).round() as u32
    };
    let pending_payments = payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Pending)
        .count();

    let notifications: Vec<_> = directory
        .notifications_for(&batches)
        .into_iter()
        .take(3)
        .collect();

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{ format!("Welcome back, {}!", student.profile.name) }</h1>
                    <p class="text-secondary">
                        {"Continue your learning journey with your enrolled batches."}
                    </p>
                </div>
                <Avatar profile={student.profile.clone()} large=true />
            </div>

            <div class="stats-grid">
                <StatCard label="Enrolled Batches" value={batches.len().to_string()} />
                <StatCard label="Study Materials" value={materials.len().to_string()} />
                <StatCard label="Attendance Rate" value={format!("{attendance_rate}%")} />
                <StatCard
                    label="Pending Payments"
                    value={pending_payments.to_string()}
                    tone={classes!("accent-warning")}
                />
            </div>

            <div class="two-column">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"My Batches"}</h2>
                        <p class="text-secondary">{"Your enrolled classes and subjects"}</p>
                    </div>
                    if batches.is_empty() {
                        <p class="empty-note">{"No enrolled batches found."}</p>
                    } else {
                        <div class="item-list">
                            { for batches.iter().map(|batch| html! {
                                <BatchItem batch={(*batch).clone()} detail={batch.class_name.clone()} />
                            })}
                        </div>
                    }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Notifications"}</h2>
                        <p class="text-secondary">{"Latest updates from your classes"}</p>
                    </div>
                    if notifications.is_empty() {
                        <p class="empty-note">{"No recent notifications."}</p>
                    } else {
                        <div class="item-list">
                            { for notifications.iter().map(|notification| html! {
                                <NotificationItem notification={(*notification).clone()} />
                            })}
                        </div>
                    }
                </div>
            </div>

            <div class="two-column">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Recent Materials"}</h2>
                        <p class="text-secondary">{"Latest study materials uploaded to your batches"}</p>
                    </div>
                    if materials.is_empty() {
                        <p class="empty-note">{"No study materials available."}</p>
                    } else {
                        <div class="item-list">
                            { for materials.iter().take(4).map(|material| {
                                let batch_name = batches
                                    .iter()
                                    .find(|batch| batch.id == material.batch_id)
                                    .map(|batch| batch.name.clone())
                                    .unwrap_or_default();
                                html! {
                                    <div class="list-item">
                                        <div class="list-item-body">
                                            <h4 class="list-item-title">{ &material.title }</h4>
                                            <p class="list-item-meta">
                                                { format!(
                                                    "{} • {}",
                                                    batch_name,
                                                    material.upload_date.format("%b %e, %Y"),
                                                )}
                                            </p>
                                        </div>
                                        <span class="badge badge-outline">{ material.kind.label() }</span>
                                    </div>
                                }
                            })}
                        </div>
                    }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Profile Summary"}</h2>
                        <p class="text-secondary">{"Your academic information"}</p>
                    </div>
                    <div class="summary-stack">
                        <div>
                            <h4>{"Academic Details"}</h4>
                            <p><span class="text-secondary">{"Class: "}</span>{ &student.class_name }</p>
                            <p><span class="text-secondary">{"Year: "}</span>{ &student.year }</p>
                            <p><span class="text-secondary">{"Institution: "}</span>{ &student.institution }</p>
                        </div>
                        <div>
                            <h4>{"Contact Information"}</h4>
                            <p><span class="text-secondary">{"Email: "}</span>{ &student.profile.email }</p>
                            <p><span class="text-secondary">{"Phone: "}</span>{ &student.profile.phone }</p>
                            <p><span class="text-secondary">{"Parent: "}</span>{ &student.parents_name }</p>
                        </div>
                        <div>
                            <h4>{"Address"}</h4>
                            <p class="text-secondary">{ &student.profile.address }</p>
                            <p class="text-secondary">{ format!("PIN: {}", student.profile.pincode) }</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
