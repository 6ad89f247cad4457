//! Teacher dashboard page component.

use core_types::{Identity, PaymentStatus};
use yew::prelude::*;

use crate::auth::use_session;
use crate::components::{Avatar, BatchItem, NotificationItem, StatCard};

/// Teacher dashboard page component.
#[function_component(TeacherDashboardPage)]
pub fn teacher_dashboard_page() -> Html {
    let state = use_session();

    let Some(Identity::Teacher(teacher)) = state.session.current_identity().cloned() else {
        return Html::default();
    };

    let directory = mock_directory::builtin();
    let batches = directory.batches_for_teacher(&teacher.profile.id);
    let students = directory.students_in(&batches);
    let payments = directory.payments_for_batches(&batches);

    let revenue: u32 = payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Paid)
        .map(|payment| payment.amount)
        .sum();
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
                    <h1>{ format!("Welcome back, {}!", teacher.profile.name) }</h1>
                    <p class="text-secondary">
                        {"Here's what's happening with your classes today."}
                    </p>
                </div>
                <Avatar profile={teacher.profile.clone()} large=true />
            </div>

            <div class="stats-grid">
                <StatCard label="Active Batches" value={batches.len().to_string()} />
                <StatCard label="Total Students" value={students.len().to_string()} />
                <StatCard label="Monthly Revenue" value={format!("₹{revenue}")} />
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
                        <p class="text-secondary">{"Your active teaching batches"}</p>
                    </div>
                    if batches.is_empty() {
                        <p class="empty-note">{"No active batches found."}</p>
                    } else {
                        <div class="item-list">
                            { for batches.iter().map(|batch| {
                                let detail = format!("{} students", batch.students.len());
                                html! { <BatchItem batch={(*batch).clone()} {detail} /> }
                            })}
                        </div>
                    }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Recent Notifications"}</h2>
                        <p class="text-secondary">{"Latest updates and announcements"}</p>
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

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Profile Summary"}</h2>
                    <p class="text-secondary">{"Your teaching profile information"}</p>
                </div>
                <div class="summary-grid">
                    <div>
                        <h4>{"Contact Information"}</h4>
                        <p><span class="text-secondary">{"Email: "}</span>{ &teacher.profile.email }</p>
                        <p><span class="text-secondary">{"Phone: "}</span>{ &teacher.profile.phone }</p>
                        <p><span class="text-secondary">{"WhatsApp: "}</span>{ &teacher.profile.whatsapp }</p>
                    </div>
                    <div>
                        <h4>{"Teaching Specialization"}</h4>
                        <div class="badge-row">
                            { for teacher.subjects.iter().map(|subject| html! {
                                <span class="badge badge-outline">{ subject }</span>
                            })}
                        </div>
                        <p><span class="text-secondary">{"Board: "}</span>{ &teacher.board }</p>
                        <p><span class="text-secondary">{"University: "}</span>{ &teacher.university }</p>
                    </div>
                    <div>
                        <h4>{"Location"}</h4>
                        <p class="text-secondary">{ &teacher.profile.address }</p>
                        <p class="text-secondary">
                            { match (&teacher.profile.district, &teacher.profile.state) {
                                (Some(district), Some(state)) => {
                                    format!("{district}, {state} - {}", teacher.profile.pincode)
                                }
                                _ => format!("PIN: {}", teacher.profile.pincode),
                            }}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
