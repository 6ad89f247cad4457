//! Layout shell for the teacher portal.

use core_types::{Identity, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_session, SessionAction};
use crate::components::Avatar;

const MENU: [(Route, &str); 7] = [
    (Route::TeacherHome, "Dashboard"),
    (Route::TeacherBatches, "Batch Management"),
    (Route::TeacherStudents, "Student Management"),
    (Route::TeacherMaterials, "Study Materials"),
    (Route::TeacherAttendance, "Attendance"),
    (Route::TeacherPayments, "Payment Status"),
    (Route::TeacherNotifications, "Notifications"),
];

/// Properties for TeacherLayout component.
#[derive(Properties, PartialEq)]
pub struct TeacherLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Sidebar-and-header shell around every teacher view.
#[function_component(TeacherLayout)]
pub fn teacher_layout(props: &TeacherLayoutProps) -> Html {
    let state = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    // The gate admits only teachers here; anything else falls back to
    // the root resolution.
    let Some(Identity::Teacher(teacher)) = state.session.current_identity().cloned() else {
        return html! { <Redirect<Route> to={Route::Root} /> };
    };
    let Some(navigator) = navigator else {
        return Html::default();
    };

    let on_logout = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(SessionAction::Logout);
            navigator.push(&Route::Root);
        })
    };

    let subject_badge = teacher
        .subjects
        .first()
        .map(String::as_str)
        .unwrap_or("Teacher")
        .to_string();

    html! {
        <div class="app-container">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <span class="brand-mark">{"EM"}</span>
                    <div>
                        <div class="brand-name">{"EduManage"}</div>
                        <div class="brand-sub">{"Teacher Portal"}</div>
                    </div>
                </div>

                <div class="sidebar-profile">
                    <Avatar profile={teacher.profile.clone()} />
                    <div class="profile-info">
                        <div class="profile-name">{ &teacher.profile.name }</div>
                        <div class="profile-email">{ &teacher.profile.email }</div>
                        <span class="badge badge-secondary">{ subject_badge }</span>
                    </div>
                </div>

                <nav>
                    <ul class="nav-links">
                        { for MENU.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <li>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then_some("active"))}
                                    >
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }
                        })}
                    </ul>
                </nav>

                <button class="btn btn-outline logout-btn" onclick={on_logout}>
                    {"Logout"}
                </button>
            </aside>

            <main class="main-content">
                <header class="topbar">
                    <span class="badge badge-outline">{ Role::Teacher.label() }</span>
                    <div class="topbar-user">
                        <Avatar profile={teacher.profile.clone()} />
                        <span>{ &teacher.profile.name }</span>
                    </div>
                </header>
                { props.children.clone() }
            </main>
        </div>
    }
}
