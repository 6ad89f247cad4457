//! Layout shell for the student portal.

use core_types::{Identity, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_session, SessionAction};
use crate::components::Avatar;

const MENU: [(Route, &str); 4] = [
    (Route::StudentHome, "Dashboard"),
    (Route::StudentBatches, "Batch Access"),
    (Route::StudentMaterials, "Study Materials"),
    (Route::StudentPayments, "Payment History"),
];

/// Properties for StudentLayout component.
#[derive(Properties, PartialEq)]
pub struct StudentLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Sidebar-and-header shell around every student view.
#[function_component(StudentLayout)]
pub fn student_layout(props: &StudentLayoutProps) -> Html {
    let state = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let Some(Identity::Student(student)) = state.session.current_identity().cloned() else {
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

    html! {
        <div class="app-container">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <span class="brand-mark">{"EM"}</span>
                    <div>
                        <div class="brand-name">{"EduManage"}</div>
                        <div class="brand-sub">{"Student Portal"}</div>
                    </div>
                </div>

                <div class="sidebar-profile">
                    <Avatar profile={student.profile.clone()} />
                    <div class="profile-info">
                        <div class="profile-name">{ &student.profile.name }</div>
                        <div class="profile-email">{ &student.profile.email }</div>
                        <span class="badge badge-secondary">{ &student.class_name }</span>
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
                    <span class="badge badge-outline">{ Role::Student.label() }</span>
                    <div class="topbar-user">
                        <Avatar profile={student.profile.clone()} />
                        <span>{ &student.profile.name }</span>
                    </div>
                </header>
                { props.children.clone() }
            </main>
        </div>
    }
}
