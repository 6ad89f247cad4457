//! Main application component with routing.
//!
//! Every navigation runs through the access gate: the requested
//! route's required role is checked against the session, and the
//! outcome is either the view, a redirect to the login surface, or a
//! redirect to the session role's home.

use core_types::Role;
use session::{check_access, GateOutcome};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{use_session, SessionProvider};
use crate::components::{ComingSoon, StudentLayout, TeacherLayout};
use crate::pages::{
    LoginPage, NotFoundPage, StudentDashboardPage, TeacherBatchesPage, TeacherDashboardPage,
};

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/teacher")]
    TeacherHome,
    #[at("/teacher/batches")]
    TeacherBatches,
    #[at("/teacher/students")]
    TeacherStudents,
    #[at("/teacher/materials")]
    TeacherMaterials,
    #[at("/teacher/attendance")]
    TeacherAttendance,
    #[at("/teacher/payments")]
    TeacherPayments,
    #[at("/teacher/notifications")]
    TeacherNotifications,
    #[at("/student")]
    StudentHome,
    #[at("/student/batches")]
    StudentBatches,
    #[at("/student/materials")]
    StudentMaterials,
    #[at("/student/payments")]
    StudentPayments,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Role required to view this route, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::TeacherHome
            | Route::TeacherBatches
            | Route::TeacherStudents
            | Route::TeacherMaterials
            | Route::TeacherAttendance
            | Route::TeacherPayments
            | Route::TeacherNotifications => Some(Role::Teacher),
            Route::StudentHome
            | Route::StudentBatches
            | Route::StudentMaterials
            | Route::StudentPayments => Some(Role::Student),
            Route::Root | Route::NotFound => None,
        }
    }

    /// Home route for an authenticated role.
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Teacher => Route::TeacherHome,
            Role::Student => Route::StudentHome,
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={|route| html! { <Gated {route} /> }} />
            </BrowserRouter>
        </SessionProvider>
    }
}

/// Properties for [`Gated`].
#[derive(Properties, PartialEq)]
struct GatedProps {
    route: Route,
}

/// Applies the access gate to the requested route.
#[function_component(Gated)]
fn gated(props: &GatedProps) -> Html {
    let state = use_session();
    let route = &props.route;

    // The root path resolves per session: the login surface when
    // unauthenticated, otherwise the role's home.
    if matches!(route, Route::Root) {
        return match state.session.role() {
            None => html! { <LoginPage /> },
            Some(role) => html! { <Redirect<Route> to={Route::home_for(role)} /> },
        };
    }

    match check_access(&state.session, route.required_role()) {
        GateOutcome::Render => render_view(route),
        GateOutcome::RedirectToLogin => html! { <Redirect<Route> to={Route::Root} /> },
        GateOutcome::RedirectToHome => match state.session.role() {
            Some(role) => html! { <Redirect<Route> to={Route::home_for(role)} /> },
            None => html! { <Redirect<Route> to={Route::Root} /> },
        },
    }
}

/// Render the view for a route the gate admitted.
fn render_view(route: &Route) -> Html {
    match route {
        // Resolved before the gate runs.
        Route::Root => Html::default(),
        Route::TeacherHome => html! {
            <TeacherLayout><TeacherDashboardPage /></TeacherLayout>
        },
        Route::TeacherBatches => html! {
            <TeacherLayout><TeacherBatchesPage /></TeacherLayout>
        },
        Route::TeacherStudents => html! {
            <TeacherLayout><ComingSoon title="Student Management" /></TeacherLayout>
        },
        Route::TeacherMaterials => html! {
            <TeacherLayout><ComingSoon title="Study Materials" /></TeacherLayout>
        },
        Route::TeacherAttendance => html! {
            <TeacherLayout><ComingSoon title="Attendance" /></TeacherLayout>
        },
        Route::TeacherPayments => html! {
            <TeacherLayout><ComingSoon title="Payment Status" /></TeacherLayout>
        },
        Route::TeacherNotifications => html! {
            <TeacherLayout><ComingSoon title="Notifications" /></TeacherLayout>
        },
        Route::StudentHome => html! {
            <StudentLayout><StudentDashboardPage /></StudentLayout>
        },
        Route::StudentBatches => html! {
            <StudentLayout><ComingSoon title="Batch Access" /></StudentLayout>
        },
        Route::StudentMaterials => html! {
            <StudentLayout><ComingSoon title="Study Materials" /></StudentLayout>
        },
        Route::StudentPayments => html! {
            <StudentLayout><ComingSoon title="Payment History" /></StudentLayout>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_directory::{builtin, DEMO_PASSWORD};
    use session::Session;

    #[test]
    fn test_required_role_per_path_prefix() {
        assert_eq!(Route::TeacherHome.required_role(), Some(Role::Teacher));
        assert_eq!(Route::TeacherBatches.required_role(), Some(Role::Teacher));
        assert_eq!(Route::StudentHome.required_role(), Some(Role::Student));
        assert_eq!(Route::StudentPayments.required_role(), Some(Role::Student));
        assert_eq!(Route::Root.required_role(), None);
        assert_eq!(Route::NotFound.required_role(), None);
    }

    #[test]
    fn test_home_route_per_role() {
        assert_eq!(Route::home_for(Role::Teacher), Route::TeacherHome);
        assert_eq!(Route::home_for(Role::Student), Route::StudentHome);
    }

    #[test]
    fn test_teacher_login_resolves_root_to_teacher_home() {
        let identity = builtin()
            .authenticate("teacher1", DEMO_PASSWORD, Role::Teacher)
            .expect("teacher1 should authenticate");

        let mut session = Session::new();
        session.login(identity);

        let role = session.role().expect("authenticated");
        assert_eq!(Route::home_for(role), Route::TeacherHome);
        assert_eq!(
            check_access(&session, Route::TeacherHome.required_role()),
            GateOutcome::Render
        );
    }

    #[test]
    fn test_wrong_password_leaves_session_absent() {
        let mut session = Session::new();

        if let Some(identity) = builtin().authenticate("teacher1", "wrong", Role::Teacher) {
            session.login(identity);
        }

        assert!(!session.is_authenticated());
        assert_eq!(
            check_access(&session, Route::TeacherHome.required_role()),
            GateOutcome::RedirectToLogin
        );
    }

    #[test]
    fn test_teacher_under_student_prefix_goes_home() {
        let identity = builtin()
            .authenticate("teacher1", DEMO_PASSWORD, Role::Teacher)
            .expect("teacher1 should authenticate");

        let mut session = Session::new();
        session.login(identity);

        assert_eq!(
            check_access(&session, Route::StudentHome.required_role()),
            GateOutcome::RedirectToHome
        );
    }

    #[test]
    fn test_logout_redirects_protected_views_to_login() {
        let identity = builtin()
            .authenticate("student1", DEMO_PASSWORD, Role::Student)
            .expect("student1 should authenticate");

        let mut session = Session::new();
        session.login(identity);
        session.logout();

        for route in [Route::StudentHome, Route::TeacherHome, Route::StudentPayments] {
            assert_eq!(
                check_access(&session, route.required_role()),
                GateOutcome::RedirectToLogin
            );
        }
    }
}
