//! Session context shared across the component tree.
//!
//! The provider at the app root owns the session for the lifetime of
//! the running client; everything below reaches it through the
//! context tree instead of ambient global state.

use std::rc::Rc;

use core_types::Identity;
use session::Session;
use yew::prelude::*;

/// Mutations the UI can apply to the session.
pub enum SessionAction {
    /// Record a successful credential check.
    Login(Identity),
    /// Clear the active session.
    Logout,
}

/// Session state as held by the provider.
#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            SessionAction::Login(identity) => session.login(identity),
            SessionAction::Logout => session.logout(),
        }
        Rc::new(Self { session })
    }
}

/// Handle to the session context: read the session, dispatch changes.
pub type SessionHandle = UseReducerHandle<SessionState>;

/// Properties for [`SessionProvider`].
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the session and provides it to every descendant.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionHandle> context={state}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

/// Fetch the session context. Must be called under a [`SessionProvider`].
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("no SessionProvider above this component")
}
