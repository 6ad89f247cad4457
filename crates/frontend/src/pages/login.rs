//! Login page with role tabs and simulated authentication.

use core_types::Role;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::{use_session, SessionAction};

/// Fixed simulated credential-check delay.
const AUTH_DELAY_MS: u32 = 600;

/// Login page component.
///
/// The submit control is disabled while a credential check is
/// pending, so at most one check is in flight per form; a started
/// check always runs to completion.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let state = use_session();
    let role = use_state(|| Role::Student);
    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let pending = use_state(|| false);
    let notice = use_state(|| None::<String>);

    let on_identifier_input = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| {
            show_password.set(!*show_password);
        })
    };

    let select_role = |selected: Role| {
        let role = role.clone();
        Callback::from(move |_: MouseEvent| {
            role.set(selected);
        })
    };

    let on_submit = {
        let state = state.clone();
        let role = role.clone();
        let identifier = identifier.clone();
        let password = password.clone();
        let pending = pending.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *pending {
                return;
            }
            pending.set(true);
            notice.set(None);

            let state = state.clone();
            let pending = pending.clone();
            let notice = notice.clone();
            let claimed_role = *role;
            let id = (*identifier).clone();
            let secret = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                // Fixed deferral standing in for a real credential
                // round-trip; it is never cancelled.
                TimeoutFuture::new(AUTH_DELAY_MS).await;

                match mock_directory::builtin().authenticate(&id, &secret, claimed_role) {
                    Some(identity) => {
                        web_sys::console::log_1(
                            &format!("Signed in as {}", identity.name()).into(),
                        );
                        state.dispatch(SessionAction::Login(identity));
                    }
                    None => {
                        notice.set(Some(
                            "Invalid credentials. Use 'teacher1' or 'student1' with password 'password123'"
                                .to_string(),
                        ));
                    }
                }
                pending.set(false);
            });
        })
    };

    let id_label = match *role {
        Role::Teacher => "Teacher ID",
        Role::Student => "Student ID",
    };
    let id_placeholder = match *role {
        Role::Teacher => "Enter teacher ID",
        Role::Student => "Enter student ID",
    };

    let tab_class = |tab: Role| {
        classes!("tab", (*role == tab).then_some("active"))
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="login-header">
                    <div class="brand-mark brand-mark-large">{"EM"}</div>
                    <h1 class="card-title">{"Welcome Back"}</h1>
                    <p class="text-secondary">{"Sign in to your account to continue"}</p>
                </div>

                <div class="tabs">
                    <button type="button" class={tab_class(Role::Student)} onclick={select_role(Role::Student)}>
                        {"Student"}
                    </button>
                    <button type="button" class={tab_class(Role::Teacher)} onclick={select_role(Role::Teacher)}>
                        {"Teacher"}
                    </button>
                </div>

                if let Some(message) = notice.as_ref() {
                    <div class="form-error">{ message }</div>
                }

                <form onsubmit={on_submit}>
                    <label class="form-label" for="id">{ id_label }</label>
                    <input
                        id="id"
                        class="form-input"
                        type="text"
                        placeholder={id_placeholder}
                        value={(*identifier).clone()}
                        oninput={on_identifier_input}
                        required=true
                    />

                    <label class="form-label" for="password">{"Password"}</label>
                    <div class="password-field">
                        <input
                            id="password"
                            class="form-input"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required=true
                        />
                        <button type="button" class="btn btn-ghost" onclick={on_toggle_password}>
                            { if *show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={*pending}>
                        { if *pending { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <div class="demo-note">
                    <strong>{"Demo Credentials:"}</strong>
                    <br />
                    {"Teacher: teacher1 / password123"}
                    <br />
                    {"Student: student1 / password123"}
                </div>
            </div>
        </div>
    }
}
