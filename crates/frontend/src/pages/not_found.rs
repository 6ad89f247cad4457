//! 404 page component.

use yew::prelude::*;

/// 404 page component.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="login-screen">
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        </div>
    }
}
