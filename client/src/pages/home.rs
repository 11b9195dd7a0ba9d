//! Landing route the auth pages redirect to.

use leptos::prelude::*;

use crate::state::auth_form::{LOGIN_ROUTE, SETTINGS_ROUTE, SIGNUP_ROUTE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"Garlip"</h1>
            <nav class="home-page__links">
                <a href=SETTINGS_ROUTE>"Account Settings"</a>
                <a href=LOGIN_ROUTE>"Login"</a>
                <a href=SIGNUP_ROUTE>"Sign Up"</a>
            </nav>
        </main>
    }
}
