//! Login page: username + password against `/api/v1/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Probes for an existing session on mount and leaves for `/` if one exists.
//! Validation errors land under the matching input; a wrong username or
//! password shows a banner.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_error::{FieldErrorText, FormErrorBanner};
use crate::net::types::Credentials;
use crate::state::auth_form::{AuthFormState, SIGNUP_ROUTE};
use crate::util::navigation::pending_navigation;
use crate::util::session::install_session_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    install_session_redirect(navigate.clone());
    let pending_nav = pending_navigation(navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let creds = Credentials { username: username.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::submit::submit_login(&crate::net::api::BrowserApi, &creds).await;
            crate::util::submit::report(&outcome);
            if let Some(nav) = form.try_update(|f| f.finish(outcome)).flatten() {
                pending_nav.set(Some(nav));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (creds, pending_nav);
    };

    let username_error = Signal::derive(move || form.with(|f| f.errors.username.clone()));
    let password_error = Signal::derive(move || form.with(|f| f.errors.password.clone()));
    let form_error = Signal::derive(move || form.with(|f| f.errors.form.clone()));

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <p class="auth-card__subtitle">"Enter your username and password to sign in."</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormErrorBanner message=form_error/>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            form.update(AuthFormState::edited);
                        }
                    />
                    <FieldErrorText message=username_error/>
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            form.update(AuthFormState::edited);
                        }
                    />
                    <FieldErrorText message=password_error/>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(AuthFormState::is_busy)>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=SIGNUP_ROUTE>"Sign up"</a>
                </p>
            </div>
        </main>
    }
}
