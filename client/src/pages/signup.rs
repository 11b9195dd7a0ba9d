//! Signup page: registers, then logs in with the same credentials.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_error::{FieldErrorText, FormErrorBanner};
use crate::net::types::Registration;
use crate::state::auth_form::{AuthFormState, LOGIN_ROUTE};
use crate::util::navigation::pending_navigation;
use crate::util::session::install_session_redirect;

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    install_session_redirect(navigate.clone());
    let pending_nav = pending_navigation(navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let fullname = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let registration = Registration {
            username: username.get_untracked(),
            password: password.get_untracked(),
            fullname: fullname.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::submit::submit_signup(&crate::net::api::BrowserApi, &registration).await;
            crate::util::submit::report(&outcome);
            if let Some(nav) = form.try_update(|f| f.finish(outcome)).flatten() {
                pending_nav.set(Some(nav));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, pending_nav);
    };

    let on_edit = move |target: RwSignal<String>, value: String| {
        target.set(value);
        form.update(AuthFormState::edited);
    };

    let username_error = Signal::derive(move || form.with(|f| f.errors.username.clone()));
    let password_error = Signal::derive(move || form.with(|f| f.errors.password.clone()));
    let fullname_error = Signal::derive(move || form.with(|f| f.errors.fullname.clone()));
    let form_error = Signal::derive(move || form.with(|f| f.errors.form.clone()));

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <p class="auth-card__subtitle">"Enter your information to create an account."</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormErrorBanner message=form_error/>
                    <label class="auth-form__label" for="fullname">"Full name"</label>
                    <input
                        id="fullname"
                        class="auth-form__input"
                        type="text"
                        prop:value=move || fullname.get()
                        on:input=move |ev| on_edit(fullname, event_target_value(&ev))
                    />
                    <FieldErrorText message=fullname_error/>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| on_edit(username, event_target_value(&ev))
                    />
                    <FieldErrorText message=username_error/>
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| on_edit(password, event_target_value(&ev))
                    />
                    <FieldErrorText message=password_error/>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(AuthFormState::is_busy)>
                        "Create an account"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Login"</a>
                </p>
            </div>
        </main>
    }
}
