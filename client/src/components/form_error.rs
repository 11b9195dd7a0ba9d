//! Inline and banner error text for the auth forms.

use leptos::prelude::*;

/// Error line rendered under a single input. Renders nothing when empty.
#[component]
pub fn FieldErrorText(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="auth-form__error" role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Form-level banner for errors not tied to one input.
#[component]
pub fn FormErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="auth-form__banner" role="alert">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}
