//! Password update page.

use leptos::prelude::*;

use crate::state::auth_form::SETTINGS_ROUTE;
use crate::state::settings::PasswordForm;

#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    let form = RwSignal::new(PasswordForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let summary = form.with_untracked(PasswordForm::update_summary);
        #[cfg(feature = "hydrate")]
        log::info!("{summary}");
        #[cfg(not(feature = "hydrate"))]
        let _ = summary;
    };

    view! {
        <div class="settings-page">
            <div class="settings-card">
                <h1>"Update Password"</h1>
                <p class="settings-card__subtitle">"Change your account password here."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="currentPassword">"Current Password"</label>
                    <input
                        id="currentPassword"
                        class="auth-form__input"
                        type="password"
                        placeholder="Enter your current password"
                        prop:value=move || form.with(|f| f.current_password.clone())
                        on:input=move |ev| form.update(|f| f.current_password = event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="newPassword">"New Password"</label>
                    <input
                        id="newPassword"
                        class="auth-form__input"
                        type="password"
                        placeholder="Enter your new password"
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Update Password"</button>
                </form>
                <div class="settings-card__footer">
                    <a class="settings-card__link" href=SETTINGS_ROUTE>"Back to Account Settings"</a>
                </div>
            </div>
        </div>
    }
}
