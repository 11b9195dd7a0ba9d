//! Account settings page: profile form, password link, delete account.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile form only reports what it would send. Deleting the account
//! goes through `DeleteAccountDialog`, which holds the destructive request
//! until the user confirms with their password.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth_form::{Navigation, UPDATE_PASSWORD_ROUTE};
use crate::state::settings::{DeleteDialog, ProfileForm};
use crate::util::navigation::pending_navigation;

#[component]
pub fn AccountSettingsPage(
    #[prop(optional)] initial_username: Option<String>,
    #[prop(optional)] initial_fullname: Option<String>,
) -> impl IntoView {
    let profile = RwSignal::new(ProfileForm::new(initial_username, initial_fullname));
    let dialog = RwSignal::new(DeleteDialog::default());
    // Owned here, not by the dialog: a successful delete closes the dialog
    // before the navigation runs.
    let pending_nav = pending_navigation(use_navigate());

    let on_update_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let summary = profile.with_untracked(ProfileForm::update_summary);
        #[cfg(feature = "hydrate")]
        log::info!("{summary}");
        #[cfg(not(feature = "hydrate"))]
        let _ = summary;
    };

    view! {
        <div class="settings-page">
            <div class="settings-card">
                <h1>"Account Settings"</h1>
                <p class="settings-card__subtitle">"Update your account information here."</p>
                <form class="auth-form" on:submit=on_update_profile>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || profile.with(|p| p.username.clone())
                        on:input=move |ev| profile.update(|p| p.username = event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="fullName">"Full name"</label>
                    <input
                        id="fullName"
                        class="auth-form__input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || profile.with(|p| p.fullname.clone())
                        on:input=move |ev| profile.update(|p| p.fullname = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Update Profile"</button>
                </form>
                <div class="settings-card__footer">
                    <a class="settings-card__link" href=UPDATE_PASSWORD_ROUTE>"Update Password"</a>
                    <button class="btn btn--danger" on:click=move |_| dialog.update(DeleteDialog::open)>
                        "Delete Account"
                    </button>
                </div>
            </div>
            <Show when=move || dialog.with(DeleteDialog::is_open)>
                <DeleteAccountDialog dialog=dialog pending_nav=pending_nav/>
            </Show>
        </div>
    }
}

/// Confirmation dialog guarding `DELETE /api/v1/accounts/me`.
#[component]
fn DeleteAccountDialog(dialog: RwSignal<DeleteDialog>, pending_nav: RwSignal<Option<Navigation>>) -> impl IntoView {
    let on_cancel = Callback::new(move |()| dialog.update(DeleteDialog::cancel));
    let submit = Callback::new(move |()| {
        let Some(password) = dialog.try_update(DeleteDialog::confirm).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::submit::submit_delete_account(&crate::net::api::BrowserApi, &password).await;
            if let crate::state::settings::DeleteOutcome::Unexpected(err) = &outcome {
                log::error!("{err}");
            }
            if let Some(nav) = dialog.try_update(|d| d.finish(outcome)).flatten() {
                pending_nav.set(Some(nav));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (password, pending_nav);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Are you sure you want to delete your account?"</h2>
                <p class="dialog__danger">
                    "This action cannot be undone. This will permanently delete your account and remove your data from our servers."
                </p>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        required
                        prop:value=move || dialog.with(|d| d.password().to_owned())
                        on:input=move |ev| dialog.update(|d| d.set_password(event_target_value(&ev)))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || dialog.with(|d| d.error().is_some())>
                    <p class="auth-form__error" role="alert">
                        {move || dialog.with(|d| d.error().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || dialog.with(DeleteDialog::is_deleting)
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || dialog.with(DeleteDialog::is_deleting)
                        on:click=move |_| submit.run(())
                    >
                        "Delete Account"
                    </button>
                </div>
            </div>
        </div>
    }
}
