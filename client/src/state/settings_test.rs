use super::*;
use crate::state::auth_form::{LOGIN_ROUTE, SIGNUP_ROUTE};

fn confirming(password: &str) -> DeleteDialog {
    let mut dialog = DeleteDialog::default();
    dialog.open();
    dialog.set_password(password.to_owned());
    dialog
}

// =============================================================
// Profile / password forms
// =============================================================

#[test]
fn profile_form_seeds_initial_values() {
    let form = ProfileForm::new(Some("alice".to_owned()), None);
    assert_eq!(form.username, "alice");
    assert_eq!(form.fullname, "");
}

#[test]
fn profile_summary_lists_both_fields() {
    let form = ProfileForm { username: "alice".to_owned(), fullname: "Alice Liddell".to_owned() };
    assert_eq!(form.update_summary(), r#"Updating profile: username="alice" fullname="Alice Liddell""#);
}

#[test]
fn password_summary_omits_passwords() {
    let form = PasswordForm { current_password: "old-secret".to_owned(), new_password: "new-secret".to_owned() };
    let summary = form.update_summary();
    assert_eq!(summary, "Updating password");
    assert!(!summary.contains("secret"));
}

// =============================================================
// DeleteDialog gating
// =============================================================

#[test]
fn dialog_starts_closed() {
    let dialog = DeleteDialog::default();
    assert!(!dialog.is_open());
    assert_eq!(dialog.password(), "");
}

#[test]
fn confirm_without_opening_fires_nothing() {
    let mut dialog = DeleteDialog::default();
    assert_eq!(dialog.confirm(), None);
    assert_eq!(dialog, DeleteDialog::Closed);
}

#[test]
fn confirm_with_empty_password_fires_nothing() {
    let mut dialog = confirming("");
    assert_eq!(dialog.confirm(), None);
    assert!(matches!(dialog, DeleteDialog::Confirming { .. }));
}

#[test]
fn confirm_hands_out_password_and_enters_deleting() {
    let mut dialog = confirming("wonderland");
    assert_eq!(dialog.confirm(), Some("wonderland".to_owned()));
    assert!(dialog.is_deleting());
    assert_eq!(dialog.confirm(), None);
}

#[test]
fn cancel_closes_dialog() {
    let mut dialog = confirming("wonderland");
    dialog.cancel();
    assert_eq!(dialog, DeleteDialog::Closed);
}

#[test]
fn cancel_is_ignored_while_deleting() {
    let mut dialog = confirming("wonderland");
    dialog.confirm();
    dialog.cancel();
    assert!(dialog.is_deleting());
}

#[test]
fn set_password_ignored_when_closed() {
    let mut dialog = DeleteDialog::default();
    dialog.set_password("x".to_owned());
    assert_eq!(dialog, DeleteDialog::Closed);
}

// =============================================================
// DeleteDialog results
// =============================================================

#[test]
fn deleted_closes_and_navigates() {
    let mut dialog = confirming("wonderland");
    dialog.confirm();
    let nav = dialog.finish(DeleteOutcome::Deleted(Navigation::replace(SIGNUP_ROUTE)));
    assert_eq!(nav, Some(Navigation::replace("/auth/signup")));
    assert!(!dialog.is_open());
}

#[test]
fn session_expired_navigates_to_login() {
    let mut dialog = confirming("wonderland");
    dialog.confirm();
    let nav = dialog.finish(DeleteOutcome::SessionExpired(Navigation::replace(LOGIN_ROUTE)));
    assert_eq!(nav, Some(Navigation::replace("/auth/login")));
}

#[test]
fn wrong_password_reopens_with_error() {
    let mut dialog = confirming("wrong");
    dialog.confirm();
    let nav = dialog.finish(DeleteOutcome::WrongPassword("Password incorrect".to_owned()));

    assert_eq!(nav, None);
    assert_eq!(dialog.error(), Some("Password incorrect"));
    assert_eq!(dialog.password(), "");
}

#[test]
fn unexpected_failure_reopens_without_error() {
    let mut dialog = confirming("wonderland");
    dialog.confirm();
    dialog.finish(DeleteOutcome::Unexpected("http failure with status 500".to_owned()));

    assert!(matches!(dialog, DeleteDialog::Confirming { error: None, .. }));
}
