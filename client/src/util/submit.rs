//! Submission flows for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these with `BrowserApi`; tests call them with a fake. Each flow
//! issues its request(s), maps the HTTP status to a typed outcome, and stops
//! at the first handled status. Nothing here touches signals or the router.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::net::api::{AuthApi, http_failure_message};
use crate::net::types::{Credentials, DeleteAccountRequest, FieldErrorBody, FieldName, HttpReply, Registration};
use crate::state::auth_form::{FormKind, HOME_ROUTE, LOGIN_ROUTE, Navigation, SIGNUP_ROUTE, SubmitOutcome};
use crate::state::settings::DeleteOutcome;

pub const LOGIN_NOT_FOUND_MESSAGE: &str = "Username or password incorrect";
pub const ACCOUNT_EXISTS_MESSAGE: &str = "Account already exists.";
pub const WRONG_PASSWORD_MESSAGE: &str = "Password incorrect";

/// Route a 422 body into the form's field slots.
///
/// Malformed bodies and tags the form has no slot for are unexpected
/// failures rather than being dropped.
fn field_error_outcome(kind: FormKind, body: &str) -> SubmitOutcome {
    let parsed: FieldErrorBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return SubmitOutcome::Unexpected(format!("invalid validation error body: {e}")),
    };
    match FieldName::from_tag(&parsed.field) {
        Some(field) if kind.accepts(field) => SubmitOutcome::FieldError { field, message: parsed.message },
        _ => SubmitOutcome::Unexpected(format!("unknown error field '{}'", parsed.field)),
    }
}

/// Map a `/auth/login` reply.
#[must_use]
pub fn classify_login(reply: &HttpReply) -> SubmitOutcome {
    match reply.status {
        422 => field_error_outcome(FormKind::Login, &reply.body),
        404 => SubmitOutcome::FormError(LOGIN_NOT_FOUND_MESSAGE.to_owned()),
        _ if reply.ok() => SubmitOutcome::Success(Navigation::push(HOME_ROUTE)),
        status => SubmitOutcome::Unexpected(http_failure_message(status)),
    }
}

/// Map a `/auth/register` reply. `Success` here means "registered"; the
/// caller still has to log in.
#[must_use]
pub fn classify_register(reply: &HttpReply) -> SubmitOutcome {
    match reply.status {
        422 => field_error_outcome(FormKind::Signup, &reply.body),
        409 => SubmitOutcome::FormError(ACCOUNT_EXISTS_MESSAGE.to_owned()),
        _ if reply.ok() => SubmitOutcome::Success(Navigation::push(HOME_ROUTE)),
        status => SubmitOutcome::Unexpected(http_failure_message(status)),
    }
}

/// Log in with `creds`.
pub async fn submit_login<A: AuthApi>(api: &A, creds: &Credentials) -> SubmitOutcome {
    match api.login(creds).await {
        Ok(reply) => classify_login(&reply),
        Err(e) => SubmitOutcome::Unexpected(e),
    }
}

/// Register, then log in with the same credentials.
///
/// The chained login does not map 404/422: the credentials were just
/// accepted, so any failure there is unexpected and does not navigate.
pub async fn submit_signup<A: AuthApi>(api: &A, registration: &Registration) -> SubmitOutcome {
    let registered = match api.register(registration).await {
        Ok(reply) => classify_register(&reply),
        Err(e) => return SubmitOutcome::Unexpected(e),
    };
    if !matches!(registered, SubmitOutcome::Success(_)) {
        return registered;
    }

    match api.login(&registration.credentials()).await {
        Ok(reply) if reply.ok() => SubmitOutcome::Success(Navigation::push(HOME_ROUTE)),
        Ok(reply) => SubmitOutcome::Unexpected(http_failure_message(reply.status)),
        Err(e) => SubmitOutcome::Unexpected(e),
    }
}

/// Map a `DELETE /accounts/me` reply.
#[must_use]
pub fn classify_delete(reply: &HttpReply) -> DeleteOutcome {
    match reply.status {
        401 => DeleteOutcome::SessionExpired(Navigation::replace(LOGIN_ROUTE)),
        404 => DeleteOutcome::WrongPassword(WRONG_PASSWORD_MESSAGE.to_owned()),
        _ if reply.ok() => DeleteOutcome::Deleted(Navigation::replace(SIGNUP_ROUTE)),
        status => DeleteOutcome::Unexpected(http_failure_message(status)),
    }
}

/// Delete the signed-in account after the user confirmed with `password`.
pub async fn submit_delete_account<A: AuthApi>(api: &A, password: &str) -> DeleteOutcome {
    let request = DeleteAccountRequest { password: password.to_owned() };
    match api.delete_account(&request).await {
        Ok(reply) => classify_delete(&reply),
        Err(e) => DeleteOutcome::Unexpected(e),
    }
}

/// Send unexpected failures to the console. Handled statuses are shown in
/// the form instead.
pub fn report(outcome: &SubmitOutcome) {
    if let SubmitOutcome::Unexpected(err) = outcome {
        #[cfg(feature = "hydrate")]
        log::error!("{err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    }
}
