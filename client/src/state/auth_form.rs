//! Per-form submission state for the login and signup pages.
//!
//! DESIGN
//! ======
//! A form moves `Idle -> Submitting -> {Success | FieldError | FormError |
//! UnexpectedFailure}` and back to `Idle` on the next edit. At most one error
//! slot is populated at a time. Submit handlers never navigate themselves;
//! they hand a `SubmitOutcome` to `AuthFormState::finish`, which returns the
//! `Navigation` the page should perform, at most once per form.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos_router::NavigateOptions;

use crate::net::types::FieldName;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const SIGNUP_ROUTE: &str = "/auth/signup";
pub const SETTINGS_ROUTE: &str = "/settings";
pub const UPDATE_PASSWORD_ROUTE: &str = "/update-password";

/// A route change requested by a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub path: &'static str,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Navigation {
    #[must_use]
    pub const fn push(path: &'static str) -> Self {
        Self { path, replace: false }
    }

    #[must_use]
    pub const fn replace(path: &'static str) -> Self {
        Self { path, replace: true }
    }

    #[must_use]
    pub fn options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// Which form an error body is being routed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    /// Whether this form renders an error slot for `field`.
    #[must_use]
    pub fn accepts(self, field: FieldName) -> bool {
        match (self, field) {
            (_, FieldName::Username | FieldName::Password) => true,
            (Self::Signup, FieldName::Fullname) => true,
            (Self::Login, FieldName::Fullname) => false,
        }
    }
}

/// Result of one submission, decided from the backend reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success(Navigation),
    FieldError { field: FieldName, message: String },
    FormError(String),
    /// Status or transport failure the form has no slot for. Logged only.
    Unexpected(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    FieldError,
    FormError,
    UnexpectedFailure,
}

/// Error messages shown by a form. At most one is `Some`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub fullname: Option<String>,
    /// Banner-level error not tied to a single input.
    pub form: Option<String>,
}

impl FormErrors {
    /// Show `message` under `field`, clearing every other slot.
    pub fn set_field(&mut self, field: FieldName, message: String) {
        *self = Self::default();
        match field {
            FieldName::Username => self.username = Some(message),
            FieldName::Password => self.password = Some(message),
            FieldName::Fullname => self.fullname = Some(message),
        }
    }

    /// Show a banner error, clearing all field errors.
    pub fn set_form(&mut self, message: String) {
        *self = Self { form: Some(message), ..Self::default() };
    }

    #[must_use]
    pub fn field(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Username => self.username.as_deref(),
            FieldName::Password => self.password.as_deref(),
            FieldName::Fullname => self.fullname.as_deref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.fullname.is_none() && self.form.is_none()
    }
}

/// Reactive state owned by a single login or signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub status: FormStatus,
    pub errors: FormErrors,
    navigated: bool,
}

impl AuthFormState {
    /// Enter `Submitting`. Returns `false` (and changes nothing) while a
    /// request is in flight or after the form already succeeded.
    pub fn begin_submit(&mut self) -> bool {
        if matches!(self.status, FormStatus::Submitting | FormStatus::Success) {
            return false;
        }
        self.status = FormStatus::Submitting;
        true
    }

    /// Record a submission result and return the navigation to perform.
    ///
    /// A success yields its navigation only the first time; later successes
    /// return `None`.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<Navigation> {
        match outcome {
            SubmitOutcome::Success(nav) => {
                self.status = FormStatus::Success;
                if self.navigated {
                    return None;
                }
                self.navigated = true;
                Some(nav)
            }
            SubmitOutcome::FieldError { field, message } => {
                self.errors.set_field(field, message);
                self.status = FormStatus::FieldError;
                None
            }
            SubmitOutcome::FormError(message) => {
                self.errors.set_form(message);
                self.status = FormStatus::FormError;
                None
            }
            SubmitOutcome::Unexpected(_) => {
                self.status = FormStatus::UnexpectedFailure;
                None
            }
        }
    }

    /// An input changed. Returns to `Idle` but keeps the previous errors on
    /// screen until the next result arrives.
    pub fn edited(&mut self) {
        if !matches!(self.status, FormStatus::Submitting | FormStatus::Success) {
            self.status = FormStatus::Idle;
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}
