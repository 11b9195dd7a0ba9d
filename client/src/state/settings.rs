//! Account settings state: profile form, password form, delete dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile and password updates have no backend route yet and only report
//! what they would send. Deleting the account is wired to
//! `DELETE /api/v1/accounts/me`, but only from a dialog the user explicitly
//! confirmed.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::state::auth_form::Navigation;

/// Editable profile fields, seeded from the caller's current values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub fullname: String,
}

impl ProfileForm {
    #[must_use]
    pub fn new(initial_username: Option<String>, initial_fullname: Option<String>) -> Self {
        Self { username: initial_username.unwrap_or_default(), fullname: initial_fullname.unwrap_or_default() }
    }

    /// Line logged when the profile form is submitted.
    #[must_use]
    pub fn update_summary(&self) -> String {
        format!("Updating profile: username={:?} fullname={:?}", self.username, self.fullname)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordForm {
    /// Line logged when the password form is submitted. Never includes
    /// either password.
    #[must_use]
    pub fn update_summary(&self) -> &'static str {
        "Updating password"
    }
}

/// Result of a confirmed account deletion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Navigation),
    /// Session missing or expired; send the user to log in again.
    SessionExpired(Navigation),
    WrongPassword(String),
    Unexpected(String),
}

/// Delete-account confirmation dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Confirming {
        password: String,
        error: Option<String>,
    },
    Deleting,
}

impl DeleteDialog {
    pub fn open(&mut self) {
        if *self == Self::Closed {
            *self = Self::Confirming { password: String::new(), error: None };
        }
    }

    /// Dismiss without deleting. Ignored once the request is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Confirming { .. }) {
            *self = Self::Closed;
        }
    }

    pub fn set_password(&mut self, value: String) {
        if let Self::Confirming { password, .. } = self {
            *password = value;
        }
    }

    /// Acknowledge the warning. Returns the password to send when the dialog
    /// was open with a non-empty password; otherwise nothing fires.
    pub fn confirm(&mut self) -> Option<String> {
        let Self::Confirming { password, .. } = self else {
            return None;
        };
        if password.is_empty() {
            return None;
        }
        let password = std::mem::take(password);
        *self = Self::Deleting;
        Some(password)
    }

    /// Apply the delete result and return the navigation to perform.
    pub fn finish(&mut self, outcome: DeleteOutcome) -> Option<Navigation> {
        match outcome {
            DeleteOutcome::Deleted(nav) | DeleteOutcome::SessionExpired(nav) => {
                *self = Self::Closed;
                Some(nav)
            }
            DeleteOutcome::WrongPassword(message) => {
                *self = Self::Confirming { password: String::new(), error: Some(message) };
                None
            }
            DeleteOutcome::Unexpected(_) => {
                *self = Self::Confirming { password: String::new(), error: None };
                None
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting)
    }

    #[must_use]
    pub fn password(&self) -> &str {
        match self {
            Self::Confirming { password, .. } => password,
            Self::Closed | Self::Deleting => "",
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Confirming { error, .. } => error.as_deref(),
            Self::Closed | Self::Deleting => None,
        }
    }
}
