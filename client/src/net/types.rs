//! Request and response DTOs for the `/api/v1` auth endpoints.
//!
//! DESIGN
//! ======
//! Request bodies are plain `Serialize` structs. Error bodies carry the
//! backend's field discriminator as a raw string; it is only trusted after
//! `FieldName::from_tag` accepts it, so an unknown tag never lands in a UI slot.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login credentials posted to `/api/v1/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload posted to `/api/v1/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl Registration {
    /// Credentials for the login call chained after a successful registration.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { username: self.username.clone(), password: self.password.clone() }
    }
}

/// Body of `DELETE /api/v1/accounts/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteAccountRequest {
    pub password: String,
}

/// Form input a validation error can be attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Password,
    Fullname,
}

impl FieldName {
    /// Parse the backend's `field` tag. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "username" => Some(Self::Username),
            "password" => Some(Self::Password),
            "fullname" => Some(Self::Fullname),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Fullname => "fullname",
        }
    }
}

/// Body returned with HTTP 422.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

/// Raw HTTP reply as seen by the submission logic: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Same range check as `Response.ok`: 200..=299.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
