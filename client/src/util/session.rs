//! Existing-session redirect for the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both auth pages probe `/api/v1/auth/check` once on mount and leave for `/`
//! when the caller is already signed in. The probe is bound to the page's
//! lifetime through a `CancelScope`: once the page is torn down, a late
//! reply is dropped instead of redirecting whatever route is now showing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{AuthApi, http_failure_message};
use crate::net::types::HttpReply;
use crate::state::auth_form::{HOME_ROUTE, Navigation};

/// Shared cancellation flag tied to a component's lifetime.
#[derive(Clone, Debug, Default)]
pub struct CancelScope {
    cancelled: Arc<AtomicBool>,
}

impl CancelScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// What the session probe found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Authenticated,
    Unauthenticated,
    /// Unexpected status or transport error. Logged, never redirects.
    Failed(String),
}

impl SessionCheck {
    /// Only an authenticated caller is moved off the auth page, replacing
    /// the history entry so "back" does not return to the form.
    #[must_use]
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            Self::Authenticated => Some(Navigation::replace(HOME_ROUTE)),
            Self::Unauthenticated | Self::Failed(_) => None,
        }
    }
}

#[must_use]
pub fn classify_check(reply: &HttpReply) -> SessionCheck {
    if reply.ok() {
        return SessionCheck::Authenticated;
    }
    if reply.status == 401 {
        return SessionCheck::Unauthenticated;
    }
    SessionCheck::Failed(http_failure_message(reply.status))
}

/// Probe the session once. Returns `None` when `scope` was cancelled while
/// the request was in flight.
pub async fn run_session_check<A: AuthApi>(api: &A, scope: &CancelScope) -> Option<SessionCheck> {
    let check = match api.check_session().await {
        Ok(reply) => classify_check(&reply),
        Err(e) => SessionCheck::Failed(e),
    };
    if scope.is_cancelled() {
        return None;
    }
    Some(check)
}

/// Start the mount-time session probe for the current component and redirect
/// home if a session already exists. The probe is abandoned on cleanup.
pub fn install_session_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let scope = CancelScope::new();
    let cleanup_scope = scope.clone();
    on_cleanup(move || cleanup_scope.cancel());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(check) = run_session_check(&crate::net::api::BrowserApi, &scope).await else {
            return;
        };
        if let SessionCheck::Failed(err) = &check {
            log::error!("{err}");
        }
        if let Some(nav) = check.navigation() {
            navigate(nav.path, nav.options());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, navigate);
}
