//! REST API helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser, where the session cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Transport and body-read failures become `Err(String)`. Any HTTP status,
//! including 4xx/5xx, is a successful `HttpReply`; deciding what a status
//! means is left to `util::submit` so that logic can be tested without a
//! browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, DeleteAccountRequest, HttpReply, Registration};

pub const CHECK_ENDPOINT: &str = "/api/v1/auth/check";
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/v1/auth/register";
pub const ACCOUNT_ME_ENDPOINT: &str = "/api/v1/accounts/me";

/// Error text for a status the caller did not expect.
#[must_use]
pub fn http_failure_message(status: u16) -> String {
    format!("http failure with status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(err: &str) -> String {
    format!("fetch failed due to {err}")
}

/// Backend operations used by the auth pages.
///
/// Implemented by [`BrowserApi`] for real requests; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /api/v1/auth/check`.
    async fn check_session(&self) -> Result<HttpReply, String>;

    /// `POST /api/v1/auth/login`.
    async fn login(&self, creds: &Credentials) -> Result<HttpReply, String>;

    /// `POST /api/v1/auth/register`.
    async fn register(&self, registration: &Registration) -> Result<HttpReply, String>;

    /// `DELETE /api/v1/accounts/me`.
    async fn delete_account(&self, request: &DeleteAccountRequest) -> Result<HttpReply, String>;
}

/// [`AuthApi`] backed by the browser's `fetch`, same-origin so the session
/// cookie is attached automatically.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

#[cfg(feature = "hydrate")]
async fn into_reply(resp: gloo_net::http::Response) -> Result<HttpReply, String> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| fetch_failed_message(&e.to_string()))?;
    Ok(HttpReply { status, body })
}

impl AuthApi for BrowserApi {
    async fn check_session(&self) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(CHECK_ENDPOINT)
                .send()
                .await
                .map_err(|e| fetch_failed_message(&e.to_string()))?;
            into_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }

    async fn login(&self, creds: &Credentials) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .json(creds)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| fetch_failed_message(&e.to_string()))?;
            into_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = creds;
            Err("not available on server".to_owned())
        }
    }

    async fn register(&self, registration: &Registration) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
                .json(registration)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| fetch_failed_message(&e.to_string()))?;
            into_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err("not available on server".to_owned())
        }
    }

    async fn delete_account(&self, request: &DeleteAccountRequest) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(ACCOUNT_ME_ENDPOINT)
                .json(request)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| fetch_failed_message(&e.to_string()))?;
            into_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}
