//! Shared gateway state.
//!
//! DESIGN
//! ======
//! `GatewayState` is injected into the proxy handler via the `State`
//! extractor. It holds one pooled `reqwest::Client` for all upstream calls
//! plus the backend origin and body limit from `GatewayConfig`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub backend_url: Arc<str>,
    pub body_limit_bytes: usize,
}

impl GatewayState {
    /// Build the upstream client. Redirects are passed back to the browser
    /// untouched rather than followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            backend_url: Arc::from(config.backend_url.as_str()),
            body_limit_bytes: config.body_limit_bytes,
        })
    }
}
