//! Reverse proxy for `/api/*`.
//!
//! Requests are replayed against the backend origin with the same method,
//! path, query, headers and body. The backend owns sessions through cookies,
//! so `Cookie` and `Set-Cookie` pass through untouched; only hop-by-hop
//! headers are dropped.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::GatewayState;

/// Headers scoped to a single connection (RFC 9110 §7.6.1) plus the ones
/// recomputed for the outgoing hop.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("failed to read request body: {0}")]
    RequestBody(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "proxy request failed");
        } else {
            tracing::warn!(error = %self, "proxy request rejected");
        }
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Join the backend origin with the incoming path and query.
pub(crate) fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

pub(crate) fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Header names listed in `Connection`; they are hop-by-hop for this message.
fn connection_tokens(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Copy `headers`, minus hop-by-hop ones and any named in `Connection`.
/// Repeated headers (`Set-Cookie`) keep every value.
pub(crate) fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let named = connection_tokens(headers);
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name.as_str()) && !named.iter().any(|t| t == name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// `ANY /api` and `ANY /api/{*path}`: forward to the backend and relay its reply.
pub async fn forward(State(state): State<GatewayState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let limit = state.body_limit_bytes;
    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        return Err(ProxyError::BodyTooLarge { limit });
    }
    let body = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);
    tracing::debug!(method = %parts.method, %url, "forwarding");

    let upstream = state
        .client
        .request(parts.method, url)
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwarded_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
