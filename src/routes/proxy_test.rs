use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::any;

use super::*;
use crate::config::GatewayConfig;
use crate::routes::api_routes;

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_preserves_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:80", "/api/v1/auth/check?x=1"),
        "http://backend:80/api/v1/auth/check?x=1"
    );
}

#[test]
fn upstream_url_tolerates_trailing_slash() {
    assert_eq!(upstream_url("http://backend:80/", "/api/v1/auth/login"), "http://backend:80/api/v1/auth/login");
}

#[test]
fn hop_by_hop_detection_is_case_insensitive() {
    assert!(is_hop_by_hop("Connection"));
    assert!(is_hop_by_hop("TRANSFER-ENCODING"));
    assert!(is_hop_by_hop("host"));
    assert!(!is_hop_by_hop("cookie"));
    assert!(!is_hop_by_hop("set-cookie"));
    assert!(!is_hop_by_hop("content-type"));
}

#[test]
fn forwarded_headers_drops_hop_by_hop_and_keeps_repeats() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("gateway:3000"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

    let out = forwarded_headers(&headers);

    assert!(out.get(header::CONNECTION).is_none());
    assert!(out.get(header::HOST).is_none());
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn forwarded_headers_drops_headers_named_by_connection() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("close, X-Trace-Hop"));
    headers.append(header::CONNECTION, HeaderValue::from_static("x-debug"));
    headers.insert("x-trace-hop", HeaderValue::from_static("1"));
    headers.insert("x-debug", HeaderValue::from_static("on"));
    headers.insert(header::COOKIE, HeaderValue::from_static("jwt=abc"));

    let out = forwarded_headers(&headers);

    assert!(out.get("x-trace-hop").is_none());
    assert!(out.get("x-debug").is_none());
    assert_eq!(out.get(header::COOKIE).unwrap(), "jwt=abc");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::RequestBody("eof".to_owned()).status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// End-to-end through a stub backend
// =============================================================================

/// Echoes what the backend received and sets a session cookie, the way the
/// real login endpoint does.
async fn echo(req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let received = serde_json::json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "cookie": parts.headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
        "content_type": parts.headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    ([(header::SET_COOKIE, "jwt=token; Path=/; HttpOnly")], Json(received)).into_response()
}

async fn validation_failure() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "field": "username", "message": "Required" })),
    )
        .into_response()
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn gateway_state(backend_url: String, body_limit_bytes: usize) -> GatewayState {
    let config = GatewayConfig { port: 0, backend_url, body_limit_bytes, connect_timeout_secs: 2 };
    GatewayState::new(&config).unwrap()
}

async fn spawn_gateway_with_backend(body_limit_bytes: usize) -> SocketAddr {
    let backend = Router::new()
        .route("/api", any(echo))
        .route("/api/v1/auth/register", any(validation_failure))
        .route("/api/{*path}", any(echo));
    let backend_addr = spawn(backend).await;
    spawn(api_routes(gateway_state(format!("http://{backend_addr}"), body_limit_bytes))).await
}

#[tokio::test]
async fn forwards_post_with_body_query_and_cookie() {
    let gateway = spawn_gateway_with_backend(1024).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{gateway}/api/v1/auth/login?next=%2F"))
        .header(header::COOKIE, "jwt=old")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"username":"alice","password":"wonderland"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::SET_COOKIE).unwrap(), "jwt=token; Path=/; HttpOnly");
    let received: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(received["method"], "POST");
    assert_eq!(received["uri"], "/api/v1/auth/login?next=%2F");
    assert_eq!(received["cookie"], "jwt=old");
    assert_eq!(received["content_type"], "application/json");
    assert_eq!(received["body"], r#"{"username":"alice","password":"wonderland"}"#);
}

#[tokio::test]
async fn forwards_bare_api_path() {
    let gateway = spawn_gateway_with_backend(1024).await;

    let resp = reqwest::get(format!("http://{gateway}/api?page=1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let received: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(received["uri"], "/api?page=1");
}

#[tokio::test]
async fn forwards_other_methods() {
    let gateway = spawn_gateway_with_backend(1024).await;

    let resp = reqwest::Client::new()
        .request(Method::DELETE, format!("http://{gateway}/api/v1/accounts/me"))
        .send()
        .await
        .unwrap();

    let received: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(received["method"], "DELETE");
    assert_eq!(received["uri"], "/api/v1/accounts/me");
}

#[tokio::test]
async fn relays_backend_error_status_and_body() {
    let gateway = spawn_gateway_with_backend(1024).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{gateway}/api/v1/auth/register"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "field": "username", "message": "Required" }));
}

#[tokio::test]
async fn rejects_oversized_body() {
    let gateway = spawn_gateway_with_backend(8).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{gateway}/api/v1/auth/login"))
        .body("this body is longer than eight bytes")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);
    let gateway = spawn(api_routes(gateway_state(format!("http://{dead_addr}"), 1024))).await;

    let resp = reqwest::get(format!("http://{gateway}/api/v1/auth/check")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let gateway = spawn(api_routes(gateway_state("http://127.0.0.1:9".to_owned(), 1024))).await;
    let resp = reqwest::get(format!("http://{gateway}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_api_paths_are_not_proxied() {
    let gateway = spawn_gateway_with_backend(1024).await;
    let resp = reqwest::get(format!("http://{gateway}/auth/login")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
