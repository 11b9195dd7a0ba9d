use super::*;

#[test]
fn endpoints_live_under_api_v1() {
    for endpoint in [CHECK_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT, ACCOUNT_ME_ENDPOINT] {
        assert!(endpoint.starts_with("/api/v1/"), "{endpoint} escapes /api/v1");
    }
}

#[test]
fn http_failure_message_formats_status() {
    assert_eq!(http_failure_message(500), "http failure with status 500");
}

#[test]
fn fetch_failed_message_prefixes_error() {
    assert_eq!(fetch_failed_message("NetworkError"), "fetch failed due to NetworkError");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_api_is_unavailable_without_hydrate() {
    let api = BrowserApi;
    let result = futures::executor::block_on(api.check_session());
    assert_eq!(result, Err("not available on server".to_owned()));
}
