use super::*;

#[test]
fn resource_url_joins_base_and_path() {
    assert_eq!(
        resource_url("https://api.example.com/", "courses"),
        "https://api.example.com/courses"
    );
    assert_eq!(
        resource_url("https://api.example.com", "/courses"),
        "https://api.example.com/courses"
    );
}

#[test]
fn resource_url_with_empty_base_is_root_relative() {
    assert_eq!(resource_url("", "courses"), "/courses");
}

#[test]
fn headers_always_include_json_content_type() {
    let headers = request_headers(None);
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn headers_include_bearer_token_when_configured() {
    let headers = request_headers(Some("tok_123"));
    assert!(headers.contains(&("Authorization", "Bearer tok_123".to_owned())));
}

#[test]
fn headers_skip_blank_token() {
    let headers = request_headers(Some("   "));
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
}

#[test]
fn get_requests_never_send_a_body() {
    let options = RequestOptions {
        method: HttpMethod::Get,
        body: Some(serde_json::json!({ "ignored": true })),
    };
    assert_eq!(request_body(&options), Ok(None));
}

#[test]
fn post_requests_serialize_the_body() {
    let options = RequestOptions {
        method: HttpMethod::Post,
        body: Some(serde_json::json!({ "name": "Rust 101" })),
    };
    assert_eq!(request_body(&options), Ok(Some(r#"{"name":"Rust 101"}"#.to_owned())));
}

#[test]
fn post_without_body_sends_nothing() {
    let options = RequestOptions { method: HttpMethod::Post, body: None };
    assert_eq!(request_body(&options), Ok(None));
}

#[test]
fn status_error_message_includes_numeric_code() {
    let err = FetchError::Status { status: 503, status_text: "Service Unavailable".to_owned() };
    assert_eq!(err.to_string(), "Request failed: 503 Service Unavailable");
}

#[test]
fn network_error_message_is_wrapped() {
    let err = FetchError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "Network or fetch error: connection refused");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_is_unavailable_on_server() {
    let result = futures::executor::block_on(fetch_courses());
    assert_eq!(result, Err(FetchError::Network("not available on server".to_owned())));
}
