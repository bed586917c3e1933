//! REST API helpers for listable resources such as courses.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `FetchError::Status` carrying the numeric status and
//! status text. Transport, encoding, and decoding failures are wrapped as
//! `FetchError::Network`. Nothing is retried or cached here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::CourseList;

const COURSES_PATH: &str = "courses";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

/// Per-request options; the body is only sent for non-GET methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Network or fetch error: {0}")]
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn resource_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim().trim_end_matches('/'), path.trim().trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_headers(api_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = api_token.filter(|token| !token.trim().is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

#[cfg(any(test, feature = "hydrate"))]
fn request_body(options: &RequestOptions) -> Result<Option<String>, FetchError> {
    if options.method == HttpMethod::Get {
        return Ok(None);
    }
    options
        .body
        .as_ref()
        .map(|body| serde_json::to_string(body).map_err(|e| FetchError::Network(e.to_string())))
        .transpose()
}

/// Request `<api base url>/<path>` and decode the JSON response.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx responses and
/// [`FetchError::Network`] when the request cannot be sent or decoded.
pub async fn fetch_json<T: DeserializeOwned>(
    path: &str,
    options: RequestOptions,
) -> Result<T, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let config = crate::config::ClientConfig::load();
        let url = resource_url(&config.api_base_url, path);
        let mut builder = match options.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        for (name, value) in request_headers(config.api_token.as_deref()) {
            builder = builder.header(name, &value);
        }

        let request = match request_body(&options)? {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| FetchError::Network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, options);
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

/// Fetch the course listing from `<api base url>/courses`.
///
/// # Errors
///
/// Propagates any [`FetchError`] from [`fetch_json`].
pub async fn fetch_courses() -> Result<CourseList, FetchError> {
    fetch_json(COURSES_PATH, RequestOptions::default()).await
}
