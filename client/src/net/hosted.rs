//! HTTP adapter for the hosted identity provider's frontend API.
//!
//! Client-side (hydrate): form-encoded requests via `gloo-net` with cookie
//! credentials so the provider can keep its own session cookies.
//! Server-side (SSR): every call reports the provider as unavailable since the
//! session only exists in the browser.
//!
//! Responses wrap the resource as `{"response": ...}`; rejections carry
//! `{"errors": [...]}`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "hosted_test.rs"]
mod hosted_test;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::identity::{
    Credentials, IdentityProvider, ProviderError, SessionSummary, SignInAttempt, SignUpAttempt,
    SignUpDetails,
};

const SIGN_UPS_PATH: &str = "/v1/client/sign_ups";
const SIGN_INS_PATH: &str = "/v1/client/sign_ins";
const CLIENT_PATH: &str = "/v1/client";
const SESSIONS_PATH: &str = "/v1/client/sessions";
const EMAIL_CODE_STRATEGY: &str = "email_code";
const PASSWORD_STRATEGY: &str = "password";
const ACTIVE_SESSION_STATUS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

/// Identity provider reached over its frontend HTTP API.
#[derive(Clone, Debug, Default)]
pub struct HostedIdentity {
    base_url: String,
    sign_up_id: Arc<Mutex<Option<String>>>,
}

impl HostedIdentity {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            sign_up_id: Arc::default(),
        }
    }

    fn remember_sign_up(&self, id: &str) {
        if let Ok(mut current) = self.sign_up_id.lock() {
            *current = Some(id.to_owned());
        }
    }

    fn current_sign_up(&self) -> Result<String, ProviderError> {
        self.sign_up_id
            .lock()
            .ok()
            .and_then(|current| current.clone())
            .ok_or(ProviderError::NoSignUpInProgress)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        form: Option<String>,
    ) -> Result<T, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let url = endpoint(&self.base_url, path);
            let builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Delete => Request::delete(&url),
            }
            .credentials(RequestCredentials::Include);

            let request = match form {
                Some(body) => builder
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body),
                None => builder.build(),
            }
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ProviderError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ProviderError::Transport(e.to_string()))?;
            parse_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, form);
            Err(ProviderError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for HostedIdentity {
    fn is_ready(&self) -> bool {
        cfg!(feature = "hydrate") && !self.base_url.is_empty()
    }

    async fn create_account(&self, details: &SignUpDetails) -> Result<SignUpAttempt, ProviderError> {
        let form = encode_form(&[
            ("first_name", details.first_name.as_str()),
            ("last_name", details.last_name.as_str()),
            ("email_address", details.email_address.as_str()),
            ("password", details.password.as_str()),
        ]);
        let attempt: SignUpAttempt = self.call(Verb::Post, SIGN_UPS_PATH, Some(form)).await?;
        self.remember_sign_up(&attempt.id);
        Ok(attempt)
    }

    async fn prepare_email_verification(&self) -> Result<(), ProviderError> {
        let id = self.current_sign_up()?;
        let path = format!("{SIGN_UPS_PATH}/{id}/prepare_verification");
        let form = encode_form(&[("strategy", EMAIL_CODE_STRATEGY)]);
        let _: SignUpAttempt = self.call(Verb::Post, &path, Some(form)).await?;
        Ok(())
    }

    async fn attempt_email_verification(&self, code: &str) -> Result<SignUpAttempt, ProviderError> {
        let id = self.current_sign_up()?;
        let path = format!("{SIGN_UPS_PATH}/{id}/attempt_verification");
        let form = encode_form(&[("strategy", EMAIL_CODE_STRATEGY), ("code", code)]);
        self.call(Verb::Post, &path, Some(form)).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInAttempt, ProviderError> {
        let form = encode_form(&[
            ("identifier", credentials.identifier.as_str()),
            ("password", credentials.password.as_str()),
            ("strategy", PASSWORD_STRATEGY),
        ]);
        self.call(Verb::Post, SIGN_INS_PATH, Some(form)).await
    }

    async fn finalize_session(&self, session_id: &str) -> Result<(), ProviderError> {
        let path = format!("{SESSIONS_PATH}/{session_id}/touch");
        let _: serde_json::Value = self.call(Verb::Post, &path, Some(String::new())).await?;
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<SessionSummary>, ProviderError> {
        let client: Option<ClientResource> = self.call(Verb::Get, CLIENT_PATH, None).await?;
        Ok(client.and_then(active_session))
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let _: serde_json::Value = self.call(Verb::Delete, SESSIONS_PATH, None).await?;
        if let Ok(mut current) = self.sign_up_id.lock() {
            *current = None;
        }
        Ok(())
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<super::identity::ProviderIssue>,
}

#[derive(Debug, Deserialize)]
struct ClientResource {
    #[serde(default)]
    sessions: Vec<SessionResource>,
    #[serde(default)]
    last_active_session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionResource {
    id: String,
    status: String,
    #[serde(default)]
    user: Option<UserResource>,
}

#[derive(Debug, Deserialize)]
struct UserResource {
    id: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn encode_form(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decode a provider response body given its HTTP status.
#[cfg(any(test, feature = "hydrate"))]
fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ProviderError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<Envelope<T>>(body)
            .map(|envelope| envelope.response)
            .map_err(|e| ProviderError::Malformed(e.to_string()));
    }

    let errors = serde_json::from_str::<ErrorEnvelope>(body)
        .unwrap_or_default()
        .errors;
    if errors.is_empty() {
        Err(ProviderError::Transport(format!("provider responded with status {status}")))
    } else {
        Err(ProviderError::Rejected(errors))
    }
}

/// Pick the last active session, ignoring ended or expired ones.
fn active_session(client: ClientResource) -> Option<SessionSummary> {
    let active_id = client.last_active_session_id?;
    client
        .sessions
        .into_iter()
        .find(|session| session.id == active_id && session.status == ACTIVE_SESSION_STATUS)
        .map(|session| SessionSummary {
            session_id: session.id,
            user_id: session.user.map(|user| user.id),
        })
}
