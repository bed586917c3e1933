//! Identity provider capability consumed by the auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accounts, credentials, sessions, and verification codes are owned by an
//! external hosted provider. The flows only see this trait, so they can be
//! driven by the HTTP adapter in `net::hosted` in the browser and by in-memory
//! fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections keep the provider's error list so flows can map known
//! codes to user-facing messages. Transport and decode failures are separate
//! variants and carry only a description.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

/// Unverified-field name the provider reports when email verification is pending.
pub const EMAIL_ADDRESS_FIELD: &str = "email_address";

/// Status reported for a sign-up, verification, or sign-in attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AttemptStatus {
    Complete,
    MissingRequirements,
    Other(String),
}

impl AttemptStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Complete => "complete",
            Self::MissingRequirements => "missing_requirements",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AttemptStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "complete" => Self::Complete,
            "missing_requirements" => Self::MissingRequirements,
            _ => Self::Other(raw),
        }
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account fields submitted when creating a sign-up.
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpDetails {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl fmt::Debug for SignUpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDetails")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials submitted when signing in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Provider view of an in-progress sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignUpAttempt {
    pub id: String,
    pub status: AttemptStatus,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    #[serde(default)]
    pub unverified_fields: Vec<String>,
    #[serde(default)]
    pub created_session_id: Option<String>,
}

impl SignUpAttempt {
    /// True when the provider is waiting for the email address to be verified.
    pub fn awaits_email_verification(&self) -> bool {
        self.status == AttemptStatus::MissingRequirements
            && self.unverified_fields.iter().any(|field| field == EMAIL_ADDRESS_FIELD)
    }
}

/// Provider view of a sign-in attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInAttempt {
    pub id: String,
    pub status: AttemptStatus,
    #[serde(default)]
    pub created_session_id: Option<String>,
}

/// Non-sensitive summary of the active provider session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: String,
    pub user_id: Option<String>,
}

/// One error entry from a provider rejection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProviderIssue {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub long_message: Option<String>,
}

impl ProviderIssue {
    /// The provider's short message, or the long form when the short one is blank.
    pub fn best_message(&self) -> Option<&str> {
        Some(self.message.as_str())
            .filter(|message| !message.trim().is_empty())
            .or_else(|| {
                self.long_message
                    .as_deref()
                    .filter(|message| !message.trim().is_empty())
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("{}", summarize_issues(.0))]
    Rejected(Vec<ProviderIssue>),
    #[error("Unable to reach the identity provider: {0}")]
    Transport(String),
    #[error("Unexpected identity provider response: {0}")]
    Malformed(String),
    #[error("No sign-up is in progress.")]
    NoSignUpInProgress,
    #[error("The identity provider is not available.")]
    Unavailable,
}

impl ProviderError {
    /// Message suitable for display, or `None` when a rejection carried no text.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rejected(issues) => issues
                .iter()
                .find_map(ProviderIssue::best_message)
                .map(str::to_owned),
            other => Some(other.to_string()),
        }
    }
}

fn summarize_issues(issues: &[ProviderIssue]) -> String {
    let messages = issues
        .iter()
        .filter_map(ProviderIssue::best_message)
        .collect::<Vec<_>>();
    if messages.is_empty() {
        "identity provider rejected the request".to_owned()
    } else {
        messages.join(" ")
    }
}

/// Operations the application consumes from the hosted identity provider.
///
/// The adapter tracks the in-progress sign-up between `create_account` and the
/// verification calls, mirroring how provider SDKs expose a single current
/// sign-up resource.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Whether the provider client is configured and able to take requests.
    fn is_ready(&self) -> bool;

    /// Create a sign-up with the given account fields.
    async fn create_account(&self, details: &SignUpDetails) -> Result<SignUpAttempt, ProviderError>;

    /// Ask the provider to email a verification code for the current sign-up.
    async fn prepare_email_verification(&self) -> Result<(), ProviderError>;

    /// Submit the emailed code for the current sign-up.
    async fn attempt_email_verification(&self, code: &str) -> Result<SignUpAttempt, ProviderError>;

    /// Start a password sign-in.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInAttempt, ProviderError>;

    /// Make the given session the active one for this browser.
    async fn finalize_session(&self, session_id: &str) -> Result<(), ProviderError>;

    /// Query the active session, if any.
    async fn current_session(&self) -> Result<Option<SessionSummary>, ProviderError>;

    /// End every session held by this browser.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
