//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the header, and the register/login pages to decide
//! between protected and fallback rendering. The session itself is owned by the
//! identity provider; this is only a local summary of whether one exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::{IdentityProvider, ProviderError, SessionSummary};

/// Where successful registration and login navigate to.
pub const LANDING_PATH: &str = "/";

/// Authentication state tracking the active session and loading status.
///
/// Starts as loading until the first provider session query resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<SessionSummary>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after a session query.
    pub fn resolved(session: Option<SessionSummary>) -> Self {
        Self { session, loading: false }
    }

    pub fn signed_in(&self) -> bool {
        !self.loading && self.session.is_some()
    }
}

/// Make the session created by a completed sign-up or sign-in the active one.
///
/// # Errors
///
/// Returns [`ProviderError::Malformed`] when a completed attempt names no
/// session, or the provider's error when activation fails.
pub async fn activate_session<P>(provider: &P, session_id: Option<&str>) -> Result<(), ProviderError>
where
    P: IdentityProvider + ?Sized,
{
    let Some(session_id) = session_id else {
        return Err(ProviderError::Malformed(
            "completed attempt carried no session id".to_owned(),
        ));
    };
    provider.finalize_session(session_id).await
}
