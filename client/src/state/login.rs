//! Single-step email + password sign-in.
//!
//! `LoginForm` gates submission the same way the registration form does; the
//! `sign_in` driver reduces the provider result to a `SignInOutcome`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::auth::{LANDING_PATH, activate_session};
use super::form::FieldState;
use crate::net::identity::{AttemptStatus, Credentials, IdentityProvider};
use crate::util::validators::{is_valid_email, is_valid_password};

const SIGN_IN_FALLBACK: &str = "Sign-in failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    Complete,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: FieldState,
    pub password: FieldState,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.email.input(value, is_valid_email);
    }

    pub fn set_password(&mut self, value: String) {
        self.password.input(value, is_valid_password);
    }

    pub fn can_submit(&self, provider_ready: bool) -> bool {
        provider_ready && !self.submitting && self.email.valid && self.password.valid
    }

    /// Start a submit, returning the credentials or `None` when gated.
    pub fn begin_submit(&mut self, provider_ready: bool) -> Option<Credentials> {
        if !self.can_submit(provider_ready) {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(Credentials {
            identifier: self.email.value.clone(),
            password: self.password.value.clone(),
        })
    }

    /// Fold a sign-in outcome into the form; returns a path to navigate to.
    pub fn apply(&mut self, outcome: SignInOutcome) -> Option<&'static str> {
        self.submitting = false;
        match outcome {
            SignInOutcome::Complete => Some(LANDING_PATH),
            SignInOutcome::Failed(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

/// Sign in with a password and activate the created session.
pub async fn sign_in<P>(provider: &P, credentials: &Credentials) -> SignInOutcome
where
    P: IdentityProvider + ?Sized,
{
    let attempt = match provider.sign_in(credentials).await {
        Ok(attempt) => attempt,
        Err(e) => {
            log::warn!("login: sign-in failed: {e}");
            return SignInOutcome::Failed(
                e.message().unwrap_or_else(|| SIGN_IN_FALLBACK.to_owned()),
            );
        }
    };
    log::info!("login: sign-in {} status={}", attempt.id, attempt.status);

    if attempt.status != AttemptStatus::Complete {
        return SignInOutcome::Failed(format!(
            "Sign-In status: {}. Please complete all required steps.",
            attempt.status
        ));
    }

    match activate_session(provider, attempt.created_session_id.as_deref()).await {
        Ok(()) => SignInOutcome::Complete,
        Err(e) => {
            log::warn!("login: session activation failed: {e}");
            SignInOutcome::Failed(e.message().unwrap_or_else(|| SIGN_IN_FALLBACK.to_owned()))
        }
    }
}
