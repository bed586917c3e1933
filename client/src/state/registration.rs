//! Two-phase registration: account details, then an emailed verification code.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RegistrationForm` is the component-owned state for the register page. Its
//! `begin_*` methods gate submission and its `apply_*` methods fold a provider
//! outcome back into the form. The async drivers talk to the identity provider
//! and reduce every result to a `SignUpOutcome` or `VerificationOutcome`.
//!
//! DESIGN
//! ======
//! The phase only moves forward when the provider confirms a verification code
//! was sent, and only moves back through `back()`. A submit is never started
//! while another one from the same form is outstanding.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use super::auth::{LANDING_PATH, activate_session};
use super::form::FieldState;
use crate::net::identity::{
    AttemptStatus, IdentityProvider, ProviderError, ProviderIssue, SignUpDetails,
};
use crate::util::validators::{
    MAX_CODE_LEN, is_code_ready, is_valid_email, is_valid_name, is_valid_password,
    passwords_match,
};

const SIGN_UP_FALLBACK: &str = "Sign-up failed. Please try again.";
const UNKNOWN_ISSUE: &str = "Unknown error occurred.";
const VERIFICATION_REJECTED: &str = "Verification failed. Please check your code and try again.";
const VERIFICATION_FALLBACK: &str = "Verification failed. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationPhase {
    #[default]
    CollectingDetails,
    PendingVerification,
}

/// Result of submitting account details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Account created and its session activated.
    Complete,
    /// A verification code was emailed; the form moves to the code step.
    VerificationSent,
    Failed(String),
}

/// Result of submitting a verification code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Complete,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub email: FieldState,
    pub password: FieldState,
    pub confirmation: FieldState,
    pub code: String,
    pub phase: RegistrationPhase,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegistrationForm {
    pub fn set_first_name(&mut self, value: String) {
        self.first_name.input(value, is_valid_name);
    }

    pub fn set_last_name(&mut self, value: String) {
        self.last_name.input(value, is_valid_name);
    }

    pub fn set_email(&mut self, value: String) {
        self.email.input(value, is_valid_email);
    }

    /// Update the password and re-check the confirmation against it.
    pub fn set_password(&mut self, value: String) {
        self.password.input(value, is_valid_password);
        self.confirmation.valid = passwords_match(&self.password.value, &self.confirmation.value);
    }

    pub fn set_confirmation(&mut self, value: String) {
        let password = self.password.value.clone();
        self.confirmation
            .input(value, |confirmation| passwords_match(&password, confirmation));
    }

    /// Store the code, cut to the longest accepted length.
    pub fn set_code(&mut self, value: &str) {
        self.code = value.chars().take(MAX_CODE_LEN).collect();
    }

    pub fn details_valid(&self) -> bool {
        self.first_name.valid
            && self.last_name.valid
            && self.email.valid
            && self.password.valid
            && self.confirmation.valid
    }

    pub fn can_submit_details(&self, provider_ready: bool) -> bool {
        provider_ready
            && !self.submitting
            && self.phase == RegistrationPhase::CollectingDetails
            && self.details_valid()
    }

    pub fn can_submit_code(&self, provider_ready: bool) -> bool {
        provider_ready
            && !self.submitting
            && self.phase == RegistrationPhase::PendingVerification
            && is_code_ready(&self.code)
    }

    /// Start a details submit, returning what to send or `None` when gated.
    pub fn begin_details_submit(&mut self, provider_ready: bool) -> Option<SignUpDetails> {
        if !self.can_submit_details(provider_ready) {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(SignUpDetails {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email_address: self.email.value.clone(),
            password: self.password.value.clone(),
        })
    }

    /// Start a code submit, returning the code or `None` when gated.
    pub fn begin_code_submit(&mut self, provider_ready: bool) -> Option<String> {
        if !self.can_submit_code(provider_ready) {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.code.clone())
    }

    /// Fold a sign-up outcome into the form; returns a path to navigate to.
    pub fn apply_sign_up(&mut self, outcome: SignUpOutcome) -> Option<&'static str> {
        self.submitting = false;
        match outcome {
            SignUpOutcome::Complete => Some(LANDING_PATH),
            SignUpOutcome::VerificationSent => {
                self.phase = RegistrationPhase::PendingVerification;
                self.code.clear();
                None
            }
            SignUpOutcome::Failed(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Fold a verification outcome into the form; returns a path to navigate to.
    pub fn apply_verification(&mut self, outcome: VerificationOutcome) -> Option<&'static str> {
        self.submitting = false;
        match outcome {
            VerificationOutcome::Complete => Some(LANDING_PATH),
            VerificationOutcome::Failed(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Return to the details step, dropping the code and any error.
    pub fn back(&mut self) {
        self.phase = RegistrationPhase::CollectingDetails;
        self.code.clear();
        self.error = None;
    }
}

/// Create the account and either finish sign-up or request an email code.
pub async fn create_account<P>(provider: &P, details: &SignUpDetails) -> SignUpOutcome
where
    P: IdentityProvider + ?Sized,
{
    let attempt = match provider.create_account(details).await {
        Ok(attempt) => attempt,
        Err(e) => {
            log::warn!("registration: create account failed: {e}");
            return SignUpOutcome::Failed(describe_sign_up_error(&e));
        }
    };
    log::info!("registration: sign-up {} status={}", attempt.id, attempt.status);

    match &attempt.status {
        AttemptStatus::Complete => {
            match activate_session(provider, attempt.created_session_id.as_deref()).await {
                Ok(()) => SignUpOutcome::Complete,
                Err(e) => {
                    log::warn!("registration: session activation failed: {e}");
                    SignUpOutcome::Failed(describe_sign_up_error(&e))
                }
            }
        }
        AttemptStatus::MissingRequirements if attempt.awaits_email_verification() => {
            match provider.prepare_email_verification().await {
                Ok(()) => {
                    log::info!("registration: verification code sent");
                    SignUpOutcome::VerificationSent
                }
                Err(e) => {
                    log::warn!("registration: preparing verification failed: {e}");
                    SignUpOutcome::Failed(describe_sign_up_error(&e))
                }
            }
        }
        AttemptStatus::MissingRequirements => SignUpOutcome::Failed(format!(
            "Missing requirements: {}",
            attempt.missing_fields.join(", ")
        )),
        AttemptStatus::Other(status) => SignUpOutcome::Failed(format!(
            "Sign-up status: {status}. Please complete all required steps."
        )),
    }
}

/// Submit the emailed code and activate the resulting session.
pub async fn verify_email_code<P>(provider: &P, code: &str) -> VerificationOutcome
where
    P: IdentityProvider + ?Sized,
{
    let attempt = match provider.attempt_email_verification(code).await {
        Ok(attempt) => attempt,
        Err(e) => {
            log::warn!("registration: verification failed: {e}");
            return VerificationOutcome::Failed(
                e.message().unwrap_or_else(|| VERIFICATION_FALLBACK.to_owned()),
            );
        }
    };

    if attempt.status != AttemptStatus::Complete {
        log::warn!("registration: verification status={}", attempt.status);
        return VerificationOutcome::Failed(VERIFICATION_REJECTED.to_owned());
    }

    match activate_session(provider, attempt.created_session_id.as_deref()).await {
        Ok(()) => VerificationOutcome::Complete,
        Err(e) => {
            log::warn!("registration: session activation failed: {e}");
            VerificationOutcome::Failed(e.message().unwrap_or_else(|| VERIFICATION_FALLBACK.to_owned()))
        }
    }
}

/// One user-facing message for a failed account creation.
///
/// Each provider issue maps to a known message by code; messages are joined
/// with a single space.
pub fn describe_sign_up_error(err: &ProviderError) -> String {
    match err {
        ProviderError::Rejected(issues) if !issues.is_empty() => issues
            .iter()
            .map(describe_issue)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.message().unwrap_or_else(|| SIGN_UP_FALLBACK.to_owned()),
    }
}

fn describe_issue(issue: &ProviderIssue) -> String {
    let known = match issue.code.as_str() {
        "form_identifier_exists" => "An account with this email already exists.",
        "form_password_pwned" => {
            "This password has been compromised. Please choose a different one."
        }
        "form_password_too_short" => "Password is too short.",
        "form_username_invalid" => "Invalid username format.",
        _ => return issue.best_message().unwrap_or(UNKNOWN_ISSUE).to_owned(),
    };
    known.to_owned()
}
