//! Scripted in-memory identity provider for flow tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::identity::{
    AttemptStatus, Credentials, IdentityProvider, ProviderError, ProviderIssue, SessionSummary,
    SignInAttempt, SignUpAttempt, SignUpDetails,
};

/// Each operation returns a clone of its scripted result and records its name.
pub(crate) struct FakeIdentity {
    pub ready: bool,
    pub create_result: Result<SignUpAttempt, ProviderError>,
    pub prepare_result: Result<(), ProviderError>,
    pub verify_result: Result<SignUpAttempt, ProviderError>,
    pub sign_in_result: Result<SignInAttempt, ProviderError>,
    pub finalize_result: Result<(), ProviderError>,
    pub session_result: Result<Option<SessionSummary>, ProviderError>,
    pub sign_out_result: Result<(), ProviderError>,
    /// Runs at the start of every `current_session` call.
    pub on_session_query: Option<Box<dyn Fn()>>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeIdentity {
    fn default() -> Self {
        Self {
            ready: true,
            create_result: Ok(sign_up(AttemptStatus::Complete, &[], &[], Some("sess_1"))),
            prepare_result: Ok(()),
            verify_result: Ok(sign_up(AttemptStatus::Complete, &[], &[], Some("sess_1"))),
            sign_in_result: Ok(sign_in(AttemptStatus::Complete, Some("sess_1"))),
            finalize_result: Ok(()),
            session_result: Ok(None),
            sign_out_result: Ok(()),
            on_session_query: None,
            calls: RefCell::default(),
        }
    }
}

impl FakeIdentity {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

pub(crate) fn sign_up(
    status: AttemptStatus,
    missing: &[&str],
    unverified: &[&str],
    session: Option<&str>,
) -> SignUpAttempt {
    SignUpAttempt {
        id: "sua_1".to_owned(),
        status,
        missing_fields: missing.iter().map(|f| (*f).to_owned()).collect(),
        unverified_fields: unverified.iter().map(|f| (*f).to_owned()).collect(),
        created_session_id: session.map(str::to_owned),
    }
}

pub(crate) fn sign_in(status: AttemptStatus, session: Option<&str>) -> SignInAttempt {
    SignInAttempt {
        id: "sia_1".to_owned(),
        status,
        created_session_id: session.map(str::to_owned),
    }
}

pub(crate) fn rejection(issues: &[(&str, &str)]) -> ProviderError {
    ProviderError::Rejected(
        issues
            .iter()
            .map(|(code, message)| ProviderIssue {
                code: (*code).to_owned(),
                message: (*message).to_owned(),
                long_message: None,
            })
            .collect(),
    )
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn create_account(&self, details: &SignUpDetails) -> Result<SignUpAttempt, ProviderError> {
        self.record(format!("create_account:{}", details.email_address));
        self.create_result.clone()
    }

    async fn prepare_email_verification(&self) -> Result<(), ProviderError> {
        self.record("prepare_email_verification".to_owned());
        self.prepare_result.clone()
    }

    async fn attempt_email_verification(&self, code: &str) -> Result<SignUpAttempt, ProviderError> {
        self.record(format!("attempt_email_verification:{code}"));
        self.verify_result.clone()
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInAttempt, ProviderError> {
        self.record(format!("sign_in:{}", credentials.identifier));
        self.sign_in_result.clone()
    }

    async fn finalize_session(&self, session_id: &str) -> Result<(), ProviderError> {
        self.record(format!("finalize_session:{session_id}"));
        self.finalize_result.clone()
    }

    async fn current_session(&self) -> Result<Option<SessionSummary>, ProviderError> {
        self.record("current_session".to_owned());
        if let Some(hook) = &self.on_session_query {
            hook();
        }
        self.session_result.clone()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.record("sign_out".to_owned());
        self.sign_out_result.clone()
    }
}
