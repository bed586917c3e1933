use futures::executor::block_on;

use super::*;
use crate::net::fake_identity::{FakeIdentity, rejection, sign_in as attempt};
use crate::net::identity::ProviderError;

fn credentials() -> Credentials {
    Credentials {
        identifier: "anna@example.com".to_owned(),
        password: "Secret12!".to_owned(),
    }
}

fn filled_form() -> LoginForm {
    let mut form = LoginForm::default();
    form.set_email("anna@example.com".to_owned());
    form.set_password("Secret12!".to_owned());
    form
}

// =============================================================
// Form gating
// =============================================================

#[test]
fn empty_form_cannot_submit() {
    assert!(!LoginForm::default().can_submit(true));
}

#[test]
fn invalid_email_blocks_submit() {
    let mut form = filled_form();
    form.set_email("anna@example".to_owned());
    assert!(!form.can_submit(true));
}

#[test]
fn provider_not_ready_blocks_submit() {
    assert!(!filled_form().can_submit(false));
}

#[test]
fn begin_submit_uses_email_as_identifier() {
    let mut form = filled_form();
    form.error = Some("old".to_owned());
    assert_eq!(form.begin_submit(true), Some(credentials()));
    assert!(form.submitting);
    assert_eq!(form.error, None);
    assert_eq!(form.begin_submit(true), None);
}

#[test]
fn failure_keeps_user_on_page_with_error() {
    let mut form = filled_form();
    form.begin_submit(true);
    assert_eq!(form.apply(SignInOutcome::Failed("denied".to_owned())), None);
    assert_eq!(form.error.as_deref(), Some("denied"));
    assert!(!form.submitting);
}

#[test]
fn completion_navigates_to_landing() {
    let mut form = filled_form();
    form.begin_submit(true);
    assert_eq!(form.apply(SignInOutcome::Complete), Some("/"));
}

// =============================================================
// sign_in driver
// =============================================================

#[test]
fn complete_sign_in_activates_session() {
    let provider = FakeIdentity::default();
    assert_eq!(block_on(sign_in(&provider, &credentials())), SignInOutcome::Complete);
    assert_eq!(
        provider.calls(),
        vec!["sign_in:anna@example.com".to_owned(), "finalize_session:sess_1".to_owned()]
    );
}

#[test]
fn non_complete_status_is_reported_without_activation() {
    let provider = FakeIdentity {
        sign_in_result: Ok(attempt(AttemptStatus::Other("needs_second_factor".to_owned()), None)),
        ..FakeIdentity::default()
    };
    let outcome = block_on(sign_in(&provider, &credentials()));
    assert_eq!(
        outcome,
        SignInOutcome::Failed(
            "Sign-In status: needs_second_factor. Please complete all required steps.".to_owned()
        )
    );
    assert_eq!(provider.calls().len(), 1);
}

#[test]
fn rejection_shows_provider_message() {
    let provider = FakeIdentity {
        sign_in_result: Err(rejection(&[("form_password_incorrect", "Password is incorrect.")])),
        ..FakeIdentity::default()
    };
    assert_eq!(
        block_on(sign_in(&provider, &credentials())),
        SignInOutcome::Failed("Password is incorrect.".to_owned())
    );
}

#[test]
fn silent_rejection_uses_fallback() {
    let provider = FakeIdentity {
        sign_in_result: Err(ProviderError::Rejected(vec![])),
        ..FakeIdentity::default()
    };
    assert_eq!(
        block_on(sign_in(&provider, &credentials())),
        SignInOutcome::Failed("Sign-in failed. Please try again.".to_owned())
    );
}
