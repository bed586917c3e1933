use futures::executor::block_on;

use super::*;
use crate::net::fake_identity::FakeIdentity;

fn summary() -> SessionSummary {
    SessionSummary { session_id: "sess_1".to_owned(), user_id: Some("user_1".to_owned()) }
}

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
    assert!(!state.signed_in());
}

#[test]
fn resolved_with_session_is_signed_in() {
    assert!(AuthState::resolved(Some(summary())).signed_in());
    assert!(!AuthState::resolved(None).signed_in());
}

#[test]
fn loading_state_is_never_signed_in() {
    let state = AuthState { session: Some(summary()), loading: true };
    assert!(!state.signed_in());
}

#[test]
fn activate_session_finalizes_named_session() {
    let provider = FakeIdentity::default();
    assert_eq!(block_on(activate_session(&provider, Some("sess_9"))), Ok(()));
    assert_eq!(provider.calls(), vec!["finalize_session:sess_9".to_owned()]);
}

#[test]
fn activate_session_without_id_is_malformed() {
    let provider = FakeIdentity::default();
    let result = block_on(activate_session(&provider, None));
    assert!(matches!(result, Err(ProviderError::Malformed(_))));
    assert!(provider.calls().is_empty());
}
