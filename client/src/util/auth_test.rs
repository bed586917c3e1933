use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::fake_identity::FakeIdentity;
use crate::net::identity::{ProviderError, SessionSummary};

fn summary() -> SessionSummary {
    SessionSummary { session_id: "sess_1".to_owned(), user_id: None }
}

// =============================================================
// guard_view
// =============================================================

#[test]
fn guard_shows_loading_while_session_is_unknown() {
    assert_eq!(guard_view(&AuthState::default()), GuardView::Loading);
}

#[test]
fn guard_shows_fallback_when_signed_out() {
    assert_eq!(guard_view(&AuthState::resolved(None)), GuardView::SignedOut);
}

#[test]
fn guard_shows_children_when_signed_in() {
    assert_eq!(guard_view(&AuthState::resolved(Some(summary()))), GuardView::Protected);
}

// =============================================================
// refresh_session / sign_out
// =============================================================

#[test]
fn refresh_session_stores_active_session() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let provider = FakeIdentity {
            session_result: Ok(Some(summary())),
            ..FakeIdentity::default()
        };
        block_on(refresh_session(&provider, auth));
        assert_eq!(auth.get_untracked(), AuthState::resolved(Some(summary())));
    });
}

#[test]
fn refresh_session_failure_settles_signed_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let provider = FakeIdentity {
            session_result: Err(ProviderError::Unavailable),
            ..FakeIdentity::default()
        };
        block_on(refresh_session(&provider, auth));
        assert_eq!(guard_view(&auth.get_untracked()), GuardView::SignedOut);
    });
}

// =============================================================
// finish_sign_in
// =============================================================

#[test]
fn finish_sign_in_sets_redirect_before_session_query() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::resolved(None));
        let redirect = RwSignal::new(None::<&'static str>);
        let seen = Rc::new(Cell::new(None::<&'static str>));
        let seen_in_hook = Rc::clone(&seen);
        let provider = FakeIdentity {
            session_result: Ok(Some(summary())),
            on_session_query: Some(Box::new(move || {
                assert!(!auth.get_untracked().signed_in());
                seen_in_hook.set(redirect.get_untracked());
            })),
            ..FakeIdentity::default()
        };

        block_on(finish_sign_in(&provider, auth, redirect, "/"));

        assert_eq!(seen.get(), Some("/"));
        assert_eq!(redirect.get_untracked(), Some("/"));
        assert!(auth.get_untracked().signed_in());
    });
}

#[test]
fn finish_sign_in_redirects_even_when_session_query_fails() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::resolved(None));
        let redirect = RwSignal::new(None::<&'static str>);
        let provider = FakeIdentity {
            session_result: Err(ProviderError::Transport("offline".to_owned())),
            ..FakeIdentity::default()
        };

        block_on(finish_sign_in(&provider, auth, redirect, "/"));

        assert_eq!(redirect.get_untracked(), Some("/"));
        assert_eq!(provider.calls(), vec!["current_session".to_owned()]);
    });
}

#[test]
fn sign_out_clears_session() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::resolved(Some(summary())));
        let provider = FakeIdentity::default();
        block_on(sign_out(&provider, auth));
        assert!(!auth.get_untracked().signed_in());
        assert_eq!(provider.calls(), vec!["sign_out".to_owned()]);
    });
}

#[test]
fn failed_sign_out_keeps_session() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::resolved(Some(summary())));
        let provider = FakeIdentity {
            sign_out_result: Err(ProviderError::Transport("offline".to_owned())),
            ..FakeIdentity::default()
        };
        block_on(sign_out(&provider, auth));
        assert!(auth.get_untracked().signed_in());
    });
}
