//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, header, and register/login pages all read the same
//! `AuthState` signal. These helpers decide what a guarded view renders and
//! keep the signal in sync with the provider's session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::identity::IdentityProvider;
use crate::state::auth::AuthState;

/// What a guarded route renders for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    SignedOut,
    Protected,
}

pub fn guard_view(state: &AuthState) -> GuardView {
    if state.loading {
        GuardView::Loading
    } else if state.session.is_some() {
        GuardView::Protected
    } else {
        GuardView::SignedOut
    }
}

/// Navigate whenever `redirect` receives a target.
///
/// Install from the page component, outside any view that is swapped on
/// `auth`, so the effect outlives the form that sets the target.
pub fn install_redirect(redirect: RwSignal<Option<&'static str>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Query the provider and store the resulting session summary.
///
/// A failed query settles as signed out so guarded views never stay loading.
pub async fn refresh_session<P>(provider: &P, auth: RwSignal<AuthState>)
where
    P: IdentityProvider + ?Sized,
{
    let session = match provider.current_session().await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("auth: session query failed: {e}");
            None
        }
    };
    auth.set(AuthState::resolved(session));
}

/// Settle a completed sign-up, verification, or sign-in.
///
/// `redirect` must hold `target` before `auth` reports a session: the register
/// and login pages swap their forms out as soon as the user is signed in.
pub async fn finish_sign_in<P>(
    provider: &P,
    auth: RwSignal<AuthState>,
    redirect: RwSignal<Option<&'static str>>,
    target: &'static str,
) where
    P: IdentityProvider + ?Sized,
{
    redirect.set(Some(target));
    refresh_session(provider, auth).await;
}

/// End the provider session and mark the state signed out.
pub async fn sign_out<P>(provider: &P, auth: RwSignal<AuthState>)
where
    P: IdentityProvider + ?Sized,
{
    if let Err(e) = provider.sign_out().await {
        log::warn!("auth: sign-out failed: {e}");
        return;
    }
    log::info!("auth: signed out");
    auth.set(AuthState::resolved(None));
}
