//! Route guard rendering protected children only for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps route content that requires a provider session. While the session
//! query is in flight it shows a neutral placeholder; once settled without a
//! session it shows links to register or log in and never renders children.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardView, guard_view};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match guard_view(&auth.get()) {
        GuardView::Loading => view! { <LoadingPanel/> }.into_any(),
        GuardView::SignedOut => view! { <SignedOutNotice/> }.into_any(),
        GuardView::Protected => children().into_any(),
    }
}

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="panel panel--loading">
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
fn SignedOutNotice() -> impl IntoView {
    view! {
        <div class="panel panel--notice">
            <p>
                "Oops, it looks like you're not signed in or not registered yet! "
                "Please register first: "
                <a href="/register">"Register"</a>
            </p>
            <p>
                "Already have an account? Please log in: "
                <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
