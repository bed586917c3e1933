//! Notice shown on the register and login pages when a session already exists.

use leptos::prelude::*;

use crate::net::hosted::HostedIdentity;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn SignedInPanel(prompt: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = expect_context::<HostedIdentity>();
    let busy = RwSignal::new(false);

    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let provider = provider.clone();
        leptos::task::spawn_local(async move {
            sign_out(&provider, auth).await;
            busy.set(false);
        });
    };

    view! {
        <div class="panel panel--notice">
            <p>"You're already signed in. " {prompt}</p>
            <button class="btn" on:click=on_sign_out disabled=move || busy.get()>
                "Sign out"
            </button>
        </div>
    }
}
