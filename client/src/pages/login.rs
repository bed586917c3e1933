//! Login page with email + password sign-in.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::form_field::{TextField, field_signal, focus_callbacks};
use crate::components::signed_in_panel::SignedInPanel;
use crate::net::hosted::HostedIdentity;
use crate::net::identity::IdentityProvider;
use crate::state::auth::AuthState;
use crate::state::login::{LoginForm, sign_in};
use crate::util::auth::{finish_sign_in, install_redirect};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect);

    view! {
        <section class="page page--auth">
            <Show
                when=move || !auth.get().signed_in()
                fallback=|| view! { <SignedInPanel prompt="Want to sign out and sign in again?"/> }
            >
                <SignInForm redirect=redirect/>
            </Show>
        </section>
    }
}

#[component]
fn SignInForm(redirect: RwSignal<Option<&'static str>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = expect_context::<HostedIdentity>();
    let ready = provider.is_ready();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin_submit(ready)).flatten() else {
            return;
        };
        let provider = provider.clone();
        leptos::task::spawn_local(async move {
            let outcome = sign_in(&provider, &credentials).await;
            if let Some(path) = form.try_update(|f| f.apply(outcome)).flatten() {
                finish_sign_in(&provider, auth, redirect, path).await;
            }
        });
    };

    let (email_focus, email_blur) = focus_callbacks(form, |f: &mut LoginForm| &mut f.email);
    let (password_focus, password_blur) = focus_callbacks(form, |f: &mut LoginForm| &mut f.password);

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1>"Log in"</h1>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="form-error" role="alert">
                    {move || form.with(|f| f.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <TextField
                id="login-email"
                label="Email"
                input_type="email"
                autocomplete="email"
                hint="Enter a valid email address."
                field=field_signal(form, |f: &LoginForm| &f.email)
                on_input=Callback::new(move |v| form.update(|f| f.set_email(v)))
                on_focus=email_focus
                on_blur=email_blur
            />
            <TextField
                id="login-password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                hint="8 to 23 characters. Must include uppercase and lowercase letters, a number, and one of ! @ # $ %."
                field=field_signal(form, |f: &LoginForm| &f.password)
                on_input=Callback::new(move |v| form.update(|f| f.set_password(v)))
                on_focus=password_focus
                on_blur=password_blur
            />
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !form.with(|f| f.can_submit(ready))
            >
                {move || if form.with(|f| f.submitting) { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="auth-form__switch">
                "Need an account? " <a href="/register">"Sign up"</a>
            </p>
        </form>
    }
}
