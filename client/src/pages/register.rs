//! Registration page: account details, then the emailed verification code.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `RegistrationForm` signal. Submit handlers take a snapshot
//! through the form's `begin_*` gate, run the async driver, and fold the
//! outcome back. Navigation happens from a page-level effect watching
//! `redirect`, so it survives the wizard being replaced once signed in.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::form_field::{TextField, field_signal, focus_callbacks};
use crate::components::signed_in_panel::SignedInPanel;
use crate::net::hosted::HostedIdentity;
use crate::net::identity::IdentityProvider;
use crate::state::auth::AuthState;
use crate::state::registration::{
    RegistrationForm, RegistrationPhase, create_account, verify_email_code,
};
use crate::util::auth::{finish_sign_in, install_redirect};
use crate::util::validators::MAX_CODE_LEN;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect);

    view! {
        <section class="page page--auth">
            <Show
                when=move || !auth.get().signed_in()
                fallback=|| view! {
                    <SignedInPanel prompt="Want to sign out and create a new account?"/>
                }
            >
                <RegistrationWizard redirect=redirect/>
            </Show>
        </section>
    }
}

#[component]
fn RegistrationWizard(redirect: RwSignal<Option<&'static str>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = expect_context::<HostedIdentity>();
    let ready = provider.is_ready();
    let form = RwSignal::new(RegistrationForm::default());

    let details_provider = provider.clone();
    let on_submit_details = Callback::new(move |()| {
        let Some(details) = form.try_update(|f| f.begin_details_submit(ready)).flatten() else {
            return;
        };
        let provider = details_provider.clone();
        leptos::task::spawn_local(async move {
            let outcome = create_account(&provider, &details).await;
            if let Some(path) = form.try_update(|f| f.apply_sign_up(outcome)).flatten() {
                finish_sign_in(&provider, auth, redirect, path).await;
            }
        });
    });

    let on_submit_code = Callback::new(move |()| {
        let Some(code) = form.try_update(|f| f.begin_code_submit(ready)).flatten() else {
            return;
        };
        let provider = provider.clone();
        leptos::task::spawn_local(async move {
            let outcome = verify_email_code(&provider, &code).await;
            if let Some(path) = form.try_update(|f| f.apply_verification(outcome)).flatten() {
                finish_sign_in(&provider, auth, redirect, path).await;
            }
        });
    });

    move || match form.with(|f| f.phase) {
        RegistrationPhase::CollectingDetails => {
            view! { <DetailsStep form=form ready=ready on_submit=on_submit_details/> }.into_any()
        }
        RegistrationPhase::PendingVerification => {
            view! { <VerificationStep form=form ready=ready on_submit=on_submit_code/> }.into_any()
        }
    }
}

#[component]
fn DetailsStep(form: RwSignal<RegistrationForm>, ready: bool, on_submit: Callback<()>) -> impl IntoView {
    let (first_focus, first_blur) = focus_callbacks(form, |f: &mut RegistrationForm| &mut f.first_name);
    let (last_focus, last_blur) = focus_callbacks(form, |f: &mut RegistrationForm| &mut f.last_name);
    let (email_focus, email_blur) = focus_callbacks(form, |f: &mut RegistrationForm| &mut f.email);
    let (password_focus, password_blur) = focus_callbacks(form, |f: &mut RegistrationForm| &mut f.password);
    let (confirm_focus, confirm_blur) =
        focus_callbacks(form, |f: &mut RegistrationForm| &mut f.confirmation);

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="auth-form" on:submit=on_form_submit>
            <h1>"Create your account"</h1>
            <ErrorNotice form=form/>
            <TextField
                id="first-name"
                label="First name"
                autocomplete="given-name"
                hint="4 to 24 characters. Must begin with a letter. Letters, numbers, and underscores allowed."
                field=field_signal(form, |f: &RegistrationForm| &f.first_name)
                on_input=Callback::new(move |v| form.update(|f| f.set_first_name(v)))
                on_focus=first_focus
                on_blur=first_blur
            />
            <TextField
                id="last-name"
                label="Last name"
                autocomplete="family-name"
                hint="4 to 24 characters. Must begin with a letter. Letters, numbers, and underscores allowed."
                field=field_signal(form, |f: &RegistrationForm| &f.last_name)
                on_input=Callback::new(move |v| form.update(|f| f.set_last_name(v)))
                on_focus=last_focus
                on_blur=last_blur
            />
            <TextField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                hint="Enter a valid email address."
                field=field_signal(form, |f: &RegistrationForm| &f.email)
                on_input=Callback::new(move |v| form.update(|f| f.set_email(v)))
                on_focus=email_focus
                on_blur=email_blur
            />
            <TextField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                hint="8 to 23 characters. Must include uppercase and lowercase letters, a number, and one of ! @ # $ %."
                field=field_signal(form, |f: &RegistrationForm| &f.password)
                on_input=Callback::new(move |v| form.update(|f| f.set_password(v)))
                on_focus=password_focus
                on_blur=password_blur
            />
            <TextField
                id="confirm-password"
                label="Confirm password"
                input_type="password"
                autocomplete="new-password"
                hint="Must match the password above."
                field=field_signal(form, |f: &RegistrationForm| &f.confirmation)
                on_input=Callback::new(move |v| form.update(|f| f.set_confirmation(v)))
                on_focus=confirm_focus
                on_blur=confirm_blur
            />
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !form.with(|f| f.can_submit_details(ready))
            >
                {move || if form.with(|f| f.submitting) { "Creating account..." } else { "Sign up" }}
            </button>
            <p class="auth-form__switch">
                "Already registered? " <a href="/login">"Log in"</a>
            </p>
        </form>
    }
}

#[component]
fn VerificationStep(
    form: RwSignal<RegistrationForm>,
    ready: bool,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="auth-form" on:submit=on_form_submit>
            <h1>"Verify your email"</h1>
            <p>
                "We sent a code to "
                <strong>{move || form.with(|f| f.email.value.clone())}</strong>
                ". Enter it below to finish signing up."
            </p>
            <ErrorNotice form=form/>
            <div class="form-field">
                <label for="verification-code" class="form-field__label">"Verification code"</label>
                <input
                    id="verification-code"
                    class="form-field__input"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength=MAX_CODE_LEN.to_string()
                    prop:value=move || form.with(|f| f.code.clone())
                    on:input=move |ev| form.update(|f| f.set_code(&event_target_value(&ev)))
                />
            </div>
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !form.with(|f| f.can_submit_code(ready))
            >
                {move || if form.with(|f| f.submitting) { "Verifying..." } else { "Verify email" }}
            </button>
            <button
                class="btn"
                type="button"
                disabled=move || form.with(|f| f.submitting)
                on:click=move |_| form.update(RegistrationForm::back)
            >
                "Back"
            </button>
        </form>
    }
}

#[component]
fn ErrorNotice(form: RwSignal<RegistrationForm>) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.error.is_some())>
            <p class="form-error" role="alert">
                {move || form.with(|f| f.error.clone().unwrap_or_default())}
            </p>
        </Show>
    }
}
