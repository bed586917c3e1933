//! Labeled text input with inline validity hints.

use leptos::prelude::*;

use crate::state::form::FieldState;

/// Read one field of a form signal as its own signal.
pub fn field_signal<F>(form: RwSignal<F>, select: fn(&F) -> &FieldState) -> Signal<FieldState>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| select(f).clone()))
}

/// Focus and blur callbacks that flip one field's active flag.
pub fn focus_callbacks<F>(
    form: RwSignal<F>,
    select: fn(&mut F) -> &mut FieldState,
) -> (Callback<()>, Callback<()>)
where
    F: Send + Sync + 'static,
{
    let on_focus = Callback::new(move |()| form.update(|f| select(f).focus()));
    let on_blur = Callback::new(move |()| form.update(|f| select(f).blur()));
    (on_focus, on_blur)
}

/// Text input bound to a `FieldState`.
///
/// Shows a check mark while the focused value is valid and the `hint` text
/// whenever a non-empty value fails validation.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
    hint: &'static str,
    #[prop(into)] field: Signal<FieldState>,
    on_input: Callback<String>,
    on_focus: Callback<()>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let hint_id = format!("{id}-hint");
    let described_by = hint_id.clone();

    view! {
        <div class="form-field">
            <label for=id class="form-field__label">
                {label}
                <Show when=move || field.get().shows_valid_hint()>
                    <span class="form-field__valid" aria-hidden="true">" ✓"</span>
                </Show>
                <Show when=move || field.get().shows_invalid_hint()>
                    <span class="form-field__invalid" aria-hidden="true">" ✗"</span>
                </Show>
            </label>
            <input
                id=id
                class="form-field__input"
                type=input_type
                autocomplete=autocomplete
                required=true
                aria-invalid=move || (!field.get().valid).to_string()
                aria-describedby=described_by
                prop:value=move || field.get().value
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| on_blur.run(())
            />
            <p
                id=hint_id
                class=move || {
                    if field.get().shows_invalid_hint() {
                        "form-field__hint"
                    } else {
                        "form-field__hint form-field__hint--hidden"
                    }
                }
            >
                {hint}
            </p>
        </div>
    }
}
