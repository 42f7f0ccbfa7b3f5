//! Labeled form input with its field-level validation message.

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// Stable DOM id for the input bound to `name` on `form`.
pub fn field_id(form: &str, name: &str) -> String {
    format!("{form}-{name}")
}

/// Text input bound to `value`. Shows the message for `name` from `errors`
/// and clears it as soon as the user edits the field.
#[component]
pub fn TextField(
    form: &'static str,
    name: &'static str,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
) -> impl IntoView {
    let id = field_id(form, name);
    let error = move || errors.with(|e| e.get(name).map(str::to_owned));

    view! {
        <div class="auth-field">
            <label class="auth-field__label" for=id.clone()>{label}</label>
            <input
                id=id
                class="auth-input"
                class:auth-input--invalid=move || error().is_some()
                type=input_type
                name=name
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear(name));
                }
            />
            <Show when=move || error().is_some()>
                <p class="auth-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
