//! Schema-driven labelled input with its validation message.

use leptos::prelude::*;

use crate::util::form::{FieldErrors, FieldSpec, FormValues};

/// One input bound to `values[spec.name]`. Editing a field clears its error.
#[component]
pub fn FormField(
    spec: FieldSpec,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let name = spec.name;
    let error = move || errors.get().get(name).map(str::to_owned);

    view! {
        <label class="form-field" class:form-field--invalid=move || error().is_some()>
            <span class="form-field__label">{spec.label} "*"</span>
            <input
                class="form-field__input"
                name=name
                type=spec.kind.input_type()
                prop:value=move || values.get().get(name).to_owned()
                disabled=move || disabled.is_some_and(|d| d.get())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    values.update(|v| v.set(name, raw));
                    errors.update(|e| e.remove(name));
                }
            />
            <Show when=move || error().is_some()>
                <span class="form-field__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
