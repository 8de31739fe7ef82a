//! Inputs bound to a [`FormState`] signal by field name.

use leptos::prelude::*;

use crate::state::form::FormState;

fn label_text(label: &'static str, required: bool) -> String {
    if required { format!("{label} *") } else { label.to_owned() }
}

/// Single-line input.
#[component]
pub fn TextField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label_text(label, required)}</label>
            <input
                type=kind
                id=name
                name=name
                required=required
                prop:value=move || form.with(|f| f.get(name).to_owned())
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            />
        </div>
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label_text(label, required)}</label>
            <textarea
                id=name
                name=name
                rows="5"
                required=required
                prop:value=move || form.with(|f| f.get(name).to_owned())
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

/// Drop-down with a leading empty choice.
#[component]
pub fn SelectField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <select
                id=name
                name=name
                prop:value=move || form.with(|f| f.get(name).to_owned())
                on:change=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
