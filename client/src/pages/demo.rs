//! Demo request page.

use leptos::prelude::*;

use crate::components::form_field::{SelectField, TextAreaField, TextField};
use crate::state::form::{DEMO_FORM, FormState};
use crate::util::notify::use_notifier;

const NICU_SIZES: &[(&str, &str)] = &[
    ("small", "1-10 beds"),
    ("medium", "11-30 beds"),
    ("large", "31-60 beds"),
    ("xlarge", "60+ beds"),
];

const TIMELINES: &[(&str, &str)] = &[
    ("immediate", "Immediately"),
    ("3months", "Within 3 months"),
    ("6months", "Within 6 months"),
    ("exploring", "Just exploring"),
];

const CURRENT_SOLUTIONS: &[(&str, &str)] = &[
    ("manual", "Manual thermometers"),
    ("skin_probes", "Skin probes"),
    ("incubator", "Incubator sensors"),
    ("none", "No current solution"),
];

const PREFERRED_TIMES: &[(&str, &str)] = &[
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
];

#[component]
pub fn DemoPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let notifier = use_notifier();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(&DEMO_FORM)) {
            Some(Ok(message)) => notifier.success(message),
            Some(Err(e)) => notifier.error(e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="page demo-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Request a Demo"</h1>
                    <p>"See ThermoVision AI on your own ward. We'll tailor the session to your NICU."</p>
                </div>
            </header>
            <section class="container">
                <form class="demo-form" novalidate=true on:submit=on_submit>
                    <div class="form-row">
                        <TextField form=form name="name" label="Full Name" required=true />
                        <TextField form=form name="email" label="Email" kind="email" required=true />
                    </div>
                    <div class="form-row">
                        <TextField form=form name="title" label="Job Title" required=true />
                        <TextField form=form name="phone" label="Phone" kind="tel" />
                    </div>
                    <TextField form=form name="organization" label="Organization" required=true />
                    <div class="form-row">
                        <SelectField form=form name="nicu_size" label="NICU Size" options=NICU_SIZES />
                        <SelectField form=form name="timeline" label="Implementation Timeline" options=TIMELINES />
                    </div>
                    <div class="form-row">
                        <SelectField
                            form=form
                            name="current_solution"
                            label="Current Monitoring Solution"
                            options=CURRENT_SOLUTIONS
                        />
                        <SelectField
                            form=form
                            name="preferred_time"
                            label="Preferred Demo Time"
                            options=PREFERRED_TIMES
                        />
                    </div>
                    <TextAreaField form=form name="specific_interests" label="Specific Interests" />
                    <TextAreaField form=form name="additional_notes" label="Additional Notes" />
                    <label class="form-checkbox">
                        <input
                            type="checkbox"
                            name="terms"
                            prop:checked=move || form.with(|f| f.terms_accepted)
                            on:change=move |ev| form.update(|f| f.terms_accepted = event_target_checked(&ev))
                        />
                        " I agree to the terms and conditions and privacy policy."
                    </label>
                    <button type="submit" class="btn btn-primary">"Request Demo"</button>
                </form>
            </section>
        </div>
    }
}
