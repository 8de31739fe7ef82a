//! Contact form page.

use leptos::prelude::*;

use crate::components::footer::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::components::form_field::{TextAreaField, TextField};
use crate::state::form::{CONTACT_FORM, FormState};
use crate::util::notify::use_notifier;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let notifier = use_notifier();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(&CONTACT_FORM)) {
            Some(Ok(message)) => notifier.success(message),
            Some(Err(e)) => notifier.error(e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="page contact-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Contact Us"</h1>
                    <p>"Questions about ThermoVision AI? We'd love to hear from you."</p>
                </div>
            </header>
            <section class="container contact-layout">
                <form class="contact-form" novalidate=true on:submit=on_submit>
                    <TextField form=form name="name" label="Full Name" required=true />
                    <TextField form=form name="email" label="Email" kind="email" required=true />
                    <TextField form=form name="organization" label="Organization" />
                    <TextAreaField form=form name="message" label="Message" required=true />
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                </form>
                <aside class="contact-info">
                    <h3>"Get in Touch"</h3>
                    <p><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></p>
                    <p>{CONTACT_PHONE}</p>
                </aside>
            </section>
        </div>
    }
}
