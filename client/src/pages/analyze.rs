//! Analysis dashboard: upload a thermal image for classification.

use leptos::prelude::*;

use crate::components::upload_widget::UploadWidget;
use crate::util::reveal;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    Effect::new(move |_| reveal::observe_all());

    view! {
        <div class="page analyze-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Thermal Image Analysis"</h1>
                    <p>"Upload a thermal image of a newborn to receive an instant assessment and care plan."</p>
                </div>
            </header>
            <section class="container upload-section">
                <h2>"Upload Thermal Image"</h2>
                <UploadWidget />
                <p class="upload-hint">"Supported formats: JPG, PNG, BMP. Maximum size 10MB."</p>
            </section>
        </div>
    }
}
