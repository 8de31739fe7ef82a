//! Gemma AI guidance page.

use leptos::prelude::*;

const OUTPUTS: [(&str, &str); 3] = [
    ("Clinical Plan", "Concise, ordered steps the attending nurse can follow at the bedside."),
    ("Parent Message", "A calm explanation for parents, written in Hindi."),
    ("Instructional Video", "A short video demonstrating the relevant warming or cooling technique."),
];

#[component]
pub fn GemmaPage() -> impl IntoView {
    view! {
        <div class="page gemma-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Powered by Gemma LLM"</h1>
                    <p>"Google AI Studio's Gemma turns a diagnosis into guidance people can act on."</p>
                </div>
            </header>
            <section class="container gemma-outputs">
                {OUTPUTS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="container gemma-details">
                <div class="feature-card">
                    <h3>"Smart Clinical Protocols"</h3>
                    <p>"Plans follow WHO thermal care guidance and adapt to the detected condition."</p>
                </div>
                <div class="feature-card">
                    <h3>"Multilingual Communication"</h3>
                    <p>"Families receive explanations in their own language, not clinical jargon."</p>
                </div>
            </section>
        </div>
    }
}
