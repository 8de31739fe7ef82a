//! Landing page.

use leptos::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { value: "95%", label: "Detection Accuracy" },
    Stat { value: "<2s", label: "Analysis Time" },
    Stat { value: "24/7", label: "Continuous Monitoring" },
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🌡️",
        "Thermal Imaging",
        "Non-contact thermal cameras capture the heat signature of the newborn without disturbing sleep or care.",
    ),
    (
        "🧠",
        "AI Classification",
        "A trained model flags hypothermic and hyperthermic patterns from colour and texture features in seconds.",
    ),
    (
        "🩺",
        "Clinical Guidance",
        "Gemma generates a step-by-step nurse plan and a reassuring message for parents in their own language.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <header class="header hero">
                <div class="container">
                    <h1>"AI-Powered Thermal Monitoring for Newborns"</h1>
                    <p class="hero-subtitle">
                        "ThermoVision AI detects neonatal hypothermia and hyperthermia from thermal images, "
                        "giving nurses in low-resource clinics an instant, actionable care plan."
                    </p>
                    <div class="hero-actions">
                        <a href="/demo" class="btn btn-primary">"Request a Demo"</a>
                        <a href="/analyze" class="btn btn-secondary">"Try the Analyzer"</a>
                    </div>
                </div>
            </header>

            <section class="stats-section">
                <div class="container stats-grid">
                    {STATS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-value">{s.value}</span>
                                    <span class="stat-label">{s.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="features-section">
                <div class="container">
                    <h2>"How It Works"</h2>
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .map(|(icon, title, body)| {
                                view! {
                                    <div class="feature-card">
                                        <div class="feature-icon">{*icon}</div>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <h2>"Get Started Today"</h2>
                    <p>"Bring continuous thermal monitoring to your NICU with hardware you can deploy in a day."</p>
                    <a href="/contact" class="btn btn-primary">"Contact Us"</a>
                </div>
            </section>
        </div>
    }
}
