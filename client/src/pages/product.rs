//! Product components, hardware requirements and deployment options.

use leptos::prelude::*;

const COMPONENTS: [(&str, &str); 3] = [
    ("FLIR Thermal Camera", "Clip-on thermal sensor that captures a full-body scan in one shot."),
    ("Mobile Application", "Capture, analyze and review results from any Android or iOS device."),
    ("Nurse Dashboard", "Ward-level view of every scan, diagnosis and care plan."),
];

const REQUIREMENTS: [(&str, &str); 4] = [
    ("Resolution", "320 × 240 pixels"),
    ("Temperature Range", "-10°C to +400°C"),
    ("Connectivity", "USB-C"),
    ("Wireless", "Bluetooth"),
];

const PLANS: [(&str, &str); 3] = [
    ("Pilot Program", "One ward, one camera, full onboarding support."),
    ("Department Rollout", "Every NICU bed covered with shared dashboards."),
    ("Hospital-wide", "Integrated monitoring across maternity and paediatrics."),
];

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <div class="page product-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"The ThermoVision Platform"</h1>
                    <p>"Affordable hardware and software for continuous neonatal temperature screening."</p>
                </div>
            </header>
            <section class="container product-components">
                {COMPONENTS
                    .iter()
                    .map(|(title, body)| view! { <div class="feature-card"><h3>{*title}</h3><p>{*body}</p></div> })
                    .collect_view()}
            </section>
            <section class="container product-requirements">
                <h2>"Hardware Requirements"</h2>
                <table class="spec-table">
                    <tbody>
                        {REQUIREMENTS
                            .iter()
                            .map(|(k, v)| view! { <tr><th>{*k}</th><td>{*v}</td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
            <section class="container product-plans">
                <h2>"Deployment Options"</h2>
                <div class="feature-grid">
                    {PLANS
                        .iter()
                        .map(|(title, body)| view! { <div class="plan-card"><h3>{*title}</h3><p>{*body}</p></div> })
                        .collect_view()}
                </div>
                <a href="/demo" class="btn btn-primary">"Request Demo"</a>
            </section>
        </div>
    }
}
