//! Team and mission.

use leptos::prelude::*;

const TEAM: [(&str, &str); 2] = [
    ("Saksham Mishra", "Project Lead"),
    ("Ankan Ganguli", "Mentor & Prompt Engineer"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"About ThermoVision AI"</h1>
                    <p>"Making neonatal thermal care accessible wherever babies are born."</p>
                </div>
            </header>
            <section class="container about-values">
                <div class="feature-card">
                    <h3>"Universal Access"</h3>
                    <p>"Low-cost hardware and offline-capable software for clinics without specialist staff."</p>
                </div>
                <div class="feature-card">
                    <h3>"Clinical Excellence"</h3>
                    <p>"Guidance grounded in established neonatal thermal care protocols."</p>
                </div>
            </section>
            <section class="container about-team">
                <h2>"Technical Team"</h2>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .map(|(name, role)| {
                            view! {
                                <div class="team-card">
                                    <h3>{*name}</h3>
                                    <p>{*role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h2>"Medical Team"</h2>
                <p>"Neonatologists and NICU nurses review every care protocol before it reaches the ward."</p>
            </section>
        </div>
    }
}
