//! Site footer.

use leptos::prelude::*;

use crate::util::nav::FOOTER_GROUPS;

pub const CONTACT_EMAIL: &str = "info@thermovision-ai.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <div class="nav-logo">
                        <span class="nav-logo__badge">"TV"</span>
                        <span class="nav-logo__text">"ThermoVision AI"</span>
                    </div>
                    <p>"Intelligent thermal monitoring for neonatal care, saving lives through accessible technology."</p>
                </div>
                {FOOTER_GROUPS
                    .iter()
                    .map(|(title, items)| {
                        view! {
                            <div class="footer-column">
                                <h4>{*title}</h4>
                                <ul>
                                    {items
                                        .iter()
                                        .map(|item| view! { <li><a href=item.path>{item.name}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <ul>
                        <li><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></li>
                        <li>{CONTACT_PHONE}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2024 ThermoVision AI. All rights reserved."</p>
            </div>
        </footer>
    }
}
