//! Top navigation bar with mobile menu toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::nav::{DEMO_ITEM, NAV_ITEMS, link_class};

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let menu_class = move || if ui.get().menu_open { "nav-menu nav-menu--open" } else { "nav-menu" };
    let toggle_label = move || if ui.get().menu_open { "✕" } else { "☰" };
    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_menu);

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="/" class="nav-logo" on:click=close>
                    <span class="nav-logo__badge">"TV"</span>
                    <span class="nav-logo__text">"ThermoVision AI"</span>
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {toggle_label}
                </button>
                <ul class=menu_class>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <li>
                                    <a
                                        href=path
                                        class=move || link_class(&location.pathname.get(), path)
                                        on:click=close
                                    >
                                        {item.name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a href=DEMO_ITEM.path class="btn btn-primary nav-cta" on:click=close>
                            {DEMO_ITEM.name}
                        </a>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
