//! Responsive body class and header parallax.
//!
//! On hydrate, `install` toggles the `mobile` class on `<body>` at load and
//! on every resize, and moves `.header` by a fraction of the scroll offset.
//! Scroll handling is throttled. SSR paths are no-ops.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MOBILE_CLASS: &str = "mobile";
pub const PARALLAX_SELECTOR: &str = ".header";
pub const PARALLAX_FACTOR: f64 = 0.1;
pub const PARALLAX_THROTTLE_MS: f64 = 16.0;

#[must_use]
pub fn is_mobile(width_px: f64) -> bool {
    width_px <= MOBILE_BREAKPOINT_PX
}

/// CSS transform for the header at `scroll_y`.
#[must_use]
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

/// Attach resize and scroll listeners for the lifetime of the page.
pub fn install(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::{JsCast, closure::Closure};

        use super::timing::Throttle;

        let Some(window) = web_sys::window() else {
            return;
        };

        let apply_mobile = move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(MOBILE_BREAKPOINT_PX + 1.0);
            let mobile = is_mobile(width);
            if let Some(body) = window.document().and_then(|d| d.body()) {
                let _ = body
                    .class_list()
                    .toggle_with_force(MOBILE_CLASS, mobile);
            }
            if ui.get_untracked().mobile != mobile {
                ui.update(|u| u.mobile = mobile);
            }
        };
        apply_mobile();

        let on_resize = Closure::wrap(Box::new(apply_mobile) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();

        let throttle = Rc::new(RefCell::new(Throttle::new(PARALLAX_THROTTLE_MS)));
        let on_scroll = Closure::wrap(Box::new(move || {
            if !throttle.borrow_mut().admit(js_sys::Date::now()) {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let header = window
                .document()
                .and_then(|d| d.query_selector(PARALLAX_SELECTOR).ok().flatten())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(header) = header {
                let _ = header
                    .style()
                    .set_property("transform", &parallax_transform(scroll_y));
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
