//! Scroll reveal animator.
//!
//! Matching elements start hidden and transition in the first time they
//! intersect the viewport, after which they are unobserved. When a result
//! card comes into view every result card reveals, staggered by document
//! order. Elements are tagged with `data-reveal` so a second `observe_all`
//! after new content renders does not re-hide revealed elements.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str = ".result-card, .upload-section, .video-section";
pub const RESULT_CARD_SELECTOR: &str = ".result-card";
pub const RESULT_CARD_CLASS: &str = "result-card";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAGGER_MS: u32 = 100;
pub const REVEAL_ATTR: &str = "data-reveal";

/// Inline style properties for the hidden starting state.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style properties for the revealed state.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Delay for the result card at `index` (document order).
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

/// Observe every matching element not yet tagged. Safe to call repeatedly.
pub fn observe_all() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = browser::observe_all() {
            log::warn!("reveal observer unavailable: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::*;

    fn apply(el: &Element, props: &[(&str, &str)]) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (name, value) in props {
                let _ = style.set_property(name, value);
            }
        }
    }

    fn reveal(el: &Element) {
        apply(el, &REVEALED_STYLE);
        let _ = el.set_attribute(REVEAL_ATTR, "done");
    }

    fn reveal_cards_staggered() {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(cards) = doc.query_selector_all(RESULT_CARD_SELECTOR) else {
            return;
        };
        for index in 0..cards.length() {
            let Some(card) = cards.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            Timeout::new(stagger_delay_ms(index as usize), move || reveal(&card)).forget();
        }
    }

    pub(super) fn observe_all() -> Result<(), JsValue> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target);
                observer.unobserve(&target);
                if target.class_list().contains(RESULT_CARD_CLASS) {
                    reveal_cards_staggered();
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        let elements = doc.query_selector_all(REVEAL_SELECTOR)?;
        for index in 0..elements.length() {
            let Some(el) = elements.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if el.has_attribute(REVEAL_ATTR) {
                continue;
            }
            let _ = el.set_attribute(REVEAL_ATTR, "pending");
            apply(&el, &HIDDEN_STYLE);
            observer.observe(&el);
        }
        Ok(())
    }
}
