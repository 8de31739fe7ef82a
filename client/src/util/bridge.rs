//! `window.ThermoVisionAI` for inline page scripts.
//!
//! Exposes `showNotification(message, kind?)`, `debounce(fn, wait)` and
//! `throttle(fn, limit)`. The wrappers returned by `debounce` and
//! `throttle` forward their first argument to `fn`.

use crate::util::notify::Notifier;

pub const GLOBAL_NAME: &str = "ThermoVisionAI";

pub fn install(notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = browser::install(notifier) {
            log::warn!("{GLOBAL_NAME} bridge not installed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifier;
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::GLOBAL_NAME;
    use crate::state::notifications::NotificationKind;
    use crate::util::notify::Notifier;
    use crate::util::timing::{Debounce, Throttle};

    pub(super) fn install(notifier: Notifier) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let api = Object::new();

        let show = Closure::wrap(Box::new(move |message: JsValue, kind: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let kind = kind
                .as_string()
                .map_or(NotificationKind::Info, |k| NotificationKind::parse(&k));
            notifier.notify(message, kind);
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        Reflect::set(&api, &JsValue::from_str("showNotification"), show.as_ref())?;
        show.forget();

        let debounce = Closure::wrap(Box::new(debounced) as Box<dyn FnMut(Function, f64) -> JsValue>);
        Reflect::set(&api, &JsValue::from_str("debounce"), debounce.as_ref())?;
        debounce.forget();

        let throttle = Closure::wrap(Box::new(throttled) as Box<dyn FnMut(Function, f64) -> JsValue>);
        Reflect::set(&api, &JsValue::from_str("throttle"), throttle.as_ref())?;
        throttle.forget();

        Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &api)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn debounced(func: Function, wait: f64) -> JsValue {
        let state = Rc::new(RefCell::new(Debounce::new(wait.clamp(0.0, f64::from(u32::MAX)) as u32)));
        let wrapper = Closure::wrap(Box::new(move |arg: JsValue| {
            let ticket = state.borrow_mut().call();
            let wait_ms = state.borrow().wait_ms();
            let state = Rc::clone(&state);
            let func = func.clone();
            Timeout::new(wait_ms, move || {
                if state.borrow().should_fire(ticket) {
                    let _ = func.call1(&JsValue::NULL, &arg);
                }
            })
            .forget();
        }) as Box<dyn FnMut(JsValue)>);
        wrapper.into_js_value()
    }

    fn throttled(func: Function, limit: f64) -> JsValue {
        let mut state = Throttle::new(limit.max(0.0));
        let wrapper = Closure::wrap(Box::new(move |arg: JsValue| {
            if state.admit(js_sys::Date::now()) {
                let _ = func.call1(&JsValue::NULL, &arg);
            }
        }) as Box<dyn FnMut(JsValue)>);
        wrapper.into_js_value()
    }
}
