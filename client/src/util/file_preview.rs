//! Read a browser `File` into a data URL for the upload thumbnail.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FileReader, ProgressEvent};

/// Start reading `file`; `on_done` receives the data URL, or `None` if the
/// read failed. `on_done` runs at most once.
pub fn read_data_url(file: &File, on_done: impl FnOnce(Option<String>) + 'static) {
    let done = Rc::new(RefCell::new(Some(on_done)));
    let finish = {
        let done = Rc::clone(&done);
        move |url: Option<String>| {
            if let Some(cb) = done.borrow_mut().take() {
                cb(url);
            }
        }
    };

    let Ok(reader) = FileReader::new() else {
        finish(None);
        return;
    };

    let onload = {
        let reader = reader.clone();
        let finish = finish.clone();
        Closure::once(move |_: ProgressEvent| {
            finish(reader.result().ok().and_then(|v| v.as_string()));
        })
    };
    let onerror = {
        let finish = finish.clone();
        Closure::once(move |_: ProgressEvent| finish(None))
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    if reader.read_as_data_url(file).is_err() {
        finish(None);
        return;
    }
    onload.forget();
    onerror.forget();
}
