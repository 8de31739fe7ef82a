//! Drag-and-drop upload form for the analysis dashboard.
//!
//! Rendering is driven entirely by [`UploadState`]; the handlers below only
//! translate browser events into state transitions. The form posts natively
//! to `/analyze` so the server can answer with a redirect to the report.

use leptos::prelude::*;

use crate::state::upload::{UploadIcon, UploadState};
use crate::util::notify::use_notifier;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let notifier = use_notifier();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let accepted = StoredValue::new_local(None::<web_sys::File>);

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = input_ref.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
            if let Some(file) = file {
                browser::accept(file, upload, accepted, input_ref, notifier);
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.set_drag_over(true));
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.set_drag_over(false));
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.set_drag_over(false));
        #[cfg(feature = "hydrate")]
        {
            let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
            if let Some(file) = file {
                browser::accept(file, upload, accepted, input_ref, notifier);
            }
        }
    };
    let on_area_click = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = upload.try_update(UploadState::begin_submit) else {
            return;
        };
        match result {
            Ok(()) => {
                notifier.info(crate::state::upload::PROCESSING_MESSAGE);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::state::upload::SUBMIT_DELAY_MS;
                    gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;
                    if let Some(form) = form_ref.get_untracked() {
                        if let Err(e) = form.submit() {
                            log::error!("upload form submit failed: {e:?}");
                        }
                    }
                });
            }
            Err(crate::state::upload::UploadError::AlreadySubmitting) => {}
            Err(e) => notifier.error(e.to_string()),
        }
    };

    let view_model = Memo::new(move |_| upload.get().view());

    view! {
        <form
            class="upload-form"
            action="/analyze"
            method="post"
            enctype="multipart/form-data"
            node_ref=form_ref
            on:submit=on_submit
        >
            <div
                class=move || view_model.get().area_class
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=on_area_click
            >
                <div class="upload-icon">
                    {move || match view_model.get().icon {
                        UploadIcon::Glyph(glyph) => view! { <span>{glyph}</span> }.into_any(),
                        UploadIcon::Thumbnail(url) => {
                            view! { <img class="upload-thumbnail" src=url alt="Selected thermal image preview" /> }
                                .into_any()
                        }
                    }}
                </div>
                <p class="upload-text">{move || view_model.get().label}</p>
                <input
                    type="file"
                    id="file-input"
                    name="file"
                    accept="image/*"
                    class="file-input"
                    node_ref=input_ref
                    on:change=on_change
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                />
            </div>
            <button type="submit" class="btn btn-primary analyze-btn" prop:disabled=move || view_model.get().button_disabled>
                {move || view_model.get().button_label}
            </button>
            <div class="loading" style:display=move || if view_model.get().loading_visible { "block" } else { "none" }>
                <div class="spinner"></div>
                <p>"Analyzing thermal patterns..."</p>
            </div>
        </form>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;
    use web_sys::File;

    use crate::state::upload::{PREVIEW_READY_MESSAGE, SelectedFile, UploadState};
    use crate::util::file_preview::read_data_url;
    use crate::util::notify::Notifier;

    fn metadata(file: &File) -> SelectedFile {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        SelectedFile { name: file.name(), mime: file.type_(), size }
    }

    /// Validate `file` and either make it the selection or restore the input.
    pub(super) fn accept(
        file: File,
        upload: RwSignal<UploadState>,
        accepted: StoredValue<Option<File>, LocalStorage>,
        input_ref: NodeRef<leptos::html::Input>,
        notifier: Notifier,
    ) {
        let selected = metadata(&file);
        let Some(result) = upload.try_update(|u| u.select(selected)) else {
            return;
        };
        match result {
            Ok(request) => {
                sync_input(input_ref, Some(&file));
                read_data_url(&file, move |url| {
                    let applied = match url {
                        Some(url) => upload.try_update(|u| u.apply_preview(request, url)).unwrap_or(false),
                        None => {
                            let _ = upload.try_update(|u| u.preview_failed(request));
                            false
                        }
                    };
                    if applied {
                        notifier.success(PREVIEW_READY_MESSAGE);
                    }
                });
                accepted.set_value(Some(file));
            }
            Err(e) => {
                notifier.error(e.to_string());
                let previous = accepted.get_value();
                sync_input(input_ref, previous.as_ref());
            }
        }
    }

    /// Make the native input hold exactly `file` (or nothing) so the form
    /// posts the accepted selection.
    fn sync_input(input_ref: NodeRef<leptos::html::Input>, file: Option<&File>) {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = file else {
            input.set_value("");
            return;
        };
        match web_sys::DataTransfer::new() {
            Ok(dt) => {
                if dt.items().add_with_file(file).is_ok() {
                    input.set_files(dt.files().as_ref());
                }
            }
            Err(e) => log::warn!("DataTransfer unavailable: {e:?}"),
        }
    }
}
