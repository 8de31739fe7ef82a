//! Upload widget model.
//!
//! DESIGN
//! ======
//! The widget is an explicit state machine instead of reading its own DOM.
//! Event handlers call the transition methods here and render from
//! [`UploadState::view`]. The browser `File` handle never enters this
//! module; only its name, MIME type and size do.
//!
//! Preview reads are tagged with a monotonic request id. A read is applied
//! only when its id is still the latest, so a slow read for an older file
//! cannot overwrite the preview of a newer one.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const DEFAULT_LABEL: &str = "Drop a thermal image here or click to browse";
pub const IDLE_ICON: &str = "📷";
pub const LOADING_ICON: &str = "📁";
pub const BUTTON_LABEL: &str = "Analyze Image";
pub const BUSY_BUTTON_LABEL: &str = "Analyzing...";
pub const PREVIEW_READY_MESSAGE: &str = "Image selected successfully!";
pub const PROCESSING_MESSAGE: &str = "Processing thermal image...";
/// Delay between the busy state and the native form submission.
pub const SUBMIT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("File size too large. Please select a file smaller than 10MB.")]
    TooLarge,
    #[error("Please select an image file")]
    NotAnImage,
    #[error("Please select an image file first")]
    NoFile,
    #[error("Analysis already in progress")]
    AlreadySubmitting,
}

/// Metadata of an accepted file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Check a candidate file. Size is checked before type.
///
/// # Errors
///
/// [`UploadError::TooLarge`] over 10 MiB, else [`UploadError::NotAnImage`]
/// for a non-image MIME type.
pub fn validate(file: &SelectedFile) -> Result<(), UploadError> {
    if !vision::within_upload_limit(file.size) {
        return Err(UploadError::TooLarge);
    }
    if !vision::is_image_mime(&file.mime) {
        return Err(UploadError::NotAnImage);
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Placeholder,
    Loading,
    /// Data URL of the image.
    Ready(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub preview: Preview,
    /// Id of the most recent preview read.
    pub preview_request: u64,
    pub drag_over: bool,
    pub submitting: bool,
}

impl UploadState {
    /// Accept `file` as the new selection and start a preview read.
    ///
    /// Returns the request id the read must present to
    /// [`UploadState::apply_preview`]. A rejected file leaves the state
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a rejected file.
    pub fn select(&mut self, file: SelectedFile) -> Result<u64, UploadError> {
        validate(&file)?;
        self.selected = Some(file);
        self.preview = Preview::Loading;
        self.preview_request += 1;
        Ok(self.preview_request)
    }

    /// Apply a finished read. Returns `false` for a stale request.
    pub fn apply_preview(&mut self, request: u64, data_url: String) -> bool {
        if request != self.preview_request || self.selected.is_none() {
            return false;
        }
        self.preview = Preview::Ready(data_url);
        true
    }

    /// A read failed; fall back to the placeholder if it was current.
    pub fn preview_failed(&mut self, request: u64) -> bool {
        if request != self.preview_request {
            return false;
        }
        self.preview = Preview::Placeholder;
        true
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.drag_over = over;
    }

    /// Enter the submitting state.
    ///
    /// # Errors
    ///
    /// [`UploadError::NoFile`] without a selection,
    /// [`UploadError::AlreadySubmitting`] on a repeated submit.
    pub fn begin_submit(&mut self) -> Result<(), UploadError> {
        if self.submitting {
            return Err(UploadError::AlreadySubmitting);
        }
        if self.selected.is_none() {
            return Err(UploadError::NoFile);
        }
        self.submitting = true;
        Ok(())
    }

    #[must_use]
    pub fn view(&self) -> UploadView {
        UploadView::render(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadIcon {
    Glyph(&'static str),
    Thumbnail(String),
}

/// Everything the widget needs to draw itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadView {
    pub label: String,
    pub icon: UploadIcon,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub loading_visible: bool,
    pub area_class: &'static str,
}

impl UploadView {
    #[must_use]
    pub fn render(state: &UploadState) -> Self {
        let label = state
            .selected
            .as_ref()
            .map_or_else(|| DEFAULT_LABEL.to_owned(), |f| format!("Selected: {}", f.name));
        let icon = match &state.preview {
            Preview::Placeholder if state.selected.is_some() => UploadIcon::Glyph(LOADING_ICON),
            Preview::Placeholder => UploadIcon::Glyph(IDLE_ICON),
            Preview::Loading => UploadIcon::Glyph(LOADING_ICON),
            Preview::Ready(url) => UploadIcon::Thumbnail(url.clone()),
        };
        Self {
            label,
            icon,
            button_label: if state.submitting { BUSY_BUTTON_LABEL } else { BUTTON_LABEL },
            button_disabled: state.submitting,
            loading_visible: state.submitting,
            area_class: if state.drag_over { "file-upload-area dragover" } else { "file-upload-area" },
        }
    }
}
