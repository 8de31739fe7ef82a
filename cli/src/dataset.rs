//! Labeled dataset discovery.
//!
//! Layout: `<root>/<Class>/<split>/<image>`, where `<Class>` is one of the
//! trainable diagnosis labels and `<split>` is `train` or `test`. A missing
//! class directory is skipped with a warning; an image that fails to decode
//! is skipped the same way.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use std::path::{Path, PathBuf};

use vision::Diagnosis;

use crate::CliError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

pub fn class_dir(root: &Path, diagnosis: Diagnosis, split: Split) -> PathBuf {
    root.join(diagnosis.label()).join(split.dir_name())
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase())
}

fn is_image_path(path: &Path) -> bool {
    extension(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// MIME type sent with an uploaded file, from its extension.
pub fn guess_mime(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("bmp") => "image/bmp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Every image of `split`, labeled by class folder, in a stable order.
///
/// # Errors
///
/// [`CliError::MissingDataset`] when `root` is not a directory, or an I/O
/// error while listing a class directory.
pub fn list_images(root: &Path, split: Split) -> Result<Vec<(Diagnosis, PathBuf)>, CliError> {
    if !root.is_dir() {
        return Err(CliError::MissingDataset(root.to_path_buf()));
    }
    let mut images = Vec::new();
    for diagnosis in Diagnosis::TRAINABLE {
        let dir = class_dir(root, diagnosis, split);
        if !dir.is_dir() {
            eprintln!("warning: {} not found, skipping {diagnosis}", dir.display());
            continue;
        }
        let entries = std::fs::read_dir(&dir).map_err(|source| CliError::Io { path: dir.clone(), source })?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|source| CliError::Io { path: dir.clone(), source })?.path();
            if path.is_file() && is_image_path(&path) {
                paths.push(path);
            }
        }
        paths.sort();
        images.extend(paths.into_iter().map(|p| (diagnosis, p)));
    }
    Ok(images)
}

/// Extract features for every image of `split`.
///
/// # Errors
///
/// [`CliError::EmptyDataset`] when nothing could be loaded.
pub fn load_samples(root: &Path, split: Split) -> Result<Vec<(Diagnosis, Vec<f32>)>, CliError> {
    let images = list_images(root, split)?;
    let mut samples = Vec::with_capacity(images.len());
    for (diagnosis, path) in images {
        match vision::features::extract_from_path(&path) {
            Ok(features) => samples.push((diagnosis, features)),
            Err(e) => eprintln!("warning: skipping {}: {e}", path.display()),
        }
    }
    if samples.is_empty() {
        return Err(CliError::EmptyDataset(root.to_path_buf()));
    }
    Ok(samples)
}
