//! Color + texture feature extraction for thermal scans.
//!
//! The vector layout is fixed and must match whatever trained the model:
//!
//! | range    | content                                        |
//! |----------|------------------------------------------------|
//! | `0..16`  | hue histogram over `[0, 180)`, L2-normalized   |
//! | `16..32` | saturation histogram over `[0, 256)`, L2       |
//! | `32..48` | value histogram over `[0, 256)`, L2            |
//! | `48..58` | uniform LBP (P=8, R=1) histogram, sum-normalized |
//!
//! Hue uses the 8-bit convention (degrees / 2) and grayscale uses the
//! fixed-point BT.601 weights, so vectors line up with OpenCV-produced ones.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use std::path::Path;

use image::RgbImage;

pub const HUE_BINS: usize = 16;
pub const SAT_BINS: usize = 16;
pub const VAL_BINS: usize = 16;
pub const LBP_BINS: usize = 10;
pub const FEATURE_LEN: usize = HUE_BINS + SAT_BINS + VAL_BINS + LBP_BINS;

const HUE_RANGE: usize = 180;
const CHANNEL_RANGE: usize = 256;
const LBP_POINTS: usize = 8;
const LBP_RADIUS: f64 = 1.0;
const LBP_EPSILON: f32 = 1e-6;

/// Errors produced while turning an upload into a feature vector.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has no pixels")]
    Empty,
}

/// Decode an in-memory upload and extract its feature vector.
///
/// # Errors
///
/// Returns [`FeatureError::Decode`] for unsupported or corrupt data and
/// [`FeatureError::Empty`] for zero-sized images.
pub fn extract_from_bytes(bytes: &[u8]) -> Result<Vec<f32>, FeatureError> {
    let image = image::load_from_memory(bytes)?;
    extract(&image.to_rgb8())
}

/// Open an image file and extract its feature vector.
///
/// # Errors
///
/// Same as [`extract_from_bytes`].
pub fn extract_from_path(path: &Path) -> Result<Vec<f32>, FeatureError> {
    let image = image::open(path)?;
    extract(&image.to_rgb8())
}

/// Extract the [`FEATURE_LEN`]-value vector from decoded RGB pixels.
///
/// # Errors
///
/// Returns [`FeatureError::Empty`] for zero-sized images.
pub fn extract(rgb: &RgbImage) -> Result<Vec<f32>, FeatureError> {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    if width == 0 || height == 0 {
        return Err(FeatureError::Empty);
    }

    let mut hue = [0f32; HUE_BINS];
    let mut sat = [0f32; SAT_BINS];
    let mut val = [0f32; VAL_BINS];
    let mut gray = Vec::with_capacity(width * height);

    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let (h, s, v) = rgb_to_hsv8(r, g, b);
        if let Some(bin) = bin_index(h, HUE_RANGE, HUE_BINS) {
            hue[bin] += 1.0;
        }
        if let Some(bin) = bin_index(s, CHANNEL_RANGE, SAT_BINS) {
            sat[bin] += 1.0;
        }
        if let Some(bin) = bin_index(v, CHANNEL_RANGE, VAL_BINS) {
            val[bin] += 1.0;
        }
        gray.push(to_gray(r, g, b));
    }

    l2_normalize(&mut hue);
    l2_normalize(&mut sat);
    l2_normalize(&mut val);
    let lbp = lbp_histogram(&gray, width, height);

    let mut features = Vec::with_capacity(FEATURE_LEN);
    features.extend_from_slice(&hue);
    features.extend_from_slice(&sat);
    features.extend_from_slice(&val);
    features.extend_from_slice(&lbp);
    Ok(features)
}

/// Histogram bin for `value` over `[0, range)`; out-of-range values are dropped.
fn bin_index(value: u8, range: usize, bins: usize) -> Option<usize> {
    let value = usize::from(value);
    (value < range).then_some(value * bins / range)
}

/// 8-bit HSV: hue in `[0, 180]`, saturation and value in `[0, 255]`.
pub(crate) fn rgb_to_hsv8(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = f32::from(max - min);
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));

    let s = if max == 0 { 0.0 } else { diff * 255.0 / f32::from(max) };
    let mut h = if max == min {
        0.0
    } else if max == r {
        60.0 * (gf - bf) / diff
    } else if max == g {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    ((h / 2.0).round().min(255.0) as u8, s.round().min(255.0) as u8, max)
}

/// BT.601 luma with 14-bit fixed-point weights.
pub(crate) fn to_gray(r: u8, g: u8, b: u8) -> u8 {
    let luma = u32::from(r) * 4899 + u32::from(g) * 9617 + u32::from(b) * 1868 + (1 << 13);
    (luma >> 14).min(255) as u8
}

fn l2_normalize(hist: &mut [f32]) {
    let norm = hist.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in hist.iter_mut() {
            *v /= norm;
        }
    }
}

/// Rotation-invariant uniform LBP histogram, normalized by `sum + 1e-6`.
///
/// Neighbors are sampled on a circle with bilinear interpolation and read as
/// zero outside the image. A pattern with more than two bit transitions
/// (counted linearly, not wrapping) maps to code `P + 1`.
pub(crate) fn lbp_histogram(gray: &[u8], width: usize, height: usize) -> [f32; LBP_BINS] {
    let offsets: Vec<(f64, f64)> = (0..LBP_POINTS)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / LBP_POINTS as f64;
            (round5(-LBP_RADIUS * angle.sin()), round5(LBP_RADIUS * angle.cos()))
        })
        .collect();

    let mut hist = [0f32; LBP_BINS];
    let mut bits = [false; LBP_POINTS];
    for row in 0..height {
        for col in 0..width {
            let center = f64::from(gray[row * width + col]);
            for (bit, (dr, dc)) in bits.iter_mut().zip(&offsets) {
                let sample = bilinear(gray, width, height, row as f64 + dr, col as f64 + dc);
                *bit = sample - center >= 0.0;
            }
            let changes = bits.windows(2).filter(|pair| pair[0] != pair[1]).count();
            let code = if changes <= 2 { bits.iter().filter(|b| **b).count() } else { LBP_POINTS + 1 };
            hist[code] += 1.0;
        }
    }

    let total = hist.iter().sum::<f32>() + LBP_EPSILON;
    for v in &mut hist {
        *v /= total;
    }
    hist
}

fn bilinear(gray: &[u8], width: usize, height: usize, r: f64, c: f64) -> f64 {
    let (min_r, min_c) = (r.floor(), c.floor());
    let (max_r, max_c) = (r.ceil(), c.ceil());
    let (dr, dc) = (r - min_r, c - min_c);

    let pixel = |pr: f64, pc: f64| -> f64 {
        if pr < 0.0 || pc < 0.0 || pr >= height as f64 || pc >= width as f64 {
            return 0.0;
        }
        f64::from(gray[pr as usize * width + pc as usize])
    };

    let top = (1.0 - dc) * pixel(min_r, min_c) + dc * pixel(min_r, max_c);
    let bottom = (1.0 - dc) * pixel(max_r, min_c) + dc * pixel(max_r, max_c);
    (1.0 - dr) * top + dr * bottom
}

fn round5(v: f64) -> f64 {
    (v * 100_000.0).round() / 100_000.0
}
