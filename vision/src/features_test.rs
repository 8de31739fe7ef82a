use super::*;
use image::{DynamicImage, ImageOutputFormat, Rgb};

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// =============================================================
// Color space helpers
// =============================================================

#[test]
fn hsv_primaries_use_half_degree_hue() {
    assert_eq!(rgb_to_hsv8(255, 0, 0), (0, 255, 255));
    assert_eq!(rgb_to_hsv8(0, 255, 0), (60, 255, 255));
    assert_eq!(rgb_to_hsv8(0, 0, 255), (120, 255, 255));
}

#[test]
fn hsv_gray_has_no_hue_or_saturation() {
    assert_eq!(rgb_to_hsv8(0, 0, 0), (0, 0, 0));
    assert_eq!(rgb_to_hsv8(128, 128, 128), (0, 0, 128));
}

#[test]
fn gray_weights_sum_to_full_scale() {
    assert_eq!(to_gray(255, 255, 255), 255);
    assert_eq!(to_gray(0, 0, 0), 0);
    assert_eq!(to_gray(255, 0, 0), 76);
}

// =============================================================
// LBP
// =============================================================

#[test]
fn lbp_single_bright_pixel_is_all_zero_pattern() {
    let hist = lbp_histogram(&[100], 1, 1);
    assert!(approx(hist[0], 1.0));
    assert!(hist[1..].iter().all(|v| *v == 0.0));
}

#[test]
fn lbp_single_black_pixel_is_all_ones_pattern() {
    let hist = lbp_histogram(&[0], 1, 1);
    assert!(approx(hist[8], 1.0));
}

#[test]
fn lbp_histogram_sums_to_one() {
    let gray: Vec<u8> = (0..64).map(|i| ((i * 37) % 251) as u8).collect();
    let hist = lbp_histogram(&gray, 8, 8);
    assert!(approx(hist.iter().sum::<f32>(), 1.0));
}

// =============================================================
// Full vector
// =============================================================

#[test]
fn extract_produces_fixed_length_vector() {
    let features = extract(&solid(4, 4, [200, 40, 10])).unwrap();
    assert_eq!(features.len(), FEATURE_LEN);
    assert_eq!(FEATURE_LEN, 58);
}

#[test]
fn extract_solid_red_concentrates_histograms() {
    let features = extract(&solid(5, 3, [255, 0, 0])).unwrap();
    assert!(approx(features[0], 1.0), "hue bin 0");
    assert!(approx(features[HUE_BINS + SAT_BINS - 1], 1.0), "saturation top bin");
    assert!(approx(features[HUE_BINS + SAT_BINS + VAL_BINS - 1], 1.0), "value top bin");
}

#[test]
fn extract_color_histograms_are_unit_norm() {
    let mut img = solid(6, 6, [20, 80, 200]);
    img.put_pixel(0, 0, Rgb([250, 250, 0]));
    img.put_pixel(3, 3, Rgb([10, 10, 10]));
    let features = extract(&img).unwrap();
    for (start, len) in [(0, HUE_BINS), (HUE_BINS, SAT_BINS), (HUE_BINS + SAT_BINS, VAL_BINS)] {
        let norm = features[start..start + len]
            .iter()
            .map(|v| v * v)
            .sum::<f32>()
            .sqrt();
        assert!(approx(norm, 1.0), "segment at {start} has norm {norm}");
    }
    let lbp_sum: f32 = features[FEATURE_LEN - LBP_BINS..].iter().sum();
    assert!(approx(lbp_sum, 1.0));
}

#[test]
fn extract_rejects_empty_image() {
    assert!(matches!(extract(&RgbImage::new(0, 0)), Err(FeatureError::Empty)));
}

#[test]
fn extract_from_bytes_rejects_garbage() {
    let result = extract_from_bytes(b"definitely not an image");
    assert!(matches!(result, Err(FeatureError::Decode(_))));
}

#[test]
fn extract_from_bytes_decodes_png() {
    let mut bytes = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(solid(4, 4, [0, 0, 255]))
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .unwrap();
    let features = extract_from_bytes(bytes.get_ref()).unwrap();
    assert_eq!(features.len(), FEATURE_LEN);
    // Pure blue: hue 120 lands in bin 120 * 16 / 180 = 10.
    assert!(approx(features[10], 1.0));
}
