//! Star detection pipeline
//!
//! decode → threshold → external contours → area filter → centroid →
//! lane/timing mapping → bottom-first ordering.
//!
//! The pipeline holds no state between calls. Each invocation owns its
//! decoded buffer, so callers may run any number of detections in parallel.

use image::GrayImage;
use log::{debug, trace};

use crate::chart::{order_bottom_up, place_star, PlacedStar};
use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::image_proc::{
    apply_threshold, contour_area, external_contours, foreground_count, polygon_moments,
};
use crate::types::StarRecord;

/// Detect stars in an encoded image using the default chart parameters
///
/// # Arguments
/// * `bytes` - Raw bytes of an encoded raster image (PNG, JPEG, BMP, ...)
///
/// # Returns
/// Stars ordered bottom of the image first, or the first error encountered
pub fn detect_stars(bytes: &[u8]) -> Result<Vec<StarRecord>, DetectError> {
    detect_stars_with_config(bytes, &DetectorConfig::default())
}

/// Detect stars in an encoded image using explicit parameters
pub fn detect_stars_with_config(
    bytes: &[u8],
    config: &DetectorConfig,
) -> Result<Vec<StarRecord>, DetectError> {
    config.validate()?;
    let image = decode_grayscale(bytes)?;
    detect_in_image(&image, config)
}

/// Decode raw bytes into an 8-bit grayscale frame
///
/// Color and higher bit depth inputs are converted with the `image` crate's
/// luma conversion. Images with a zero dimension are rejected.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, DetectError> {
    let decoded = image::load_from_memory(bytes)?;
    let gray = decoded.to_luma8();
    ensure_non_empty(&gray)?;
    Ok(gray)
}

/// Run the detection stages on an already decoded grayscale frame
pub fn detect_in_image(
    image: &GrayImage,
    config: &DetectorConfig,
) -> Result<Vec<StarRecord>, DetectError> {
    config.validate()?;
    ensure_non_empty(image)?;

    let (width, height) = image.dimensions();
    let mask = apply_threshold(image, config.threshold);
    let contours = external_contours(&mask);

    let mut placed: Vec<PlacedStar> = Vec::with_capacity(contours.len());
    for (index, contour) in contours.iter().enumerate() {
        let area = contour_area(contour);
        if area < config.min_area {
            trace!("Contour {index}: area {area:.1} below {}", config.min_area);
            continue;
        }

        let Some((cx, cy)) = polygon_moments(contour).centroid() else {
            trace!("Contour {index}: zero moment area, skipping");
            continue;
        };

        if !cx.is_finite() || !cy.is_finite() {
            return Err(DetectError::Processing(format!(
                "contour {index} produced a non-finite centroid ({cx}, {cy})"
            )));
        }

        let star = place_star(cx, cy, width, height, config);
        trace!(
            "Contour {index}: area {area:.1}, centroid ({cx:.2}, {cy:.2}) -> {} at {:.2}s",
            star.record.sound_id,
            star.record.timing
        );
        placed.push(star);
    }

    debug!(
        "Detected {} stars from {} external contours in {}x{} image ({} foreground pixels)",
        placed.len(),
        contours.len(),
        width,
        height,
        foreground_count(&mask)
    );

    Ok(order_bottom_up(placed))
}

fn ensure_non_empty(image: &GrayImage) -> Result<(), DetectError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(DetectError::EmptyImage { width, height });
    }
    Ok(())
}
