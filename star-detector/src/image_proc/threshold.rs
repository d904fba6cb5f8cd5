//! Fixed-level image binarization

use image::{GrayImage, Luma};

/// Value written for foreground pixels
pub const FOREGROUND: u8 = 255;
/// Value written for background pixels
pub const BACKGROUND: u8 = 0;

/// Apply a fixed threshold to a grayscale image and return a binary mask
///
/// Pixels with intensity at or above `threshold` become [`FOREGROUND`], all
/// others become [`BACKGROUND`].
///
/// # Arguments
///
/// * `image` - Input grayscale image
/// * `threshold` - Threshold value
///
/// # Returns
///
/// A binary image of the same dimensions
pub fn apply_threshold(image: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if image.get_pixel(x, y)[0] >= threshold {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    })
}

/// Count foreground pixels in a binary mask
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] != BACKGROUND).count()
}
