//! Image processing stages of the star detection pipeline
//!
//! This module provides the pixel-level steps that turn a decoded grayscale
//! frame into centroids: fixed-level binarization, external contour tracing
//! and polygon moment analysis.

pub mod contours;
pub mod moments;
pub mod threshold;

// Re-export key functionality for easier access
pub use contours::{external_contours, simplify_chain};
pub use moments::{contour_area, polygon_moments, Moments};
pub use threshold::{apply_threshold, foreground_count};
