//! Detector parameters.
//!
//! The defaults are the values the game client is tuned against: a fixed
//! binarization threshold, a small-blob area cutoff, four lanes and a
//! ten second chart that starts two seconds into playback.

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// Intensity at or above which a pixel counts as foreground.
pub const DEFAULT_THRESHOLD: u8 = 128;
/// Minimum enclosed contour area in pixels².
pub const DEFAULT_MIN_AREA: f64 = 10.0;
/// Number of lanes the image width is split into.
pub const DEFAULT_GRID_COLS: usize = 4;
/// Span of the chart timeline in seconds.
pub const DEFAULT_MAX_SECONDS: f64 = 10.0;
/// Timeline start in seconds.
pub const DEFAULT_OFFSET_SECONDS: f64 = 2.0;

/// Settings for the star detection pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DetectorConfig {
    /// Binarization threshold (0-255)
    pub threshold: u8,
    /// Contours enclosing less area than this are discarded
    pub min_area: f64,
    /// Number of equal-width lanes
    pub grid_cols: usize,
    /// Timing range covered by the full image height
    pub max_seconds: f64,
    /// Timing assigned to a star at the very bottom of the image
    pub offset_seconds: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_area: DEFAULT_MIN_AREA,
            grid_cols: DEFAULT_GRID_COLS,
            max_seconds: DEFAULT_MAX_SECONDS,
            offset_seconds: DEFAULT_OFFSET_SECONDS,
        }
    }
}

impl DetectorConfig {
    /// Check that every parameter can produce well-formed star records.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.grid_cols == 0 {
            return Err(DetectError::InvalidConfig(
                "grid_cols must be at least 1".to_string(),
            ));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(DetectError::InvalidConfig(format!(
                "min_area must be a non-negative number, got {}",
                self.min_area
            )));
        }
        if !self.max_seconds.is_finite() || self.max_seconds < 0.0 {
            return Err(DetectError::InvalidConfig(format!(
                "max_seconds must be a non-negative number, got {}",
                self.max_seconds
            )));
        }
        if !self.offset_seconds.is_finite() {
            return Err(DetectError::InvalidConfig(format!(
                "offset_seconds must be finite, got {}",
                self.offset_seconds
            )));
        }
        Ok(())
    }
}
