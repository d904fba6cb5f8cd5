//! Mapping from image centroids to chart lanes and trigger times.
//!
//! The image width is split into `grid_cols` equal lanes. The vertical axis
//! is inverted into time: the bottom row of the image fires at
//! `offset_seconds` and the top row at `offset_seconds + max_seconds`.

use std::cmp::Ordering;

use crate::config::DetectorConfig;
use crate::types::StarRecord;

/// A star together with the unrounded centroid row used for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStar {
    /// Centroid row in pixels
    pub centroid_y: f64,
    pub record: StarRecord,
}

/// Lane index for a centroid column, clamped into `[0, grid_cols - 1]`.
pub fn column_index(cx: f64, width: u32, grid_cols: usize) -> usize {
    let bucket = (cx * grid_cols as f64 / f64::from(width)).floor();
    (bucket as usize).min(grid_cols.saturating_sub(1))
}

/// Round to two decimal places, exact ties going to the even digit.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Trigger time for a centroid row.
pub fn timing_for_row(cy: f64, height: u32, config: &DetectorConfig) -> f64 {
    let from_bottom = 1.0 - cy / f64::from(height);
    round_to_hundredths(from_bottom * config.max_seconds + config.offset_seconds)
}

/// Sound identifier for a lane; lanes are numbered from one.
pub fn sound_id(col_index: usize) -> String {
    format!("button{}", col_index + 1)
}

/// Place a centroid on the chart.
pub fn place_star(
    cx: f64,
    cy: f64,
    width: u32,
    height: u32,
    config: &DetectorConfig,
) -> PlacedStar {
    let col = column_index(cx, width, config.grid_cols);

    PlacedStar {
        centroid_y: cy,
        record: StarRecord {
            x: col as f64,
            y: round_to_hundredths(cy / f64::from(height)),
            sound_id: sound_id(col),
            timing: timing_for_row(cy, height, config),
        },
    }
}

/// Order stars bottom of the image first and drop the sort key.
///
/// The sort is stable, so stars on the same row keep their discovery order.
pub fn order_bottom_up(mut stars: Vec<PlacedStar>) -> Vec<StarRecord> {
    stars.sort_by(|a, b| {
        b.centroid_y
            .partial_cmp(&a.centroid_y)
            .unwrap_or(Ordering::Equal)
    });
    stars.into_iter().map(|s| s.record).collect()
}
