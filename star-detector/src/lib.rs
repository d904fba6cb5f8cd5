//! Star marker detection for rhythm-game charts.
//!
//! Takes a single uploaded image, finds bright blobs ("stars") and places
//! each one on a chart: a lane derived from its horizontal position and a
//! trigger time derived from its vertical position. Stars are returned bottom
//! of the image first, which is the order they fire during playback.
//!
//! ```no_run
//! let bytes = std::fs::read("chart.png").unwrap();
//! for star in star_detector::detect_stars(&bytes).unwrap() {
//!     println!("{} at {:.2}s", star.sound_id, star.timing);
//! }
//! ```

pub mod chart;
pub mod config;
pub mod detector;
pub mod error;
pub mod image_proc;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
pub mod types;

pub use config::DetectorConfig;
pub use detector::{decode_grayscale, detect_in_image, detect_stars, detect_stars_with_config};
pub use error::DetectError;
pub use types::{ErrorResponse, StarRecord, StarsResponse};
