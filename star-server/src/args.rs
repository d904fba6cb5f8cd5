//! Command line arguments shared by the server and CLI binaries.

use clap::Args;
use star_detector::config::{
    DEFAULT_GRID_COLS, DEFAULT_MAX_SECONDS, DEFAULT_MIN_AREA, DEFAULT_OFFSET_SECONDS,
    DEFAULT_THRESHOLD,
};
use star_detector::DetectorConfig;

/// HTTP listener settings.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long,
        default_value = "0.0.0.0",
        help = "Address to bind the HTTP listener to"
    )]
    pub bind: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = "20", help = "Largest accepted upload body in MiB")]
    pub max_upload_mb: usize,
}

impl ServerArgs {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

/// Detector tuning. Defaults are the values the game client expects.
#[derive(Args, Debug, Clone)]
pub struct DetectorArgs {
    #[arg(
        long,
        default_value_t = DEFAULT_THRESHOLD,
        help = "Foreground threshold (0-255, inclusive)"
    )]
    pub threshold: u8,

    #[arg(
        long,
        default_value_t = DEFAULT_MIN_AREA,
        help = "Minimum contour area in pixels²"
    )]
    pub min_area: f64,

    #[arg(
        long,
        default_value_t = DEFAULT_GRID_COLS,
        help = "Number of lanes across the image width"
    )]
    pub grid_cols: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_SECONDS)]
    pub max_seconds: f64,

    #[arg(long, default_value_t = DEFAULT_OFFSET_SECONDS)]
    pub offset_seconds: f64,
}

impl DetectorArgs {
    pub fn to_config(&self) -> DetectorConfig {
        DetectorConfig {
            threshold: self.threshold,
            min_area: self.min_area,
            grid_cols: self.grid_cols,
            max_seconds: self.max_seconds,
            offset_seconds: self.offset_seconds,
        }
    }
}
