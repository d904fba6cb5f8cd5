//! Wire types returned to chart clients.

use serde::{Deserialize, Serialize};

/// A detected star placed on the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarRecord {
    /// Lane index, always integral and below the lane count
    pub x: f64,
    /// Vertical position normalized to [0, 1], two decimals
    pub y: f64,
    /// Sound triggered by the star ("button1", "button2", ...)
    #[serde(rename = "soundId")]
    pub sound_id: String,
    /// Trigger time in seconds, two decimals
    pub timing: f64,
}

/// Successful detection payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StarsResponse {
    /// Stars ordered bottom of the image first
    pub stars: Vec<StarRecord>,
}

/// Failure payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<Vec<StarRecord>> for StarsResponse {
    fn from(stars: Vec<StarRecord>) -> Self {
        Self { stars }
    }
}
