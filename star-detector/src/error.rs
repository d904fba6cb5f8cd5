//! Error taxonomy for the detection pipeline.

use thiserror::Error;

/// Errors raised while turning uploaded bytes into star records.
///
/// The pipeline is fail-fast: any variant aborts the whole detection and no
/// partial star list is returned.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Input bytes are corrupt or in an unsupported format.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded but has no pixels to analyze.
    #[error("Decoded image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Detector parameters are unusable (zero columns, negative area, ...).
    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected numeric or geometric failure inside the pipeline.
    #[error("Processing error: {0}")]
    Processing(String),
}

impl DetectError {
    /// True when the failure was caused by the caller's input rather than by
    /// the service itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DetectError::Decode(_) | DetectError::EmptyImage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        let empty = DetectError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert!(empty.is_client_error());
        assert!(!DetectError::Processing("nan centroid".into()).is_client_error());
        assert!(!DetectError::InvalidConfig("grid_cols".into()).is_client_error());
    }

    #[test]
    fn test_messages_carry_details() {
        let err = DetectError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert_eq!(err.to_string(), "Decoded image is empty (0x12)");

        let err = DetectError::Processing("non-finite centroid".into());
        assert_eq!(err.to_string(), "Processing error: non-finite centroid");
    }
}
