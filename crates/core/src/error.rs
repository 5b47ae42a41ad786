//! Error types for the nimbus layout library.

use thiserror::Error;

/// Primary error type for layout operations.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("text measurement failed for {label:?} at {font_size}px: {reason}")]
    Measurement {
        label: String,
        font_size: f64,
        reason: String,
    },

    #[error("invalid layout parameters: {0}")]
    InvalidParams(String),
}

impl CloudError {
    /// Builds a measurement error for the given label and font size.
    pub fn measurement(label: &str, font_size: f64, reason: impl Into<String>) -> Self {
        Self::Measurement {
            label: label.to_string(),
            font_size,
            reason: reason.into(),
        }
    }
}

/// Convenience Result type alias for CloudError.
pub type Result<T> = std::result::Result<T, CloudError>;
