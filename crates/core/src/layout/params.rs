//! Layout parameters.
//!
//! Contains CloudParams for controlling the layout pass. Sentiment category
//! bounds are deliberately not here; they are fixed constants in
//! [`crate::model`].

use crate::error::{CloudError, Result};

/// How the in-bounds test treats the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsMode {
    /// Loose test: the candidate's absolute right/bottom edges are compared
    /// against the container's origin, while its left/top edges are compared
    /// against the container's extent. Words may hang partly outside the
    /// container on the left and top. Default, for compatibility with
    /// existing clouds.
    #[default]
    Legacy,
    /// True containment: the whole rectangle must lie inside the container.
    Contained,
}

/// Parameters for a layout pass.
///
/// Controls font-size bucketing, spiral density, and the padding kept
/// between placed words.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudParams {
    /// Number of volume buckets mapping to discrete font sizes.
    pub font_buckets: usize,

    /// Font size of bucket `i` is `i * font_step`, in layout units.
    pub font_step: f64,

    /// Maximum number of spiral steps probed per word before the word is
    /// dropped. Bounds the search on dense inputs.
    pub spiral_limit: usize,

    /// Angle advance per spiral step, in radians. Smaller values probe more
    /// densely.
    pub spiral_resolution: f64,

    /// Horizontal padding kept around each word during collision testing.
    pub x_padding: f64,

    /// Vertical padding kept around each word during collision testing.
    pub y_padding: f64,

    /// In-bounds test variant.
    pub bounds: BoundsMode,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            font_buckets: 6,
            font_step: 12.0,
            spiral_limit: 3600,
            spiral_resolution: 1.0,
            x_padding: 2.0,
            y_padding: 10.0,
            bounds: BoundsMode::Legacy,
        }
    }
}

impl CloudParams {
    /// Validates the parameters, returning them unchanged on success.
    pub fn validated(self) -> Result<Self> {
        if self.font_buckets == 0 {
            return Err(CloudError::InvalidParams(
                "font_buckets must be at least 1".into(),
            ));
        }
        if !(self.font_step > 0.0) {
            return Err(CloudError::InvalidParams(
                "font_step must be positive".into(),
            ));
        }
        if !(self.spiral_resolution > 0.0) {
            return Err(CloudError::InvalidParams(
                "spiral_resolution must be positive".into(),
            ));
        }
        if self.x_padding < 0.0 || self.y_padding < 0.0 {
            return Err(CloudError::InvalidParams(
                "paddings must be non-negative".into(),
            ));
        }
        Ok(self)
    }
}
