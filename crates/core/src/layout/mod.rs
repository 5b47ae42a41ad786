//! Spiral word-cloud layout.
//!
//! This module contains:
//! - [`CloudParams`]: tunable layout parameters
//! - [`FontScale`]: volume-to-font-size bucketing
//! - [`Spiral`]: the outward candidate-position walk
//! - [`PlacedSet`]: the per-pass collision index
//! - [`WordLayoutEngine`]: the layout pass itself

pub mod engine;
pub mod params;
pub mod placed;
pub mod spiral;
pub mod thresholds;

pub use engine::WordLayoutEngine;
pub use params::{BoundsMode, CloudParams};
pub use placed::PlacedSet;
pub use spiral::Spiral;
pub use thresholds::{FontScale, FontSizeThreshold};
