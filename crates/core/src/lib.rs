//! nimbus - a word cloud layout engine.
//!
//! Given an ordered list of weighted, labeled topics and a rectangular
//! container, the engine assigns each topic a font size (volume bucketing),
//! a sentiment category, and a non-overlapping position found by walking an
//! outward Archimedean spiral from the container's center.
//!
//! Rendering, data loading, and selection handling are host concerns; the
//! engine only needs a [`measure::TextMeasure`] capability to size labels.

pub mod error;
pub mod geom;
pub mod layout;
pub mod measure;
pub mod model;

pub use error::{CloudError, Result};
pub use geom::{Container, Point, Rect, Size};
pub use layout::{BoundsMode, CloudParams, WordLayoutEngine};
pub use measure::{CharGridMeasure, TextMeasure};
pub use model::{PlacedWord, Selection, Sentiment, TopicItem};
