//! The layout pass.

use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::geom::{Container, Rect};
use crate::layout::params::{BoundsMode, CloudParams};
use crate::layout::placed::PlacedSet;
use crate::layout::spiral::Spiral;
use crate::layout::thresholds::FontScale;
use crate::measure::TextMeasure;
use crate::model::{PlacedWord, Sentiment, TopicItem};

/// Places weighted, labeled topics in a container without overlap.
///
/// Items are processed strictly in input order: earlier items get first
/// claim on central positions, so the caller's ordering is an observable
/// part of the contract. Each call to [`compute_layout`] is an independent
/// pass over a fresh placed set; given a deterministic [`TextMeasure`], the
/// pass is a pure function of `(items, container, params)`.
///
/// Placement is best effort: a word whose spiral walk exhausts the step cap
/// without finding a free, in-bounds slot is dropped from the output rather
/// than reported as an error.
///
/// The engine performs no debouncing. A host reacting to container resizes
/// should coalesce rapid triggers (a short quiet window on the order of
/// 50ms) and discard any superseded pass's output: last request wins.
///
/// [`compute_layout`]: WordLayoutEngine::compute_layout
#[derive(Debug, Clone, Default)]
pub struct WordLayoutEngine {
    params: CloudParams,
}

impl WordLayoutEngine {
    /// Creates an engine with validated parameters.
    pub fn new(params: CloudParams) -> Result<Self> {
        Ok(Self {
            params: params.validated()?,
        })
    }

    pub fn params(&self) -> &CloudParams {
        &self.params
    }

    /// Runs one layout pass.
    ///
    /// Returns the placed words in placement order (input order minus
    /// drops). An empty item set or a container without positive area yields
    /// an empty layout, not an error; only a failing measurement surface
    /// aborts the pass.
    pub fn compute_layout(
        &self,
        items: &[TopicItem],
        container: Container,
        measure: &dyn TextMeasure,
    ) -> Result<Vec<PlacedWord>> {
        if items.is_empty() || !container.has_area() {
            return Ok(Vec::new());
        }

        let max_volume = items
            .iter()
            .map(|item| OrderedFloat(item.volume))
            .max()
            .map(|v| v.into_inner())
            .unwrap_or(0.0);
        let scale = FontScale::new(max_volume, self.params.font_buckets, self.params.font_step);

        let anchor = container.center();
        let mut placed = PlacedSet::new(self.params.x_padding, self.params.y_padding);

        for item in items {
            let font_size = scale.font_size_for(item.volume);
            let size = measure.measure(&item.label, font_size)?;

            let slot = Spiral::new(anchor, self.params.spiral_resolution, self.params.spiral_limit)
                .map(|center| Rect::centered_at(center, size))
                .find(|rect| self.in_bounds(rect, &container) && !placed.collides(*rect));

            if let Some(rect) = slot {
                placed.push(PlacedWord {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    rect,
                    font_size,
                    category: Sentiment::from_score(item.sentiment_score),
                });
            }
        }

        Ok(placed.into_words())
    }

    fn in_bounds(&self, rect: &Rect, container: &Container) -> bool {
        match self.params.bounds {
            // Right/bottom against the container's absolute origin, left/top
            // against its extent. A word may overhang on the left and top.
            BoundsMode::Legacy => {
                rect.right > container.left
                    && rect.top > container.top
                    && rect.left < container.width
                    && rect.bottom < container.height
            }
            BoundsMode::Contained => {
                rect.left >= container.left
                    && rect.top >= container.top
                    && rect.right <= container.left + container.width
                    && rect.bottom <= container.top + container.height
            }
        }
    }
}
