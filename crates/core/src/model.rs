//! Topic input records and placed-word output records.

use crate::geom::Rect;

/// Score above which a topic is classed as positive.
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 60.0;

/// Score below which a topic is classed as negative.
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = 40.0;

/// One topic to be placed in the cloud. Immutable for the duration of a
/// layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicItem {
    /// Unique identifier, echoed on the output and used for selection.
    pub id: String,
    /// Display text; its measured extent determines the word's box.
    pub label: String,
    /// Non-negative weight driving font-size bucketing.
    pub volume: f64,
    /// Sentiment score driving the category.
    pub sentiment_score: f64,
}

impl TopicItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        volume: f64,
        sentiment_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            volume,
            sentiment_score,
        }
    }
}

/// Sentiment category of a topic.
///
/// The score bounds are fixed: above 60 is positive, below 40 is negative,
/// everything in between (both boundaries included) is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < SENTIMENT_NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// A successfully placed word: the engine's output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub id: String,
    pub label: String,
    /// Final position in container coordinates.
    pub rect: Rect,
    pub font_size: f64,
    pub category: Sentiment,
}

/// Tracks which placed word, if any, is currently selected.
///
/// Selection is a rendering concern: it never feeds back into layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, word: &PlacedWord) -> bool {
        self.selected.as_deref() == Some(word.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_boundaries() {
        assert_eq!(Sentiment::from_score(61.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(60.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(40.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(39.0), Sentiment::Negative);
    }

    #[test]
    fn selection_matches_by_id() {
        let word = PlacedWord {
            id: "t1".into(),
            label: "topic".into(),
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            font_size: 12.0,
            category: Sentiment::Neutral,
        };

        let mut selection = Selection::none();
        assert!(!selection.is_selected(&word));

        selection.select("t1");
        assert!(selection.is_selected(&word));
        assert_eq!(selection.selected_id(), Some("t1"));

        selection.clear();
        assert!(!selection.is_selected(&word));
    }
}
