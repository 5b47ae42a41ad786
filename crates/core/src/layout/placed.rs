//! The per-pass placed set.
//!
//! Words accepted by the spiral search accumulate here and are consulted for
//! collision tests against later candidates. One set is built per layout
//! pass and dropped with it; nothing survives between passes.

use rstar::{AABB, RTree, RTreeObject};

use crate::geom::Rect;
use crate::model::PlacedWord;

/// R-tree node: padded envelope plus insertion index.
#[derive(Debug, Clone)]
struct PlacedNode {
    idx: usize,
    padded: Rect,
}

impl PartialEq for PlacedNode {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl RTreeObject for PlacedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.padded.left, self.padded.top],
            [self.padded.right, self.padded.bottom],
        )
    }
}

/// Insertion-ordered collection of placed words with a spatial index over
/// their padding-inflated boxes.
///
/// Collision semantics match the pairwise predicate
/// [`Rect::clear_of`]: both the stored and the candidate
/// rectangle are inflated by the same paddings, and touching padded edges
/// count as a collision.
pub struct PlacedSet {
    words: Vec<PlacedWord>,
    tree: RTree<PlacedNode>,
    x_padding: f64,
    y_padding: f64,
}

impl PlacedSet {
    pub fn new(x_padding: f64, y_padding: f64) -> Self {
        Self {
            words: Vec::new(),
            tree: RTree::new(),
            x_padding,
            y_padding,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True when the candidate rectangle, inflated by the paddings, touches
    /// any placed word's inflated rectangle.
    pub fn collides(&self, candidate: Rect) -> bool {
        let probe = candidate.inflate(self.x_padding, self.y_padding);
        let envelope = AABB::from_corners([probe.left, probe.top], [probe.right, probe.bottom]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .next()
            .is_some()
    }

    /// Accepts a word at its final position.
    pub fn push(&mut self, word: PlacedWord) {
        let node = PlacedNode {
            idx: self.words.len(),
            padded: word.rect.inflate(self.x_padding, self.y_padding),
        };
        self.words.push(word);
        self.tree.insert(node);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter()
    }

    /// Consumes the set, yielding the words in placement order.
    pub fn into_words(self) -> Vec<PlacedWord> {
        self.words
    }
}
