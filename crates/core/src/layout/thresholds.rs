//! Volume-to-font-size bucketing.
//!
//! The observed volume range `[0, max_volume]` is split into equal-width
//! buckets; bucket `i` (1-based) maps to font size `i * font_step`. A volume
//! lands in the first bucket with `min < volume <= max`, so a boundary value
//! falls to the lower bucket.

/// One volume band and the font size it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeThreshold {
    pub font_size: f64,
    pub min: f64,
    pub max: f64,
}

/// The full set of thresholds derived from one item set's maximum volume.
#[derive(Debug, Clone, PartialEq)]
pub struct FontScale {
    thresholds: Vec<FontSizeThreshold>,
}

impl FontScale {
    /// Builds `buckets` equal-width bands over `[0, max_volume]`.
    pub fn new(max_volume: f64, buckets: usize, font_step: f64) -> Self {
        let band = max_volume / buckets as f64;
        let thresholds = (1..=buckets)
            .map(|i| FontSizeThreshold {
                font_size: i as f64 * font_step,
                min: band * (i as f64 - 1.0),
                max: band * i as f64,
            })
            .collect();
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[FontSizeThreshold] {
        &self.thresholds
    }

    /// The bucketed font size for a volume, if any bucket matches.
    ///
    /// A volume of zero matches no bucket (every test is `volume > min`), as
    /// does any volume when the bands are degenerate (all-zero volumes).
    pub fn lookup(&self, volume: f64) -> Option<f64> {
        self.thresholds
            .iter()
            .find(|t| volume > t.min && volume <= t.max)
            .map(|t| t.font_size)
    }

    /// Like [`lookup`](Self::lookup), but clamps unmatched volumes to the
    /// smallest bucket's font size so no word is left unsized.
    pub fn font_size_for(&self, volume: f64) -> f64 {
        self.lookup(volume).unwrap_or_else(|| self.smallest())
    }

    fn smallest(&self) -> f64 {
        // Non-empty by construction: CloudParams validation rejects zero buckets.
        self.thresholds.first().map(|t| t.font_size).unwrap_or(0.0)
    }
}
