//! Text measurement capability.
//!
//! The engine never assumes fixed character widths itself: hosts with a real
//! rendering surface implement [`TextMeasure`] on top of it, while tests and
//! the CLI use the deterministic [`CharGridMeasure`] stub.

use crate::error::Result;
use crate::geom::Size;

/// Measures the rendered extent of a label at a font size, in the same units
/// as the layout container.
///
/// Implementations must be deterministic (same label and font size, same
/// size) for the engine's pure-function guarantees to hold. A failing
/// surface should return [`crate::CloudError::Measurement`]; the engine
/// aborts the pass and surfaces it to the caller.
pub trait TextMeasure {
    fn measure(&self, label: &str, font_size: f64) -> Result<Size>;
}

/// Deterministic measurement stub: every character advances a fixed fraction
/// of an em, lines are a fixed fraction of an em tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharGridMeasure {
    /// Horizontal advance per character, relative to the font size.
    pub char_width: f64,
    /// Line height, relative to the font size.
    pub line_height: f64,
}

impl Default for CharGridMeasure {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            line_height: 1.2,
        }
    }
}

impl CharGridMeasure {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl TextMeasure for CharGridMeasure {
    fn measure(&self, label: &str, font_size: f64) -> Result<Size> {
        let chars = label.chars().count() as f64;
        Ok(Size::new(
            chars * self.char_width * font_size,
            self.line_height * font_size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_grid_scales_with_font_size() {
        let measure = CharGridMeasure::default();
        let small = measure.measure("abc", 12.0).unwrap();
        let large = measure.measure("abc", 24.0).unwrap();
        assert_eq!(small.width, 3.0 * 0.6 * 12.0);
        assert_eq!(small.height, 1.2 * 12.0);
        assert_eq!(large.width, small.width * 2.0);
    }

    #[test]
    fn char_grid_counts_chars_not_bytes() {
        let measure = CharGridMeasure::default();
        let ascii = measure.measure("aaaa", 10.0).unwrap();
        let accented = measure.measure("ääää", 10.0).unwrap();
        assert_eq!(ascii.width, accented.width);
    }
}
