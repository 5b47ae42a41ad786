//! Geometric primitives shared by the layout engine.
//!
//! Positions are plain numeric fields throughout; the overlap predicate
//! applies symmetric per-axis padding so words keep a visual gutter even
//! when their boxes are tight.

/// A point as (x, y).
pub type Point = (f64, f64);

/// A measured box size in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle with absolute edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle of the given size centered on a point.
    pub fn centered_at(center: Point, size: Size) -> Self {
        let left = center.0 - size.width / 2.0;
        let top = center.1 - size.height / 2.0;
        Self {
            left,
            top,
            right: left + size.width,
            bottom: top + size.height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Grows the rectangle by `dx` on each horizontal side and `dy` on each
    /// vertical side.
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left - dx,
            top: self.top - dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// True when the two rectangles, each inflated by the given paddings, do
    /// not touch. Strict comparisons: boxes whose padded edges coincide are
    /// treated as overlapping.
    pub fn clear_of(&self, other: &Rect, x_padding: f64, y_padding: f64) -> bool {
        self.right + x_padding < other.left - x_padding
            || self.left - x_padding > other.right + x_padding
            || self.bottom + y_padding < other.top - y_padding
            || self.top - y_padding > other.bottom + y_padding
    }
}

/// The bounded area words are laid out in. Read-only for the duration of one
/// layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Container {
    /// A container of the given size with its origin at (0, 0).
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    pub fn with_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The spiral anchor: the container's center point.
    pub fn center(&self) -> Point {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_has_requested_size() {
        let r = Rect::centered_at((100.0, 50.0), Size::new(40.0, 20.0));
        assert_eq!(r.left, 80.0);
        assert_eq!(r.top, 40.0);
        assert_eq!(r.width(), 40.0);
        assert_eq!(r.height(), 20.0);
        assert_eq!(r.center(), (100.0, 50.0));
    }

    #[test]
    fn clear_of_respects_horizontal_padding() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Gap of 4.1 > 2 * x_padding: clear.
        let b = Rect::new(14.1, 0.0, 24.0, 10.0);
        assert!(a.clear_of(&b, 2.0, 0.0));
        // Gap of exactly 4.0: padded edges coincide, counts as overlap.
        let c = Rect::new(14.0, 0.0, 24.0, 10.0);
        assert!(!a.clear_of(&c, 2.0, 0.0));
    }

    #[test]
    fn clear_of_respects_vertical_padding() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 30.5, 10.0, 40.0);
        assert!(a.clear_of(&below, 2.0, 10.0));
        let near = Rect::new(0.0, 29.5, 10.0, 40.0);
        assert!(!a.clear_of(&near, 2.0, 10.0));
    }

    #[test]
    fn zero_sized_container_has_no_area() {
        assert!(!Container::sized(0.0, 400.0).has_area());
        assert!(!Container::sized(400.0, -1.0).has_area());
        assert!(Container::sized(1.0, 1.0).has_area());
    }
}
