//! The outward Archimedean spiral walked for candidate positions.

use crate::geom::Point;

/// Iterator over candidate centers on an Archimedean spiral.
///
/// Step `i` sits at angle `resolution * i` with radius `1 + angle`, so the
/// walk starts just off the anchor and grows outward. The step cap bounds
/// the search for words that never find a slot.
#[derive(Debug, Clone)]
pub struct Spiral {
    anchor: Point,
    resolution: f64,
    limit: usize,
    step: usize,
}

impl Spiral {
    pub fn new(anchor: Point, resolution: f64, limit: usize) -> Self {
        Self {
            anchor,
            resolution,
            limit,
            step: 0,
        }
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step >= self.limit {
            return None;
        }
        let angle = self.resolution * self.step as f64;
        self.step += 1;
        let radius = 1.0 + angle;
        Some((
            self.anchor.0 + radius * angle.cos(),
            self.anchor.1 + radius * angle.sin(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.step;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_sits_one_unit_right_of_anchor() {
        let mut spiral = Spiral::new((100.0, 100.0), 1.0, 10);
        assert_eq!(spiral.next(), Some((101.0, 100.0)));
    }

    #[test]
    fn yields_exactly_limit_points() {
        let spiral = Spiral::new((0.0, 0.0), 1.0, 3600);
        assert_eq!(spiral.count(), 3600);
    }

    #[test]
    fn radius_grows_monotonically() {
        let anchor = (0.0, 0.0);
        let radii: Vec<f64> = Spiral::new(anchor, 1.0, 50)
            .map(|(x, y)| (x * x + y * y).sqrt())
            .collect();
        for pair in radii.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
