use geo::{coord, Rect};

use crate::array::Path2D;
use crate::scalar::Loop;

/// Running min/max over the coordinates of a path. NaN coordinates are skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    pub fn add_xy(&mut self, x: f64, y: f64) {
        if x < self.minx {
            self.minx = x;
        }
        if y < self.miny {
            self.miny = y;
        }
        if x > self.maxx {
            self.maxx = x;
        }
        if y > self.maxy {
            self.maxy = y;
        }
    }

    pub fn add_loop(&mut self, ring: &Loop<'_>) {
        ring.x()
            .iter()
            .zip(ring.y())
            .for_each(|(&x, &y)| self.add_xy(x, y));
    }

    /// Whether no coordinate has been added yet.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }

    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::new(
            coord! { x: self.minx, y: self.miny },
            coord! { x: self.maxx, y: self.maxy },
        ))
    }

    /// `[xmin, xmax, ymin, ymax]`, the layout of a `_bbox2D` slot.
    ///
    /// An empty rectangle is reported as unbounded, `[-inf, inf, -inf, inf]`.
    pub fn bbox_values(&self) -> [f64; 4] {
        if self.is_empty() {
            return [
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
            ];
        }
        [self.minx, self.maxx, self.miny, self.maxy]
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the total bounds (extent) of the input.
pub trait TotalBounds {
    fn total_bounds(&self) -> BoundingRect;
}

impl TotalBounds for Path2D {
    /// Header slots are not coordinates and never contribute to the bounds.
    fn total_bounds(&self) -> BoundingRect {
        let mut bounds = BoundingRect::new();
        for ring in self.loops() {
            bounds.add_loop(&ring);
        }
        bounds
    }
}

impl TotalBounds for Loop<'_> {
    fn total_bounds(&self) -> BoundingRect {
        let mut bounds = BoundingRect::new();
        bounds.add_loop(self);
        bounds
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::path::two_squares;

    #[test]
    fn excludes_headers() {
        // the header slots hold (0, 5); they must not pull the box towards the origin
        let bounds = two_squares().total_bounds();
        assert_eq!(bounds.bbox_values(), [0.5, 2., 0.5, 2.]);
        let rect = bounds.to_rect().unwrap();
        assert_eq!(rect.min(), coord! { x: 0.5, y: 0.5 });
        assert_eq!(rect.max(), coord! { x: 2., y: 2. });
    }

    #[test]
    fn empty_is_unbounded() {
        let bounds = Path2D::new().total_bounds();
        assert!(bounds.is_empty());
        assert_eq!(bounds.to_rect(), None);
        assert_eq!(
            bounds.bbox_values(),
            [f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY]
        );
    }

    #[test]
    fn skips_nan() {
        let path = Path2D::from_single_loop(&[1., f64::NAN, 3.], &[4., 5., f64::NAN]).unwrap();
        assert_eq!(path.total_bounds().bbox_values(), [1., 3., 4., 5.]);
    }
}
