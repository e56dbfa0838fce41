use geo::{Coord, LineString};
use itertools::izip;

use crate::array::offsets::check_lengths;
use crate::array::Path2D;
use crate::error::Result;
use crate::scalar::OwnedLoop;

/// A borrowed view onto the coordinates of one loop, header slot excluded.
///
/// Obtained from [`Path2D::loops`]; the slices point straight into the packed buffers of the
/// path, so no coordinates are copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Loop<'a> {
    /// Construct a view over raw coordinate slices.
    ///
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    pub fn try_new(x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        check_lengths(x, y)?;
        Ok(Self { x, y })
    }

    /// Caller guarantees `x.len() == y.len()`.
    #[inline]
    pub(crate) fn new_unchecked(x: &'a [f64], y: &'a [f64]) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    #[inline]
    pub fn num_coords(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn coord(&self, i: usize) -> Option<Coord> {
        Some(Coord {
            x: *self.x.get(i)?,
            y: *self.y.get(i)?,
        })
    }

    pub fn first(&self) -> Option<Coord> {
        self.coord(0)
    }

    pub fn last(&self) -> Option<Coord> {
        self.coord(self.num_coords().checked_sub(1)?)
    }

    /// Whether the first and last coordinates are exactly equal.
    ///
    /// A loop with fewer than two coordinates is never closed.
    pub fn is_closed(&self) -> bool {
        if self.num_coords() < 2 {
            return false;
        }
        self.first() == self.last()
    }

    /// Iterate over the coordinates of this loop.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + 'a {
        izip!(self.x, self.y).map(|(&x, &y)| Coord { x, y })
    }

    pub fn to_line_string(&self) -> LineString {
        LineString::new(self.coords().collect())
    }

    /// Copy the coordinates out of the packed buffers.
    pub fn into_owned(self) -> OwnedLoop {
        OwnedLoop::new_unchecked(self.x.to_vec(), self.y.to_vec())
    }

    /// Re-wrap this loop with its own header as a self-contained single-loop path.
    ///
    /// # Errors
    ///
    /// - if the loop has no coordinates
    pub fn to_path(&self) -> Result<Path2D> {
        Path2D::from_single_loop(self.x, self.y)
    }
}

impl<'a> From<Loop<'a>> for LineString {
    fn from(value: Loop<'a>) -> Self {
        value.to_line_string()
    }
}
