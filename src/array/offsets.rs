//! Contains [`LoopOffset`] and the header scan that locates every loop inside packed buffers.
//!
//! A packed buffer is a concatenation of blocks. Each block starts with a header slot whose `y`
//! value is the number of points that follow and whose `x` value is a placeholder:
//!
//! ```text
//! x: [ 0  x1 ... xN  0  x1 ... xM ... ]
//! y: [ N  y1 ... yN  M  y1 ... yM ... ]
//! ```
use std::ops::Range;

use crate::error::{PathError, Result};

/// Value written into the `x` channel of every header slot.
pub const HEADER_PLACEHOLDER: f64 = 0.0;

/// Location of one loop's coordinates inside the packed buffers, header slot excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopOffset {
    /// Index of the first coordinate (one past the header slot).
    pub start: usize,
    /// Number of coordinates in the loop.
    pub length: usize,
}

impl LoopOffset {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Index of the header slot describing this loop, or `None` if `start` leaves no room for
    /// one.
    #[inline]
    pub fn header(&self) -> Option<usize> {
        self.start.checked_sub(1)
    }

    /// One past the last coordinate of this loop.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

pub(crate) fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(PathError::Validation(
            format!(
                "x and y arrays must have the same length (got {} and {})",
                x.len(),
                y.len()
            )
            .into(),
        ));
    }
    Ok(())
}

/// Read the loop length stored in the header slot at `pos`.
///
/// # Errors
///
/// - if the stored value is not a finite, strictly positive integer
pub(crate) fn read_header(y: &[f64], pos: usize) -> Result<usize> {
    let value = y[pos];
    if !(value.is_finite() && value >= 1.0 && value.fract() == 0.0) {
        return Err(PathError::Format(format!(
            "header at index {pos} holds {value}, expected a positive integer length"
        )));
    }
    Ok(value as usize)
}

/// Fallible, lazy walk over the header chain of a packed `y` channel.
///
/// Yields one [`LoopOffset`] per block, in storage order. The walk stops after the first error.
#[derive(Debug, Clone)]
pub struct HeaderScan<'a> {
    y: &'a [f64],
    pos: usize,
}

impl<'a> HeaderScan<'a> {
    #[inline]
    pub fn new(y: &'a [f64]) -> Self {
        Self { y, pos: 0 }
    }

    fn step(&mut self) -> Result<LoopOffset> {
        let length = read_header(self.y, self.pos)?;
        let start = self.pos + 1;
        let remaining = self.y.len() - start;
        if length > remaining {
            return Err(PathError::Format(format!(
                "header at index {} declares {length} points but only {remaining} remain",
                self.pos
            )));
        }
        let offset = LoopOffset::new(start, length);
        self.pos = offset.end();
        Ok(offset)
    }
}

impl<'a> Iterator for HeaderScan<'a> {
    type Item = Result<LoopOffset>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.y.len() {
            return None;
        }
        let item = self.step();
        if item.is_err() {
            self.pos = self.y.len();
        }
        Some(item)
    }
}

/// Compute the `(start, length)` pair of every loop in a packed buffer.
///
/// # Errors
///
/// - if `x` and `y` have different lengths
/// - if any header is not a positive integer
/// - if the blocks do not end exactly at the end of the buffers
pub fn scan_offsets(x: &[f64], y: &[f64]) -> Result<Vec<LoopOffset>> {
    check_lengths(x, y)?;
    HeaderScan::new(y).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scans_two_blocks() {
        let x = [0., 1., 2., 0., 5.];
        let y = [2., 1., 2., 1., 5.];
        let offsets = scan_offsets(&x, &y).unwrap();
        assert_eq!(offsets, vec![LoopOffset::new(1, 2), LoopOffset::new(4, 1)]);
        assert_eq!(offsets[1].header(), Some(3));
        assert_eq!(offsets[0].range(), 1..3);
    }

    #[test]
    fn offset_at_buffer_start_has_no_header() {
        assert_eq!(LoopOffset::new(0, 3).header(), None);
        assert_eq!(LoopOffset::new(1, 3).header(), Some(0));
    }

    #[test]
    fn empty_buffer_has_no_loops() {
        assert!(scan_offsets(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_positive_headers() {
        for bad in [0., -3., 1.5, f64::NAN, f64::INFINITY] {
            let err = scan_offsets(&[0., 1.], &[bad, 1.]).unwrap_err();
            assert!(matches!(err, PathError::Format(_)), "{bad} was accepted");
        }
    }

    #[test]
    fn rejects_overrun() {
        let err = scan_offsets(&[0., 1., 2.], &[3., 1., 2.]).unwrap_err();
        assert!(matches!(err, PathError::Format(_)));
    }

    #[test]
    fn scan_stops_after_error() {
        let y = [0., 1., 1., 1.];
        let mut scan = HeaderScan::new(&y);
        assert!(scan.next().unwrap().is_err());
        assert!(scan.next().is_none());
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = scan_offsets(&[0., 1.], &[1.]).unwrap_err();
        assert!(matches!(err, PathError::Validation(_)));
    }
}
