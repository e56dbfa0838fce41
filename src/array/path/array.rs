use std::fmt;

use geo::Coord;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::array::offsets::{check_lengths, scan_offsets, LoopOffset};
use crate::error::{PathError, Result};
use crate::io::packed;
use crate::scalar::Loop;

/// An ordered collection of loops stored in the packed layout.
///
/// The `x` and `y` buffers are a concatenation of blocks, each made of a header slot `(0, n)`
/// followed by the `n` coordinates of one loop. Every constructor validates the buffers, so a
/// `Path2D` always decomposes exactly into whole blocks.
///
/// Loops can be appended with [`Path2D::add_loop`] and read back with [`Path2D::loops`] or by
/// iterating the path, which yields single-loop sub-paths.
///
/// With serde, a path serializes as its packed buffers. Human-readable formats such as JSON
/// cannot express NaN or infinite values, so serializing a path holding one fails there.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "PackedArrays")]
pub struct Path2D {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Serialized form of a [`Path2D`]: its packed buffers, as written to storage.
#[derive(Deserialize)]
struct PackedArrays {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Serialize)]
struct PackedSlices<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl TryFrom<PackedArrays> for Path2D {
    type Error = PathError;

    fn try_from(value: PackedArrays) -> Result<Self> {
        Self::from_packed_arrays(value.x, value.y)
    }
}

impl Serialize for Path2D {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            if let Some(value) = self.x.iter().chain(&self.y).find(|v| !v.is_finite()) {
                return Err(S::Error::custom(format!(
                    "cannot serialize non-finite coordinate {value}"
                )));
            }
        }
        PackedSlices {
            x: &self.x,
            y: &self.y,
        }
        .serialize(serializer)
    }
}

impl Path2D {
    /// Create an empty path with no loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` packed slots (headers included).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Create a path from either raw points or already-packed buffers.
    ///
    /// If `points_only` is `true`, `x` and `y` are the points of a single loop and the header is
    /// computed. Otherwise they are assumed to be in the packed layout (for example, read back
    /// from storage) and are accepted as-is once they decode cleanly.
    ///
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    /// - if `points_only` is set and there are no points
    /// - if `points_only` is unset and the buffers are not valid packed data
    pub fn construct(x: &[f64], y: &[f64], points_only: bool) -> Result<Self> {
        if points_only {
            Self::from_single_loop(x, y)
        } else {
            Self::from_packed_arrays(x.to_vec(), y.to_vec())
        }
    }

    /// Create a single-loop path from its points.
    ///
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    /// - if there are no points
    pub fn from_single_loop(x: &[f64], y: &[f64]) -> Result<Self> {
        let (x, y) = packed::from_single_loop(x, y)?;
        Ok(Self { x, y })
    }

    /// Create a path from a sequence of loops, each given as `(x, y)` slices.
    ///
    /// # Errors
    ///
    /// - if any loop has mismatched lengths or no points
    pub fn try_from_loops<'a, I>(loops: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a [f64], &'a [f64])>,
    {
        let (x, y) = packed::encode(loops)?;
        Ok(Self { x, y })
    }

    /// Wrap packed buffers, trusting their embedded headers once they validate.
    ///
    /// The buffers are kept exactly as given, header placeholders included.
    ///
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    /// - if any header is not a positive integer
    /// - if the blocks do not end exactly at the end of the buffers
    pub fn from_packed_arrays(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        scan_offsets(&x, &y)?;
        Ok(Self { x, y })
    }

    /// Build from a single loop that is known to be non-empty with matching lengths.
    pub(crate) fn from_loop_unchecked(ring: Loop<'_>) -> Self {
        let mut path = Self::with_capacity(ring.num_coords() + 1);
        packed::push_block(&mut path.x, &mut path.y, ring.x(), ring.y());
        path
    }

    /// The packed buffers, headers included, ready to hand to storage.
    pub fn to_packed_arrays(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    pub fn into_packed_arrays(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }

    /// Number of packed slots, headers included.
    pub fn packed_len(&self) -> usize {
        self.x.len()
    }

    /// Number of loops, computed from the headers.
    pub fn number_of_loops(&self) -> usize {
        self.offsets_iter().count()
    }

    /// `(start, length)` of every loop, header slots excluded.
    pub fn offsets(&self) -> Vec<LoopOffset> {
        self.offsets_iter().collect()
    }

    /// Total number of points across all loops, header slots excluded.
    pub fn num_coords(&self) -> usize {
        self.packed_len() - self.number_of_loops()
    }

    /// Whether this path has no loops.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Append one loop.
    ///
    /// An empty loop is ignored, so a zero-length header can never be written.
    ///
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    pub fn add_loop(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_lengths(x, y)?;
        if x.is_empty() {
            return Ok(());
        }
        packed::push_block(&mut self.x, &mut self.y, x, y);
        Ok(())
    }

    fn single_loop(&self) -> Result<Loop<'_>> {
        let mut loops = self.loops();
        match (loops.next(), loops.next()) {
            (Some(ring), None) => Ok(ring),
            _ => Err(PathError::State(
                format!(
                    "point access is only available for single-loop paths, this path has {} loops",
                    self.number_of_loops()
                )
                .into(),
            )),
        }
    }

    /// Points of a single-loop path.
    ///
    /// Iterate the path first if it has several loops; every sub-path is a single-loop path.
    ///
    /// # Errors
    ///
    /// - if the path does not have exactly one loop
    pub fn point_list(&self) -> Result<Vec<Coord>> {
        Ok(self.single_loop()?.coords().collect())
    }

    /// `x` and `y` coordinates of a single-loop path, header slot excluded.
    ///
    /// # Errors
    ///
    /// - if the path does not have exactly one loop
    pub fn point_arrays(&self) -> Result<(&[f64], &[f64])> {
        let ring = self.single_loop()?;
        Ok((ring.x(), ring.y()))
    }
}

impl fmt::Display for Path2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path2D {{")?;
        for (idx, ring) in self.loops().enumerate() {
            writeln!(f, "  Subpath {idx} ({} elements)", ring.num_coords())?;
            for c in ring.coords() {
                writeln!(f, "    ({}, {})", c.x, c.y)?;
            }
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::path::{scaled, square_path, SQUARE_X, SQUARE_Y};

    #[test]
    fn construct_points_only() {
        let path = Path2D::construct(&SQUARE_X, &SQUARE_Y, true).unwrap();
        assert_eq!(path.number_of_loops(), 1);
        assert_eq!(path.num_coords(), 5);
        assert_eq!(path.packed_len(), 6);
    }

    #[test]
    fn construct_packed_is_identity() {
        let packed_x = [7., 1., 2., -1., 5.];
        let packed_y = [2., 1., 2., 1., 4.];
        let path = Path2D::construct(&packed_x, &packed_y, false).unwrap();
        let (x, y) = path.to_packed_arrays();
        // header placeholders are kept as read
        assert_eq!(x, &packed_x);
        assert_eq!(y, &packed_y);
        assert_eq!(path.number_of_loops(), 2);
    }

    #[test]
    fn construct_packed_rejects_bad_header() {
        let err = Path2D::construct(&[0., 1.], &[3., 1.], false).unwrap_err();
        assert!(matches!(err, PathError::Format(_)));
    }

    #[test]
    fn add_loop() {
        let mut path = square_path();
        let (x, y) = scaled(0.5);
        path.add_loop(&x, &y).unwrap();
        assert_eq!(path.number_of_loops(), 2);
        assert_eq!(path.num_coords(), 10);
        assert_eq!(
            path.offsets(),
            vec![LoopOffset::new(1, 5), LoopOffset::new(7, 5)]
        );
    }

    #[test]
    fn add_empty_loop_is_noop() {
        let mut path = square_path();
        path.add_loop(&[], &[]).unwrap();
        assert_eq!(path, square_path());
        assert_eq!(path.number_of_loops(), 1);
        assert_eq!(path.num_coords(), 5);
    }

    #[test]
    fn add_loop_rejects_mismatch() {
        let mut path = square_path();
        assert!(path.add_loop(&[1., 2.], &[1.]).is_err());
        assert_eq!(path, square_path());
    }

    #[test]
    fn grow_from_empty() {
        let mut path = Path2D::new();
        assert!(path.is_empty());
        assert_eq!(path.number_of_loops(), 0);
        path.add_loop(&[3.], &[4.]).unwrap();
        assert_eq!(path.to_packed_arrays(), (&[0., 3.][..], &[1., 4.][..]));
    }

    #[test]
    fn point_access_single_loop() {
        let path = square_path();
        let (x, y) = path.point_arrays().unwrap();
        assert_eq!(x, &SQUARE_X);
        assert_eq!(y, &SQUARE_Y);
        let points = path.point_list().unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[1], Coord { x: 2., y: 1. });
    }

    #[test]
    fn point_access_multi_loop_is_state_error() {
        let mut path = square_path();
        path.add_loop(&SQUARE_X, &SQUARE_Y).unwrap();
        assert!(matches!(path.point_list(), Err(PathError::State(_))));
        assert!(matches!(path.point_arrays(), Err(PathError::State(_))));
        assert!(matches!(Path2D::new().point_list(), Err(PathError::State(_))));
    }

    #[test]
    fn display() {
        let path = Path2D::from_single_loop(&[1., 2.], &[3., 4.]).unwrap();
        assert_eq!(
            path.to_string(),
            "Path2D {\n  Subpath 0 (2 elements)\n    (1, 3)\n    (2, 4)\n}\n"
        );
    }

    #[test]
    fn serde_roundtrip_validates() {
        let path = square_path();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Path2D>(&json).unwrap(), path);

        let bad = r#"{"x": [0.0, 1.0], "y": [0.0, 1.0]}"#;
        assert!(serde_json::from_str::<Path2D>(bad).is_err());
    }

    #[test]
    fn json_rejects_non_finite_coordinates() {
        let path = Path2D::from_single_loop(&[0., 1., f64::NAN], &[0., 1., 2.]).unwrap();
        assert!(serde_json::to_string(&path).is_err());

        let path = Path2D::from_single_loop(&[0., 1.], &[0., f64::INFINITY]).unwrap();
        assert!(serde_json::to_string(&path).is_err());
    }
}
