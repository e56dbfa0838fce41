use std::iter;

use crate::array::offsets::{check_lengths, HEADER_PLACEHOLDER};
use crate::error::{PathError, Result};

/// Append one block (header slot followed by the coordinates) to packed buffers.
///
/// The caller has already checked that the loop is non-empty and that both channels have the
/// same length.
pub(crate) fn push_block(x_out: &mut Vec<f64>, y_out: &mut Vec<f64>, x: &[f64], y: &[f64]) {
    x_out.reserve(x.len() + 1);
    y_out.reserve(y.len() + 1);
    x_out.push(HEADER_PLACEHOLDER);
    y_out.push(x.len() as f64);
    x_out.extend_from_slice(x);
    y_out.extend_from_slice(y);
}

fn check_loop(x: &[f64], y: &[f64]) -> Result<()> {
    check_lengths(x, y)?;
    if x.is_empty() {
        return Err(PathError::Validation(
            "a loop must contain at least one point".into(),
        ));
    }
    Ok(())
}

/// Pack a sequence of loops into flat `x` and `y` buffers.
///
/// Each loop becomes a header slot `(0, n)` followed by its `n` coordinates, in input order.
///
/// ```
/// use packed_path::io::packed::encode;
///
/// let square = (&[0., 1., 1., 0.][..], &[0., 0., 1., 1.][..]);
/// let point = (&[5.][..], &[6.][..]);
/// let (x, y) = encode([square, point]).unwrap();
/// assert_eq!(x, vec![0., 0., 1., 1., 0., 0., 5.]);
/// assert_eq!(y, vec![4., 0., 0., 1., 1., 1., 6.]);
/// ```
///
/// # Errors
///
/// - if a loop has mismatched `x` and `y` lengths
/// - if a loop has no coordinates
pub fn encode<'a, I>(loops: I) -> Result<(Vec<f64>, Vec<f64>)>
where
    I: IntoIterator<Item = (&'a [f64], &'a [f64])>,
{
    let mut x_out = Vec::new();
    let mut y_out = Vec::new();
    for (index, (x, y)) in loops.into_iter().enumerate() {
        check_loop(x, y).map_err(|err| match err {
            PathError::Validation(msg) => PathError::Validation(format!("loop {index}: {msg}").into()),
            other => other,
        })?;
        push_block(&mut x_out, &mut y_out, x, y);
    }
    Ok((x_out, y_out))
}

/// Pack a single loop.
///
/// # Errors
///
/// - if `x` and `y` have different lengths
/// - if the loop has no coordinates
pub fn from_single_loop(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    encode(iter::once((x, y)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_loop_gets_header() {
        let (x, y) = from_single_loop(&[1., 2., 2., 1., 1.], &[1., 1., 2., 2., 1.]).unwrap();
        assert_eq!(x, vec![0., 1., 2., 2., 1., 1.]);
        assert_eq!(y, vec![5., 1., 1., 2., 2., 1.]);
    }

    #[test]
    fn no_loops_is_empty() {
        let (x, y) = encode(iter::empty()).unwrap();
        assert!(x.is_empty() && y.is_empty());
    }

    #[test]
    fn rejects_empty_loop() {
        let err = encode([(&[1.][..], &[1.][..]), (&[][..], &[][..])]).unwrap_err();
        match err {
            PathError::Validation(msg) => assert!(msg.starts_with("loop 1")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_mismatched_loop() {
        let err = from_single_loop(&[1., 2.], &[1.]).unwrap_err();
        assert!(matches!(err, PathError::Validation(_)));
    }
}
