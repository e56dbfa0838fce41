use crate::array::offsets::scan_offsets;
use crate::error::Result;
use crate::scalar::OwnedLoop;

/// Unpack flat `x` and `y` buffers into their loops, in storage order.
///
/// Header slots are consumed; only the `y` value of a header is interpreted.
///
/// # Errors
///
/// - if `x` and `y` have different lengths
/// - if any header length is not a positive integer
/// - if the blocks do not end exactly at the end of the buffers
pub fn decode(x: &[f64], y: &[f64]) -> Result<Vec<OwnedLoop>> {
    let offsets = scan_offsets(x, y)?;
    Ok(offsets
        .into_iter()
        .map(|offset| {
            OwnedLoop::new_unchecked(x[offset.range()].to_vec(), y[offset.range()].to_vec())
        })
        .collect())
}
