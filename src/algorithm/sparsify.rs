use std::num::NonZeroUsize;

use log::trace;

use crate::array::Path2D;
use crate::error::{PathError, Result};
use crate::scalar::Loop;

/// Sampling interval for [`Sparsify`]: keep every `n`-th point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stride(NonZeroUsize);

impl Stride {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Stride {
    type Error = PathError;

    fn try_from(value: usize) -> Result<Self> {
        NonZeroUsize::new(value)
            .map(Stride)
            .ok_or(PathError::Validation("stride must be at least 1".into()))
    }
}

/// Strides read back from storage are doubles; the fractional part is truncated.
impl TryFrom<f64> for Stride {
    type Error = PathError;

    fn try_from(value: f64) -> Result<Self> {
        let truncated = value.trunc();
        if !truncated.is_finite() || truncated < 1.0 {
            return Err(PathError::Validation(
                format!("stride must be at least 1, got {value}").into(),
            ));
        }
        (truncated as usize).try_into()
    }
}

/// Index-based decimation of every loop; no smoothing or distance considerations.
pub trait Sparsify {
    type Output;

    /// Create a new geometry keeping the points at indices `0, step, 2 * step, ...` of each loop.
    ///
    /// A loop that was closed stays closed: if its decimated points no longer end where they
    /// start, the first point is appended again.
    ///
    /// # Errors
    ///
    /// - if `step` is zero
    /// - if any loop would keep fewer than two points; nothing is returned in that case
    fn sparsified(&self, step: usize) -> Result<Self::Output>;
}

fn decimate(ring: Loop<'_>, step: usize) -> (Vec<f64>, Vec<f64>) {
    let x = ring.x().iter().copied().step_by(step).collect();
    let y = ring.y().iter().copied().step_by(step).collect();
    (x, y)
}

impl Sparsify for Path2D {
    type Output = Path2D;

    fn sparsified(&self, step: usize) -> Result<Path2D> {
        let step = Stride::try_from(step)?.get();
        let mut output =
            Path2D::with_capacity(self.packed_len() / step + 2 * self.number_of_loops());

        for (index, ring) in self.loops().enumerate() {
            let (mut x, mut y) = decimate(ring, step);
            if x.len() < 2 {
                return Err(PathError::Validation(
                    format!(
                        "loop {index}: a valid path requires at least two points, \
                         {} points with stride {step} keeps {}",
                        ring.num_coords(),
                        x.len()
                    )
                    .into(),
                ));
            }

            let reclose = ring.is_closed() && !Loop::new_unchecked(&x, &y).is_closed();
            if reclose {
                x.push(x[0]);
                y.push(y[0]);
            }
            trace!(
                "sparsified loop {index}: {} -> {} points (reclosed: {reclose})",
                ring.num_coords(),
                x.len()
            );

            output.add_loop(&x, &y)?;
        }

        Ok(output)
    }
}
