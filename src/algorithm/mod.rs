//! Algorithms implemented on and returning packed paths.

pub use sparsify::{Sparsify, Stride};
pub use total_bounds::{BoundingRect, TotalBounds};

pub mod sparsify;
pub mod total_bounds;
