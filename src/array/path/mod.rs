//! Contains [`Path2D`], an ordered collection of loops in the packed layout.

pub use array::Path2D;
pub use iterator::{LoopIter, LoopOffsetIter, SubpathIter};

mod array;
mod conversion;
pub mod iterator;
