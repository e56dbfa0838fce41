//! The packed path container and the offset bookkeeping it is built on.

pub use offsets::{scan_offsets, HeaderScan, LoopOffset, HEADER_PLACEHOLDER};
pub use path::{LoopIter, LoopOffsetIter, Path2D, SubpathIter};

use serde::{Deserialize, Serialize};

pub mod offsets;
pub mod path;

/// The Arrow layout used when exporting packed buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordType {
    /// Fixed-size list of `[x, y]` pairs.
    Interleaved,

    /// Struct with separate `x` and `y` Float64 children.
    #[default]
    Separated,
}
