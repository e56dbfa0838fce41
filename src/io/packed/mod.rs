//! Encode and decode the packed multi-loop layout.
//!
//! Layout is:
//!   | `x = [ 0 x1 .... xN 0 x1 ... xM ...]`
//!   | `y = [ N y1 .... yN M y1 ... yM ...]`
//!
//! This allows multiple loops to be stored in one pair of arrays. The `x` value of every header
//! is a placeholder and is always written as `0`.

pub use decode::decode;
pub use encode::{encode, from_single_loop};
pub(crate) use encode::push_block;

mod decode;
mod encode;
