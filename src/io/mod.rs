//! Reader and writer implementations for packed paths.

pub use options::{PathKind, WriteOptions};
pub use store::{bbox_slot, read_kind, read_path, type_slot, write_path};

mod options;
pub mod packed;
mod store;
