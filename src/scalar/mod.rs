//! Contains the loop scalars: [`Loop`], a view onto one loop of a [`Path2D`][crate::array::Path2D],
//! and [`OwnedLoop`], its owned counterpart.

pub use path_loop::{Loop, OwnedLoop};

pub mod path_loop;
