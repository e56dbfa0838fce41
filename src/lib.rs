//! Packed multi-loop 2D paths.
//!
//! A [`Path2D`] is an ordered collection of loops (polylines, open or closed) stored as two flat
//! `f64` arrays. Each loop is preceded by a header slot whose `y` value is the loop's point
//! count and whose `x` value is `0`:
//!
//! ```text
//! x: [ 0  x1 ... xN  0  x1 ... xM ... ]
//! y: [ N  y1 ... yN  M  y1 ... yM ... ]
//! ```
//!
//! The packed arrays are what gets written to and read from a named-slot array store
//! ([`storage::SlotStore`]), and reading them back reproduces them exactly.
//!
//! ```
//! use packed_path::algorithm::Sparsify;
//! use packed_path::Path2D;
//!
//! let mut path = Path2D::from_single_loop(&[1., 2., 2., 1., 1.], &[1., 1., 2., 2., 1.]).unwrap();
//! path.add_loop(&[0., 10., 20.], &[0., 5., 0.]).unwrap();
//! assert_eq!(path.number_of_loops(), 2);
//!
//! let sparse = path.sparsified(2).unwrap();
//! let first = sparse.loops().next().unwrap();
//! assert_eq!(first.x(), &[1., 2., 1.]);
//! assert!(first.is_closed());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use array::Path2D;
pub use error::{PathError, Result};

pub mod algorithm;
pub mod array;
pub mod error;
pub mod execution;
pub mod io;
pub mod scalar;
pub mod storage;
