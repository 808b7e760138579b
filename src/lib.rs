//! dense-containers: structured, bounds-checked, value-semantics collections.
//!
//! This crate provides a dense multi-dimensional array family (`Dense2D`,
//! `Dense3D`) and two linear sequence types (`Deque`, `Stack`) for callers
//! who need grid/volume data or two-ended buffers without a larger
//! framework. The element type is fully opaque: no ordering, equality,
//! hashing, or arithmetic is required of it.
//!
//! Every operation either satisfies all of its preconditions and completes
//! fully, or fails with [`PreconditionViolation`] before any state change;
//! there is no partial mutation and no recoverable error path. A violation
//! indicates a caller bug; validate inputs up front if the error path must
//! be avoided.
pub mod dense;
pub mod error;
pub mod seq;

pub use dense::{Dense2D, Dense3D};
pub use error::{Axis, PreconditionViolation, Result};
pub use seq::{Deque, Stack};
