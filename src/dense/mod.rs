//! Dense multi-dimensional array types.
//!
//! Provides `Dense2D` (row-major two-axis container) and `Dense3D` (three
//! axes, built compositionally from `Dense2D` slabs). Both are plain value
//! types: `Clone` performs a deep copy, all shape and index checks are
//! runtime preconditions, and extracted slices are snapshots rather than
//! live views.
pub mod array2d;
pub mod array3d;

pub use array2d::Dense2D;
pub use array3d::Dense3D;
