use std::error::Error;
use std::fmt;

/// One dimension of a multi-dimensional container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// The single error kind raised by every container in this crate.
///
/// A violation is reported before any mutation takes place: the failing
/// operation leaves its container in exactly the state it found it.
/// Violations indicate caller bugs, not transient conditions; there is no
/// retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionViolation {
    /// An index outside `[0, len)` for its axis. Flat (single-sequence)
    /// indices carry `axis: None`.
    IndexOutOfRange {
        axis: Option<Axis>,
        index: usize,
        len: usize,
    },
    /// An appended, inserted, or replacement row/column/line/slice whose
    /// extents disagree with the container's established extents.
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// Nested constructor input whose inner sequences disagree in length.
    RaggedInput {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A range with `start >= end` or `end > len`.
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
    /// Pop/top/front/back/remove-last on an empty structure or empty axis.
    Empty { operation: &'static str },
}

impl fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionViolation::IndexOutOfRange { axis, index, len } => match axis {
                Some(axis) => write!(
                    f,
                    "{} index {} is out of range for extent {}",
                    axis, index, len
                ),
                None => write!(f, "index {} is out of range for length {}", index, len),
            },
            PreconditionViolation::ShapeMismatch { expected, actual } => {
                write!(f, "expected shape {:?}, got {:?}", expected, actual)
            }
            PreconditionViolation::RaggedInput {
                row,
                expected,
                actual,
            } => write!(
                f,
                "ragged input: inner sequence {} has length {}, expected {}",
                row, actual, expected
            ),
            PreconditionViolation::InvalidRange { start, end, len } => write!(
                f,
                "invalid range {}..{} for length {}",
                start, end, len
            ),
            PreconditionViolation::Empty { operation } => {
                write!(f, "attempted to call {} on an empty container", operation)
            }
        }
    }
}

impl Error for PreconditionViolation {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PreconditionViolation>;

pub(crate) fn check_index(
    axis: Option<Axis>,
    index: usize,
    len: usize,
) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(PreconditionViolation::IndexOutOfRange { axis, index, len })
    }
}

pub(crate) fn check_shape(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PreconditionViolation::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        })
    }
}

pub(crate) fn check_not_empty(len: usize, operation: &'static str) -> Result<()> {
    if len > 0 {
        Ok(())
    } else {
        Err(PreconditionViolation::Empty { operation })
    }
}
