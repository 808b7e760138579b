use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{check_index, check_not_empty, check_shape, Axis, PreconditionViolation, Result};

/// Row-major two-axis container.
///
/// Storage is an ordered sequence of rows; every row has length `y_count`,
/// and `x_count` is the number of rows. `x_count == 0` is the only state in
/// which rows can be absent while `y_count` stays nonzero (removing the last
/// row keeps the established column extent).
///
/// `Clone` is a deep copy: no storage is ever shared between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense2D<T> {
    rows: Vec<Vec<T>>,
    x_count: usize,
    y_count: usize,
}

impl<T> Default for Dense2D<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dense2D<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            x_count: 0,
            y_count: 0,
        }
    }

    /// Builds a container from nested rows, inferring the extents.
    /// Fails with `RaggedInput` if the rows disagree in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let x_count = rows.len();
        let y_count = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != y_count {
                return Err(PreconditionViolation::RaggedInput {
                    row: i,
                    expected: y_count,
                    actual: row.len(),
                });
            }
        }
        Ok(Self {
            rows,
            x_count,
            y_count,
        })
    }

    pub fn x_count(&self) -> usize {
        self.x_count
    }

    pub fn y_count(&self) -> usize {
        self.y_count
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.x_count, self.y_count)
    }

    pub fn is_empty(&self) -> bool {
        self.x_count == 0 || self.y_count == 0
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Y), y, self.y_count)?;
        Ok(&self.rows[x][y])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Y), y, self.y_count)?;
        Ok(&mut self.rows[x][y])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    pub fn row(&self, x: usize) -> Result<&[T]> {
        check_index(Some(Axis::X), x, self.x_count)?;
        Ok(&self.rows[x])
    }

    /// Replaces row `x`; the replacement length must equal `y_count`.
    pub fn set_row(&mut self, x: usize, row: Vec<T>) -> Result<()> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_shape(&[self.y_count], &[row.len()])?;
        self.rows[x] = row;
        Ok(())
    }

    /// Replaces column `y`; the replacement length must equal `x_count`.
    pub fn set_col(&mut self, y: usize, col: Vec<T>) -> Result<()> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_shape(&[self.x_count], &[col.len()])?;
        for (row, value) in self.rows.iter_mut().zip(col) {
            row[y] = value;
        }
        Ok(())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    pub fn to_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Appends a row. The length must equal `y_count` unless `x_count == 0`,
    /// in which case this first row establishes `y_count`.
    pub fn push_row(&mut self, row: Vec<T>) -> Result<()> {
        if self.x_count == 0 {
            self.y_count = row.len();
        } else {
            check_shape(&[self.y_count], &[row.len()])?;
        }
        self.rows.push(row);
        self.x_count += 1;
        Ok(())
    }

    /// Appends a column. The length must equal `x_count`; pushing onto a
    /// fully empty container instead seeds `x_count`, one single-element row
    /// per value.
    pub fn push_col(&mut self, col: Vec<T>) -> Result<()> {
        if self.x_count == 0 && self.y_count == 0 {
            self.x_count = col.len();
            self.rows = col.into_iter().map(|v| vec![v]).collect();
        } else {
            check_shape(&[self.x_count], &[col.len()])?;
            for (row, value) in self.rows.iter_mut().zip(col) {
                row.push(value);
            }
        }
        self.y_count += 1;
        Ok(())
    }

    pub fn insert_row(&mut self, at: usize, row: Vec<T>) -> Result<()> {
        check_index(Some(Axis::X), at, self.x_count)?;
        check_shape(&[self.y_count], &[row.len()])?;
        self.rows.insert(at, row);
        self.x_count += 1;
        Ok(())
    }

    pub fn insert_col(&mut self, at: usize, col: Vec<T>) -> Result<()> {
        check_index(Some(Axis::Y), at, self.y_count)?;
        check_shape(&[self.x_count], &[col.len()])?;
        for (row, value) in self.rows.iter_mut().zip(col) {
            row.insert(at, value);
        }
        self.y_count += 1;
        Ok(())
    }

    pub fn remove_row(&mut self, at: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::X), at, self.x_count)?;
        self.x_count -= 1;
        Ok(self.rows.remove(at))
    }

    pub fn remove_col(&mut self, at: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::Y), at, self.y_count)?;
        self.y_count -= 1;
        Ok(self.rows.iter_mut().map(|row| row.remove(at)).collect())
    }

    pub fn pop_row(&mut self) -> Result<Vec<T>> {
        check_not_empty(self.x_count, "pop_row")?;
        self.remove_row(self.x_count - 1)
    }

    pub fn pop_col(&mut self) -> Result<Vec<T>> {
        check_not_empty(self.y_count, "pop_col")?;
        self.remove_col(self.y_count - 1)
    }

    pub fn reverse_rows(&mut self) {
        self.rows.reverse();
    }

    pub fn reverse_cols(&mut self) {
        for row in &mut self.rows {
            row.reverse();
        }
    }

    /// Exchanges the two axes, rebuilding storage so what was column `i`
    /// becomes row `i`. O(x·y); applying it twice restores the original.
    pub fn transpose(&mut self) {
        let mut flipped: Vec<Vec<T>> = (0..self.y_count)
            .map(|_| Vec::with_capacity(self.x_count))
            .collect();
        for row in self.rows.drain(..) {
            for (j, value) in row.into_iter().enumerate() {
                flipped[j].push(value);
            }
        }
        self.rows = flipped;
        mem::swap(&mut self.x_count, &mut self.y_count);
    }
}

impl<T: Clone> Dense2D<T> {
    /// An `x_count` by `y_count` container filled with copies of `elem`.
    pub fn from_elem(x_count: usize, y_count: usize, elem: T) -> Self {
        Self {
            rows: (0..x_count).map(|_| vec![elem.clone(); y_count]).collect(),
            x_count,
            y_count,
        }
    }

    /// Replicates one row across the x axis.
    pub fn from_row(x_count: usize, row: Vec<T>) -> Self {
        let y_count = row.len();
        Self {
            rows: (0..x_count).map(|_| row.clone()).collect(),
            x_count,
            y_count,
        }
    }

    /// Replicates one column across the y axis: value `i` of `col` fills
    /// row `i`.
    pub fn from_col(y_count: usize, col: Vec<T>) -> Self {
        let x_count = col.len();
        Self {
            rows: col.into_iter().map(|v| vec![v; y_count]).collect(),
            x_count,
            y_count,
        }
    }

    /// Gathers column `y` into a flat vector. O(x_count): storage is
    /// row-major, so a column has no contiguous representation.
    pub fn col(&self, y: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        Ok(self.rows.iter().map(|row| row[y].clone()).collect())
    }
}

impl<T: Clone + Zero> Dense2D<T> {
    pub fn zeros(x_count: usize, y_count: usize) -> Self {
        Self::from_elem(x_count, y_count, T::zero())
    }
}

impl<T: Clone + One> Dense2D<T> {
    pub fn ones(x_count: usize, y_count: usize) -> Self {
        Self::from_elem(x_count, y_count, T::one())
    }
}

impl<T> Index<(usize, usize)> for Dense2D<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        match self.get(x, y) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Dense2D<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(x, y) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Dense2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
