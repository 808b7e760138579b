use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::dense::Dense2D;
use crate::error::{check_index, check_not_empty, check_shape, Axis, Result};

/// Three-axis container built compositionally from [`Dense2D`] slabs.
///
/// Storage holds one slab per x coordinate. Each slab is kept *transposed*,
/// shape `(z_count, y_count)` (rows indexed by z, columns by y), so the
/// public x-slice accessor pays exactly one transpose in each direction and
/// y-/z-axis structural edits become whole-column / whole-row edits on the
/// slabs. Element `(x, y, z)` lives at `slabs[x][(z, y)]`.
///
/// Slices and lines returned by the accessors are snapshots, never live
/// aliases: writing to a returned value cannot affect the source container.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense3D<T> {
    slabs: Vec<Dense2D<T>>,
    x_count: usize,
    y_count: usize,
    z_count: usize,
}

impl<T> Default for Dense3D<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dense3D<T> {
    pub fn new() -> Self {
        Self {
            slabs: Vec::new(),
            x_count: 0,
            y_count: 0,
            z_count: 0,
        }
    }

    /// Builds a container from natural `[x][y][z]` nesting, inferring the
    /// extents. Every slab must share the same `y_count x z_count` shape.
    pub fn from_nested(nested: Vec<Vec<Vec<T>>>) -> Result<Self> {
        let x_count = nested.len();
        let mut y_count = 0;
        let mut z_count = 0;
        let mut slabs = Vec::with_capacity(x_count);
        for (x, slab_rows) in nested.into_iter().enumerate() {
            let mut slab = Dense2D::from_rows(slab_rows)?;
            if x == 0 {
                y_count = slab.x_count();
                z_count = slab.y_count();
            } else {
                check_shape(&[y_count, z_count], &[slab.x_count(), slab.y_count()])?;
            }
            slab.transpose();
            slabs.push(slab);
        }
        Ok(Self {
            slabs,
            x_count,
            y_count,
            z_count,
        })
    }

    pub fn x_count(&self) -> usize {
        self.x_count
    }

    pub fn y_count(&self) -> usize {
        self.y_count
    }

    pub fn z_count(&self) -> usize {
        self.z_count
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.x_count, self.y_count, self.z_count)
    }

    pub fn is_empty(&self) -> bool {
        self.x_count == 0 || self.y_count == 0 || self.z_count == 0
    }

    fn check_xyz(&self, x: usize, y: usize, z: usize) -> Result<()> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_index(Some(Axis::Z), z, self.z_count)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<&T> {
        self.check_xyz(x, y, z)?;
        Ok(&self.slabs[x][(z, y)])
    }

    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Result<&mut T> {
        self.check_xyz(x, y, z)?;
        Ok(&mut self.slabs[x][(z, y)])
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) -> Result<()> {
        *self.get_mut(x, y, z)? = value;
        Ok(())
    }

    /// Replaces the slice at fixed `x`; the replacement shape must be
    /// `(y_count, z_count)`. The slice is transposed into storage form.
    pub fn set_xslice(&mut self, x: usize, mut slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_shape(
            &[self.y_count, self.z_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        slice.transpose();
        self.slabs[x] = slice;
        Ok(())
    }

    /// Scatters a `(x_count, z_count)` slice into fixed `y`, one column
    /// write per slab.
    pub fn set_yslice(&mut self, y: usize, slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_shape(
            &[self.x_count, self.z_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        for (slab, col) in self.slabs.iter_mut().zip(slice.to_rows()) {
            slab.set_col(y, col)?;
        }
        Ok(())
    }

    /// Scatters a `(x_count, y_count)` slice into fixed `z`, one row write
    /// per slab.
    pub fn set_zslice(&mut self, z: usize, slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::Z), z, self.z_count)?;
        check_shape(
            &[self.x_count, self.y_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        for (slab, row) in self.slabs.iter_mut().zip(slice.to_rows()) {
            slab.set_row(z, row)?;
        }
        Ok(())
    }

    /// Replaces the line at fixed `(x, y)`, varying z; length must equal
    /// `z_count`.
    pub fn set_line_z(&mut self, x: usize, y: usize, values: Vec<T>) -> Result<()> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_shape(&[self.z_count], &[values.len()])?;
        self.slabs[x].set_col(y, values)
    }

    /// Replaces the line at fixed `(x, z)`, varying y; length must equal
    /// `y_count`.
    pub fn set_line_y(&mut self, x: usize, z: usize, values: Vec<T>) -> Result<()> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Z), z, self.z_count)?;
        check_shape(&[self.y_count], &[values.len()])?;
        self.slabs[x].set_row(z, values)
    }

    /// Replaces the line at fixed `(y, z)`, varying x; length must equal
    /// `x_count`.
    pub fn set_line_x(&mut self, y: usize, z: usize, values: Vec<T>) -> Result<()> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_index(Some(Axis::Z), z, self.z_count)?;
        check_shape(&[self.x_count], &[values.len()])?;
        for (slab, value) in self.slabs.iter_mut().zip(values) {
            slab[(z, y)] = value;
        }
        Ok(())
    }

    /// Appends a `(y_count, z_count)` slice along x. When `x_count == 0`
    /// the slice seeds `y_count` and `z_count` instead of being validated.
    pub fn push_xslice(&mut self, mut slice: Dense2D<T>) -> Result<()> {
        if self.x_count == 0 {
            log::trace!(
                "seeding extents y={} z={} from first x-slice",
                slice.x_count(),
                slice.y_count()
            );
            self.y_count = slice.x_count();
            self.z_count = slice.y_count();
        } else {
            check_shape(
                &[self.y_count, self.z_count],
                &[slice.x_count(), slice.y_count()],
            )?;
        }
        slice.transpose();
        self.slabs.push(slice);
        self.x_count += 1;
        Ok(())
    }

    /// Appends a `(x_count, z_count)` slice along y: each of its rows
    /// becomes a new column of the corresponding slab. A push onto a fully
    /// empty container seeds `x_count` and `z_count`.
    pub fn push_yslice(&mut self, slice: Dense2D<T>) -> Result<()> {
        if self.x_count == 0 && self.y_count == 0 && self.z_count == 0 {
            log::trace!(
                "seeding extents x={} z={} from first y-slice",
                slice.x_count(),
                slice.y_count()
            );
            self.x_count = slice.x_count();
            self.z_count = slice.y_count();
            for row in slice.to_rows() {
                let slab = Dense2D::from_rows(row.into_iter().map(|v| vec![v]).collect())?;
                self.slabs.push(slab);
            }
        } else {
            check_shape(
                &[self.x_count, self.z_count],
                &[slice.x_count(), slice.y_count()],
            )?;
            for (slab, col) in self.slabs.iter_mut().zip(slice.to_rows()) {
                slab.push_col(col)?;
            }
        }
        self.y_count += 1;
        Ok(())
    }

    /// Appends a `(x_count, y_count)` slice along z: each of its rows
    /// becomes a new row of the corresponding slab. A push onto a fully
    /// empty container seeds `x_count` and `y_count`.
    pub fn push_zslice(&mut self, slice: Dense2D<T>) -> Result<()> {
        if self.x_count == 0 && self.y_count == 0 && self.z_count == 0 {
            log::trace!(
                "seeding extents x={} y={} from first z-slice",
                slice.x_count(),
                slice.y_count()
            );
            self.x_count = slice.x_count();
            self.y_count = slice.y_count();
            for row in slice.to_rows() {
                self.slabs.push(Dense2D::from_rows(vec![row])?);
            }
        } else {
            check_shape(
                &[self.x_count, self.y_count],
                &[slice.x_count(), slice.y_count()],
            )?;
            for (slab, row) in self.slabs.iter_mut().zip(slice.to_rows()) {
                slab.push_row(row)?;
            }
        }
        self.z_count += 1;
        Ok(())
    }

    pub fn insert_xslice(&mut self, at: usize, mut slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::X), at, self.x_count)?;
        check_shape(
            &[self.y_count, self.z_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        slice.transpose();
        self.slabs.insert(at, slice);
        self.x_count += 1;
        Ok(())
    }

    pub fn insert_yslice(&mut self, at: usize, slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::Y), at, self.y_count)?;
        check_shape(
            &[self.x_count, self.z_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        for (slab, col) in self.slabs.iter_mut().zip(slice.to_rows()) {
            slab.insert_col(at, col)?;
        }
        self.y_count += 1;
        Ok(())
    }

    pub fn insert_zslice(&mut self, at: usize, slice: Dense2D<T>) -> Result<()> {
        check_index(Some(Axis::Z), at, self.z_count)?;
        check_shape(
            &[self.x_count, self.y_count],
            &[slice.x_count(), slice.y_count()],
        )?;
        for (slab, row) in self.slabs.iter_mut().zip(slice.to_rows()) {
            slab.insert_row(at, row)?;
        }
        self.z_count += 1;
        Ok(())
    }

    /// Removes the slice at `at` along x, returning it in its public
    /// `(y_count, z_count)` shape.
    pub fn remove_xslice(&mut self, at: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::X), at, self.x_count)?;
        self.x_count -= 1;
        let mut slab = self.slabs.remove(at);
        slab.transpose();
        Ok(slab)
    }

    /// Removes the slice at `at` along y, gathering one column from every
    /// slab into a `(x_count, z_count)` result.
    pub fn remove_yslice(&mut self, at: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::Y), at, self.y_count)?;
        self.y_count -= 1;
        let mut removed = Dense2D::new();
        for slab in &mut self.slabs {
            removed.push_row(slab.remove_col(at)?)?;
        }
        Ok(removed)
    }

    /// Removes the slice at `at` along z, gathering one row from every slab
    /// into a `(x_count, y_count)` result.
    pub fn remove_zslice(&mut self, at: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::Z), at, self.z_count)?;
        self.z_count -= 1;
        let mut removed = Dense2D::new();
        for slab in &mut self.slabs {
            removed.push_row(slab.remove_row(at)?)?;
        }
        Ok(removed)
    }

    pub fn pop_xslice(&mut self) -> Result<Dense2D<T>> {
        check_not_empty(self.x_count, "pop_xslice")?;
        self.remove_xslice(self.x_count - 1)
    }

    pub fn pop_yslice(&mut self) -> Result<Dense2D<T>> {
        check_not_empty(self.y_count, "pop_yslice")?;
        self.remove_yslice(self.y_count - 1)
    }

    pub fn pop_zslice(&mut self) -> Result<Dense2D<T>> {
        check_not_empty(self.z_count, "pop_zslice")?;
        self.remove_zslice(self.z_count - 1)
    }

    pub fn reverse_x(&mut self) {
        self.slabs.reverse();
    }

    pub fn reverse_y(&mut self) {
        for slab in &mut self.slabs {
            slab.reverse_cols();
        }
    }

    pub fn reverse_z(&mut self) {
        for slab in &mut self.slabs {
            slab.reverse_rows();
        }
    }
}

impl<T: Clone> Dense3D<T> {
    /// An `x` by `y` by `z` container filled with copies of `elem`.
    pub fn from_elem(x_count: usize, y_count: usize, z_count: usize, elem: T) -> Self {
        Self {
            slabs: (0..x_count)
                .map(|_| Dense2D::from_elem(z_count, y_count, elem.clone()))
                .collect(),
            x_count,
            y_count,
            z_count,
        }
    }

    /// Replicates a `(y, z)` slice along the x axis.
    pub fn from_xslices(x_count: usize, slice: &Dense2D<T>) -> Self {
        let mut stored = slice.clone();
        stored.transpose();
        Self {
            slabs: (0..x_count).map(|_| stored.clone()).collect(),
            x_count,
            y_count: slice.x_count(),
            z_count: slice.y_count(),
        }
    }

    /// Replicates a `(x, z)` slice along the y axis.
    pub fn from_yslices(y_count: usize, slice: &Dense2D<T>) -> Self {
        let slabs = slice
            .iter_rows()
            .map(|row| Dense2D::from_col(y_count, row.to_vec()))
            .collect();
        Self {
            slabs,
            x_count: slice.x_count(),
            y_count,
            z_count: slice.y_count(),
        }
    }

    /// Replicates a `(x, y)` slice along the z axis.
    pub fn from_zslices(z_count: usize, slice: &Dense2D<T>) -> Self {
        let slabs = slice
            .iter_rows()
            .map(|row| Dense2D::from_row(z_count, row.to_vec()))
            .collect();
        Self {
            slabs,
            x_count: slice.x_count(),
            y_count: slice.y_count(),
            z_count,
        }
    }

    /// The slice at fixed `x` in its public `(y_count, z_count)` shape.
    /// Pays one transpose: storage keeps the slab transposed.
    pub fn xslice(&self, x: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::X), x, self.x_count)?;
        let mut slice = self.slabs[x].clone();
        slice.transpose();
        Ok(slice)
    }

    /// The slice at fixed `y`, gathered element by element into a
    /// `(x_count, z_count)` snapshot. O(x·z): the layout is x-major, so a
    /// y-slice has no contiguous representation.
    pub fn yslice(&self, y: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        let mut slice = Dense2D::new();
        for slab in &self.slabs {
            slice.push_row(slab.col(y)?)?;
        }
        Ok(slice)
    }

    /// The slice at fixed `z`, gathered into a `(x_count, y_count)`
    /// snapshot.
    pub fn zslice(&self, z: usize) -> Result<Dense2D<T>> {
        check_index(Some(Axis::Z), z, self.z_count)?;
        let mut slice = Dense2D::new();
        for slab in &self.slabs {
            slice.push_row(slab.row(z)?.to_vec())?;
        }
        Ok(slice)
    }

    /// The line at fixed `(x, y)`, varying z.
    pub fn line_z(&self, x: usize, y: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Y), y, self.y_count)?;
        self.slabs[x].col(y)
    }

    /// The line at fixed `(x, z)`, varying y.
    pub fn line_y(&self, x: usize, z: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::X), x, self.x_count)?;
        check_index(Some(Axis::Z), z, self.z_count)?;
        Ok(self.slabs[x].row(z)?.to_vec())
    }

    /// The line at fixed `(y, z)`, varying x.
    pub fn line_x(&self, y: usize, z: usize) -> Result<Vec<T>> {
        check_index(Some(Axis::Y), y, self.y_count)?;
        check_index(Some(Axis::Z), z, self.z_count)?;
        Ok(self.slabs.iter().map(|slab| slab[(z, y)].clone()).collect())
    }
}

impl<T: Clone + Zero> Dense3D<T> {
    pub fn zeros(x_count: usize, y_count: usize, z_count: usize) -> Self {
        Self::from_elem(x_count, y_count, z_count, T::zero())
    }
}

impl<T: Clone + One> Dense3D<T> {
    pub fn ones(x_count: usize, y_count: usize, z_count: usize) -> Self {
        Self::from_elem(x_count, y_count, z_count, T::one())
    }
}

impl<T> Index<(usize, usize, usize)> for Dense3D<T> {
    type Output = T;

    fn index(&self, (x, y, z): (usize, usize, usize)) -> &Self::Output {
        match self.get(x, y, z) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Dense3D<T> {
    fn index_mut(&mut self, (x, y, z): (usize, usize, usize)) -> &mut Self::Output {
        match self.get_mut(x, y, z) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Dense3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.x_count {
            writeln!(f, "({})", x)?;
            for y in 0..self.y_count {
                write!(f, "[")?;
                for z in 0..self.z_count {
                    write!(f, "{}", self.slabs[x][(z, y)])?;
                    if z + 1 != self.z_count {
                        write!(f, ", ")?;
                    }
                }
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}
