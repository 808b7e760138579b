//! Integration tests for the two-axis dense container.

use dense_containers::{Dense2D, PreconditionViolation};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_elem_fills_every_cell() {
    let a = Dense2D::from_elem(3, 4, 7u8);
    assert_eq!(a.shape(), (3, 4));
    for x in 0..3 {
        for y in 0..4 {
            assert_eq!(*a.get(x, y).unwrap(), 7);
        }
    }
}

#[test]
fn from_rows_infers_extents() {
    let a = Dense2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(a.x_count(), 2);
    assert_eq!(a.y_count(), 3);
    assert_eq!(a[(1, 2)], 6);
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = Dense2D::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, PreconditionViolation::RaggedInput { row: 1, .. }));
}

#[test]
fn from_rows_empty_is_zero_extent() {
    let a: Dense2D<i32> = Dense2D::from_rows(vec![]).unwrap();
    assert_eq!(a.shape(), (0, 0));
    assert!(a.is_empty());
}

#[test]
fn from_row_replicates_across_x() {
    let a = Dense2D::from_row(3, vec![1, 2]);
    assert_eq!(a.shape(), (3, 2));
    for x in 0..3 {
        assert_eq!(a.row(x).unwrap(), &[1, 2]);
    }
}

#[test]
fn from_col_replicates_across_y() {
    let a = Dense2D::from_col(3, vec![10, 20]);
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.row(0).unwrap(), &[10, 10, 10]);
    assert_eq!(a.row(1).unwrap(), &[20, 20, 20]);
}

#[test]
fn zeros_and_ones() {
    let z: Dense2D<f32> = Dense2D::zeros(2, 2);
    assert_eq!(z[(1, 1)], 0.0);
    let o: Dense2D<i64> = Dense2D::ones(2, 2);
    assert_eq!(o[(0, 1)], 1);
}

// ---------------------------------------------------------------------------
// Point, row, and column access
// ---------------------------------------------------------------------------

#[test]
fn point_access_validates_both_axes() {
    let mut a = Dense2D::from_elem(2, 3, 0);
    assert!(a.get(2, 0).is_err());
    assert!(a.get(0, 3).is_err());
    a.set(1, 2, 9).unwrap();
    assert_eq!(a[(1, 2)], 9);
    assert!(a.set(1, 3, 5).is_err());
}

#[test]
fn column_read_gathers_across_rows() {
    let a = Dense2D::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert_eq!(a.col(0).unwrap(), vec![1, 3, 5]);
    assert_eq!(a.col(1).unwrap(), vec![2, 4, 6]);
}

#[test]
fn set_row_and_set_col_validate_length() {
    let mut a = Dense2D::from_elem(2, 2, 0);
    let before = a.clone();

    assert!(a.set_row(0, vec![1]).is_err());
    assert!(a.set_col(0, vec![1, 2, 3]).is_err());
    assert_eq!(a, before, "failed replacement must not mutate");

    a.set_row(0, vec![1, 2]).unwrap();
    a.set_col(1, vec![8, 9]).unwrap();
    assert_eq!(a.row(0).unwrap(), &[1, 8]);
    assert_eq!(a.row(1).unwrap(), &[0, 9]);
}

// ---------------------------------------------------------------------------
// Row append / insert / remove
// ---------------------------------------------------------------------------

#[test]
fn push_row_then_read_back() {
    let mut a = Dense2D::from_elem(1, 3, 0);
    a.push_row(vec![7, 8, 9]).unwrap();
    assert_eq!(a.x_count(), 2);
    assert_eq!(a.row(1).unwrap(), &[7, 8, 9]);
}

#[test]
fn first_row_establishes_y_count() {
    let mut a = Dense2D::new();
    a.push_row(vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a.shape(), (1, 4));
    let err = a.push_row(vec![1]).unwrap_err();
    assert!(matches!(err, PreconditionViolation::ShapeMismatch { .. }));
}

#[test]
fn removing_last_row_keeps_column_extent() {
    let mut a = Dense2D::from_rows(vec![vec![1, 2]]).unwrap();
    a.remove_row(0).unwrap();
    assert_eq!(a.shape(), (0, 2));
    // the next row append re-seeds the column extent
    a.push_row(vec![5]).unwrap();
    assert_eq!(a.shape(), (1, 1));
}

#[test]
fn insert_row_shifts_later_rows() {
    let mut a = Dense2D::from_rows(vec![vec![1, 1], vec![3, 3]]).unwrap();
    a.insert_row(1, vec![2, 2]).unwrap();
    assert_eq!(a.x_count(), 3);
    assert_eq!(a.row(1).unwrap(), &[2, 2]);
    assert_eq!(a.row(2).unwrap(), &[3, 3]);
}

#[test]
fn insert_row_requires_index_within_current_count() {
    let mut a = Dense2D::from_elem(2, 2, 0);
    let before = a.clone();
    let err = a.insert_row(2, vec![1, 1]).unwrap_err();
    assert!(matches!(err, PreconditionViolation::IndexOutOfRange { .. }));
    assert_eq!(a, before);
}

#[test]
fn pop_row_on_empty_is_a_violation() {
    let mut a: Dense2D<i32> = Dense2D::new();
    let err = a.pop_row().unwrap_err();
    assert!(matches!(err, PreconditionViolation::Empty { .. }));
}

// ---------------------------------------------------------------------------
// Column append / insert / remove
// ---------------------------------------------------------------------------

#[test]
fn push_col_then_read_back() {
    let mut a = Dense2D::from_elem(3, 1, 0);
    a.push_col(vec![1, 2, 3]).unwrap();
    assert_eq!(a.shape(), (3, 2));
    assert_eq!(a.col(1).unwrap(), vec![1, 2, 3]);
}

#[test]
fn first_col_establishes_x_count() {
    let mut a = Dense2D::new();
    a.push_col(vec![1, 2, 3]).unwrap();
    assert_eq!(a.shape(), (3, 1));
    assert_eq!(a.col(0).unwrap(), vec![1, 2, 3]);
    let err = a.push_col(vec![1, 2]).unwrap_err();
    assert!(matches!(err, PreconditionViolation::ShapeMismatch { .. }));
}

#[test]
fn insert_col_places_values_per_row() {
    let mut a = Dense2D::from_rows(vec![vec![1, 3], vec![4, 6]]).unwrap();
    a.insert_col(1, vec![2, 5]).unwrap();
    assert_eq!(a.row(0).unwrap(), &[1, 2, 3]);
    assert_eq!(a.row(1).unwrap(), &[4, 5, 6]);
}

#[test]
fn remove_col_returns_the_column() {
    let mut a = Dense2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let col = a.remove_col(1).unwrap();
    assert_eq!(col, vec![2, 5]);
    assert_eq!(a.shape(), (2, 2));
    assert_eq!(a.row(0).unwrap(), &[1, 3]);
}

#[test]
fn pop_col_removes_last_column() {
    let mut a = Dense2D::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(a.pop_col().unwrap(), vec![2, 4]);
    assert_eq!(a.shape(), (2, 1));
}

// ---------------------------------------------------------------------------
// Reverse and transpose
// ---------------------------------------------------------------------------

#[test]
fn reverse_rows_and_cols() {
    let mut a = Dense2D::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    a.reverse_rows();
    assert_eq!(a.row(0).unwrap(), &[3, 4]);
    a.reverse_cols();
    assert_eq!(a.row(0).unwrap(), &[4, 3]);
}

#[test]
fn transpose_exchanges_axes() {
    let mut a = Dense2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    a.transpose();
    assert_eq!(a.shape(), (3, 2));
    assert_eq!(a.row(0).unwrap(), &[1, 4]);
    assert_eq!(a.row(1).unwrap(), &[2, 5]);
    assert_eq!(a.row(2).unwrap(), &[3, 6]);
}

#[test]
fn transpose_is_an_involution() {
    let a = Dense2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let mut b = a.clone();
    b.transpose();
    b.transpose();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Value semantics
// ---------------------------------------------------------------------------

#[test]
fn clone_is_a_deep_copy() {
    let a = Dense2D::from_elem(2, 2, 1);
    let mut b = a.clone();
    b.set(0, 0, 99).unwrap();
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(b[(0, 0)], 99);
}

#[test]
#[should_panic]
fn index_sugar_panics_out_of_range() {
    let a = Dense2D::from_elem(1, 1, 0);
    let _ = a[(1, 0)];
}
