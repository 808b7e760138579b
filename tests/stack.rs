//! Integration tests for the LIFO stack.

use dense_containers::{PreconditionViolation, Stack};

#[test]
fn push_pop_is_lifo() {
    let mut s = Stack::new();
    s.push(1);
    s.push(2);
    s.push(3);
    assert_eq!(s.len(), 3);
    assert_eq!(s.pop().unwrap(), 3);
    assert_eq!(s.pop().unwrap(), 2);
    assert_eq!(s.pop().unwrap(), 1);
    assert!(s.is_empty());
}

#[test]
fn top_peeks_without_removing() {
    let mut s = Stack::from(vec![1, 2]);
    assert_eq!(*s.top().unwrap(), 2);
    assert_eq!(s.len(), 2);
    s.push(3);
    assert_eq!(*s.top().unwrap(), 3);
}

#[test]
fn from_vec_last_element_is_top() {
    let s = Stack::from(vec![10, 20, 30]);
    assert_eq!(*s.top().unwrap(), 30);
    assert_eq!(s.to_vec(), vec![10, 20, 30]);
}

#[test]
fn empty_stack_operations_are_violations() {
    let mut s: Stack<i32> = Stack::new();
    assert!(matches!(
        s.pop().unwrap_err(),
        PreconditionViolation::Empty { operation: "pop" }
    ));
    assert!(matches!(
        s.top().unwrap_err(),
        PreconditionViolation::Empty { operation: "top" }
    ));
}

#[test]
fn clone_is_independent() {
    let s = Stack::from(vec![1, 2]);
    let mut t = s.clone();
    t.push(3);
    assert_eq!(s.len(), 2);
    assert_eq!(t.len(), 3);
}
