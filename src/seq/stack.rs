use std::fmt;
use std::iter::FromIterator;

use crate::error::{PreconditionViolation, Result};

/// Classic LIFO stack over a single growable buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or(PreconditionViolation::Empty { operation: "pop" })
    }

    pub fn top(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or(PreconditionViolation::Empty { operation: "top" })
    }
}

impl<T: Clone> Stack<T> {
    /// Bottom-to-top contents as a flat vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of `items` becomes the top.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.items.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.items.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
