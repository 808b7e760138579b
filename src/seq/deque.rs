use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use rand::{thread_rng, Rng};

use crate::error::{check_index, PreconditionViolation, Result};

/// Double-ended queue over two independently growable buffers.
///
/// `front` holds the elements nearest the logical front in *reverse*
/// physical order (its last element is the queue's front); `back` holds the
/// rest in forward order. The full logical sequence, front to back, is
/// `reverse(front) ++ back`. Logical index `i` therefore resolves to
/// `front[front.len() - 1 - i]` when `i < front.len()`, and
/// `back[i - front.len()]` otherwise: index 0 is always the front, never a
/// physical buffer start.
///
/// Popping from an end whose buffer is empty shifts the head off the other
/// buffer, which is O(n) for that call. This asymmetric cost is intrinsic to
/// the two-buffer layout and amortizes low under alternating access.
#[derive(Debug, Clone, PartialEq)]
pub struct Deque<T> {
    front: Vec<T>,
    back: Vec<T>,
}

// Not derived: deriving would demand `T: Default`, and `clear` relies on
// `mem::take` for arbitrary element types.
impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    pub fn front(&self) -> Result<&T> {
        match self.front.last().or_else(|| self.back.first()) {
            Some(value) => Ok(value),
            None => Err(PreconditionViolation::Empty { operation: "front" }),
        }
    }

    pub fn back(&self) -> Result<&T> {
        match self.back.last().or_else(|| self.front.first()) {
            Some(value) => Ok(value),
            None => Err(PreconditionViolation::Empty { operation: "back" }),
        }
    }

    pub fn push_front(&mut self, item: T) {
        self.front.push(item);
    }

    pub fn push_back(&mut self, item: T) {
        self.back.push(item);
    }

    /// Bulk front push, equivalent to repeated [`push_front`](Self::push_front)
    /// calls: the *last* element of `items` ends up frontmost.
    pub fn push_front_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.front.extend(items);
    }

    /// Bulk back push in logical order.
    pub fn push_back_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.back.extend(items);
    }

    fn take_front(&mut self) -> Option<T> {
        if let Some(value) = self.front.pop() {
            Some(value)
        } else if self.back.is_empty() {
            None
        } else {
            // O(back.len()) shift; see the type-level note.
            Some(self.back.remove(0))
        }
    }

    fn take_back(&mut self) -> Option<T> {
        if let Some(value) = self.back.pop() {
            Some(value)
        } else if self.front.is_empty() {
            None
        } else {
            // O(front.len()) shift; see the type-level note.
            Some(self.front.remove(0))
        }
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.take_front()
            .ok_or(PreconditionViolation::Empty {
                operation: "pop_front",
            })
    }

    pub fn pop_back(&mut self) -> Result<T> {
        self.take_back()
            .ok_or(PreconditionViolation::Empty {
                operation: "pop_back",
            })
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(None, index, self.len())?;
        if index < self.front.len() {
            Ok(&self.front[self.front.len() - 1 - index])
        } else {
            Ok(&self.back[index - self.front.len()])
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(None, index, self.len())?;
        let front_len = self.front.len();
        if index < front_len {
            Ok(&mut self.front[front_len - 1 - index])
        } else {
            Ok(&mut self.back[index - front_len])
        }
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Inserts `item` so it becomes the element at logical index `at`,
    /// shifting everything from `at` onward one place toward the back.
    pub fn insert(&mut self, at: usize, item: T) -> Result<()> {
        check_index(None, at, self.len())?;
        if at < self.front.len() {
            let pos = self.front.len() - at;
            self.front.insert(pos, item);
        } else {
            self.back.insert(at - self.front.len(), item);
        }
        Ok(())
    }

    /// Removes and returns the element at logical index `at`.
    pub fn remove(&mut self, at: usize) -> Result<T> {
        check_index(None, at, self.len())?;
        if at < self.front.len() {
            let pos = self.front.len() - 1 - at;
            Ok(self.front.remove(pos))
        } else {
            Ok(self.back.remove(at - self.front.len()))
        }
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.len();
        if start < end && end <= len {
            Ok(())
        } else {
            Err(PreconditionViolation::InvalidRange { start, end, len })
        }
    }

    /// Removes the logical range `[start, end)`, returning it as a new
    /// deque in order. The remainder is spliced back together.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<Deque<T>> {
        self.check_range(start, end)?;
        let mut items = Vec::with_capacity(end - start);
        for _ in start..end {
            items.push(self.remove(start)?);
        }
        Ok(Deque::from(items))
    }

    /// Evicts elements from alternating ends, starting from a randomly
    /// chosen end, until `len() <= target`. Each evicted element is pushed
    /// onto the returned deque at the end it was evicted from, so the two
    /// eviction runs sit at opposite ends of the result and read inward in
    /// eviction order; the multiset is preserved exactly, the source order
    /// is not. A `target >= len()` is a no-op.
    pub fn shrink_to_size(&mut self, target: usize) -> Deque<T> {
        let mut removed = Deque::new();
        if self.len() <= target {
            return removed;
        }
        log::trace!("shrinking deque from {} to {}", self.len(), target);
        let mut from_back = thread_rng().gen::<bool>();
        while self.len() > target {
            if from_back {
                if let Some(value) = self.take_back() {
                    removed.push_back(value);
                }
            } else if let Some(value) = self.take_front() {
                removed.push_front(value);
            }
            from_back = !from_back;
        }
        removed
    }

    /// Resets the deque to empty, returning its prior contents.
    pub fn clear(&mut self) -> Deque<T> {
        mem::take(self)
    }
}

impl<T: Clone> Deque<T> {
    /// The logical front-to-back sequence as a flat vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.front
            .iter()
            .rev()
            .chain(self.back.iter())
            .cloned()
            .collect()
    }

    /// A non-mutating copy of the logical range `[start, end)`.
    pub fn range_to_vec(&self, start: usize, end: usize) -> Result<Vec<T>> {
        self.check_range(start, end)?;
        let mut items = Vec::with_capacity(end - start);
        for i in start..end {
            items.push(self.get(i)?.clone());
        }
        Ok(items)
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    /// Places the whole sequence in the back buffer; logical order equals
    /// the input order.
    fn from(items: Vec<T>) -> Self {
        Self {
            front: Vec::new(),
            back: items,
        }
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    fn from(deque: Deque<T>) -> Self {
        let mut items = deque.front;
        items.reverse();
        items.extend(deque.back);
        items
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let len = self.len();
        for (idx, value) in self.front.iter().rev().chain(self.back.iter()).enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != len {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
