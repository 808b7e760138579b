//! Linear sequence types: a double-ended queue over split front/back
//! buffers, and a plain LIFO stack.
pub mod deque;
pub mod stack;

pub use deque::Deque;
pub use stack::Stack;
