use crate::error::{Error, Result};

/// Last-in, first-out work list that drives the iterative search.
///
/// Holds node ids rather than nodes, so the tree keeps sole ownership of its data.
#[derive(Debug, Clone)]
pub struct SearchStack<T> {
    items: Vec<T>,
}

impl<T> Default for SearchStack<T> {
    fn default() -> Self {
        SearchStack::new()
    }
}

impl<T> SearchStack<T> {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack that can hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Adds `item` to the top of the stack.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// Fails with [`Error::StackUnderflow`] when the stack is empty.
    pub fn remove(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::StackUnderflow)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
