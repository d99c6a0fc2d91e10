//! LIFO stack.

use crate::{Error, Result};

/// A last-in first-out container.
///
/// Thin wrapper over a [`Vec`] whose top is the end of the vector. Removing or
/// peeking at the top of an empty stack returns [`Error::EmptyStack`].
///
/// # Examples
///
/// ```rust
/// use adtgraph::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top()?, &2);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.pop()?, 1);
/// assert!(stack.pop().is_err());
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the item at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Returns a reference to the item at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    /// Returns a mutable reference to the item at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.items.last_mut().ok_or(Error::EmptyStack)
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the items from the bottom of the stack to the top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Builds a stack by pushing the items in iteration order, so the last
    /// item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::with_capacity(3);
        stack.push("a");
        stack.push("b");
        stack.push("c");
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop().unwrap(), "c");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "a");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack: Stack<u8> = Stack::default();
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
    }

    #[test]
    fn test_top_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(10);
        assert_eq!(*stack.top().unwrap(), 10);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_top_empty() {
        let stack: Stack<u8> = Stack::new();
        assert!(matches!(stack.top(), Err(Error::EmptyStack)));
    }

    #[test]
    fn test_top_mut() {
        let mut stack = Stack::new();
        stack.push(1);
        *stack.top_mut().unwrap() += 41;
        assert_eq!(stack.pop().unwrap(), 42);
        assert!(matches!(stack.top_mut(), Err(Error::EmptyStack)));
    }

    #[test]
    fn test_from_iter_and_iter() {
        let stack: Stack<i32> = (1..=3).collect();
        assert_eq!(*stack.top().unwrap(), 3);

        let bottom_up: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(bottom_up, vec![1, 2, 3]);
    }
}
