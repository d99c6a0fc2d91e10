//! FIFO queue.

use std::collections::VecDeque;

use crate::{Error, Result};

/// A first-in first-out container backed by a [`VecDeque`].
///
/// Removing or peeking at the front of an empty queue returns
/// [`Error::EmptyQueue`].
///
/// # Examples
///
/// ```rust
/// use adtgraph::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
///
/// assert_eq!(queue.dequeue()?, 'a');
/// assert_eq!(queue.dequeue()?, 'b');
/// assert!(queue.is_empty());
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }

    /// Returns a reference to the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(Error::EmptyQueue)
    }

    /// Returns `true` if the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Builds a queue by enqueueing the items in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        for i in 0..4 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 4);

        for i in 0..4 {
            assert_eq!(queue.dequeue().unwrap(), i);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue: Queue<usize> = Queue::default();
        assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn test_front() {
        let mut queue: Queue<&str> = ["x", "y"].into_iter().collect();
        assert_eq!(*queue.front().unwrap(), "x");
        assert_eq!(queue.len(), 2);

        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert!(matches!(queue.front(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn test_interleaved() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue().unwrap(), 1);
        queue.enqueue(3);
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert_eq!(queue.dequeue().unwrap(), 3);
    }
}
