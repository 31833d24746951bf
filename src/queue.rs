use crate::chain::{Chain, IntoIter, Iter};
use std::fmt;

/// FIFO queue backed by a singly linked chain.
///
/// `enqueue()` appends at the tail in O(1), `dequeue()` and `peek()` work on the head
/// and return `None` when the queue is empty:
/// ```
/// # use linked_bag_queue::prelude::*;
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// assert_eq!(queue.to_string(), "[]");
/// ```
pub struct Queue<E> {
    chain: Chain<E>,
}

impl<E> Queue<E> {
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn enqueue(&mut self, item: E) {
        self.chain.push_back(item);
    }

    /// Removes and returns the least recently enqueued item, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<E> {
        self.chain.pop_front()
    }

    /// Returns the least recently enqueued item without removing it.
    pub fn peek(&self) -> Option<&E> {
        self.chain.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut E> {
        self.chain.front_mut()
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns a new cursor starting at the least recently enqueued item.
    pub fn iter(&self) -> Iter<'_, E> {
        self.chain.iter()
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for Queue<E> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<E: PartialEq> PartialEq for Queue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<E: Eq> Eq for Queue<E> {}

impl<E: fmt::Debug> fmt::Debug for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

impl<E: fmt::Display> fmt::Display for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<E> IntoIterator for Queue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
