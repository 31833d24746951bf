use crate::chain::{Chain, IntoIter, Iter};
use std::fmt;

/// Unordered collection that only supports insertion and traversal.
///
/// Items are kept in a singly linked chain and every new item becomes the head,
/// so iteration visits the most recently added item first:
/// ```
/// # use linked_bag_queue::prelude::*;
/// let mut bag = Bag::new();
/// bag.add(1);
/// bag.add(2);
/// bag.add(3);
/// assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// assert_eq!(bag.to_string(), "[3, 2, 1]");
/// ```
pub struct Bag<E> {
    chain: Chain<E>,
}

impl<E> Bag<E> {
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Inserts `item` in O(1). Never fails.
    pub fn add(&mut self, item: E) {
        self.chain.push_front(item);
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns a new cursor starting at the most recently added item.
    pub fn iter(&self) -> Iter<'_, E> {
        self.chain.iter()
    }
}

impl<E> Default for Bag<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for Bag<E> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<E: PartialEq> PartialEq for Bag<E> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<E: Eq> Eq for Bag<E> {}

impl<E: fmt::Debug> fmt::Debug for Bag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

impl<E: fmt::Display> fmt::Display for Bag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<E> Extend<E> for Bag<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<E> FromIterator<E> for Bag<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<E> IntoIterator for Bag<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, E> IntoIterator for &'a Bag<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
