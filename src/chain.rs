//! Singly linked chain of heap-allocated nodes shared by [`Bag`](crate::bag::Bag) and
//! [`Queue`](crate::queue::Queue).
//!
//! Every node is owned by its predecessor and the head node is owned by the chain itself.
//! `tail` is a non-owning pointer to the last node, it is `None` iff `head` is `None`.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Node<E> {
    item: E,
    next: Link<E>,
}

type Link<E> = Option<NonNull<Node<E>>>;

pub(crate) struct Chain<E> {
    head: Link<E>,
    tail: Link<E>,
    len: usize,
    _owns: PhantomData<Box<Node<E>>>,
}

impl<E> Chain<E> {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    fn alloc(item: E, next: Link<E>) -> NonNull<Node<E>> {
        NonNull::from(Box::leak(Box::new(Node { item, next })))
    }

    pub(crate) fn push_front(&mut self, item: E) {
        let node = Self::alloc(item, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub(crate) fn push_back(&mut self, item: E) {
        let node = Self::alloc(item, None);
        match self.tail {
            // SAFETY: `tail` points to the last node of this chain, no other reference to it is live
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<E> {
        self.head.map(|head| {
            // SAFETY: `head` came from `alloc()` and is unlinked right here, so it's freed exactly once
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            let Node { item, next } = *node;
            self.head = next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            item
        })
    }

    pub(crate) fn front(&self) -> Option<&E> {
        // SAFETY: the node is alive for as long as `self` is borrowed
        self.head.map(|head| unsafe { &(*head.as_ptr()).item })
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut E> {
        // SAFETY: `&mut self` guarantees exclusive access to every node
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).item })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub(crate) fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<E> Drop for Chain<E> {
    fn drop(&mut self) {
        if self.len > 0 {
            log::trace!("releasing chain of {} nodes", self.len);
        }
        // one node at a time, so stack depth doesn't depend on length
        self.clear();
    }
}

// SAFETY: the chain owns its nodes exclusively, same as `Box<Node<E>>` would
unsafe impl<E: Send> Send for Chain<E> {}

// SAFETY: `&Chain` hands out nothing but `&E`
unsafe impl<E: Sync> Sync for Chain<E> {}

impl<E: Clone> Clone for Chain<E> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for item in self.iter() {
            cloned.push_back(item.clone());
        }
        cloned
    }
}

impl<E: PartialEq> PartialEq for Chain<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for Chain<E> {}

impl<E: fmt::Debug> fmt::Debug for Chain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Chain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

/// Borrowing cursor over the elements of a [`Bag`](crate::bag::Bag) or a
/// [`Queue`](crate::queue::Queue).
///
/// Each cursor is independent of any other cursor over the same container and never
/// modifies the container. Once exhausted it keeps returning `None`.
pub struct Iter<'a, E> {
    next: Link<E>,
    remaining: usize,
    _marker: PhantomData<&'a Node<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<&'a E> {
        self.next.map(|node| {
            // SAFETY: the chain outlives `'a` and can't be mutated while it's borrowed
            let node: &'a Node<E> = unsafe { node.as_ref() };
            self.next = node.next;
            self.remaining -= 1;
            &node.item
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// SAFETY: `Iter` behaves like `&E`
unsafe impl<E: Sync> Send for Iter<'_, E> {}

// SAFETY: `Iter` behaves like `&E`
unsafe impl<E: Sync> Sync for Iter<'_, E> {}

/// Consuming iterator over the elements of a [`Bag`](crate::bag::Bag) or a
/// [`Queue`](crate::queue::Queue), in the same order as [`Iter`].
///
/// Nodes are released as the iterator advances; whatever is left is released on drop.
pub struct IntoIter<E> {
    chain: Chain<E>,
}

impl<E> IntoIter<E> {
    pub(crate) fn new(chain: Chain<E>) -> Self {
        Self { chain }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.chain.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.chain.len();
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

impl<E: fmt::Debug> fmt::Debug for IntoIter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.chain).finish()
    }
}
