//! Singly linked list with exclusively owned nodes.
//!
//! The list owns the head `Box` and every node owns the `Box` of its
//! successor, so each node has exactly one owner. Mutation goes through
//! `&mut SinglyLinkedList`, which is what keeps a list to one writer at a
//! time; there is no locking here.
//!
//! Dropping a `Box` chain the default way recurses once per node. Teardown
//! goes through [`SinglyLinkedList::clean`], which unlinks the head in a loop,
//! and `Clone`, `PartialEq` and `Debug` are written by hand for the same
//! reason.

use core::fmt::{self, Debug, Display, Formatter, Write};

use log::trace;

use crate::{traits::adt::Stack, EmptyContainer};

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Inserts an element at the beginning of the list
    pub fn push(&mut self, item: T) {
        let node = SinglyLinkedListNode {
            value: item,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
    }

    /// Removes the first element and hands it back.
    ///
    /// Popping an empty list is a no-op and returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        let SinglyLinkedListNode { value, next } = *self.head.take()?;
        self.head = next;
        Some(value)
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a copy of the first element without touching the list.
    ///
    /// # Errors
    ///
    /// [`EmptyContainer`] if the list has no nodes.
    pub fn peek(&self) -> Result<T, EmptyContainer>
    where
        T: Clone,
    {
        self.head().cloned().ok_or(EmptyContainer)
    }

    /// Releases every node, head first, leaving the list empty.
    pub fn clean(&mut self) {
        let mut released = 0usize;
        while let Some(mut node) = self.head.take() {
            // unlink before `node` goes out of scope so its drop never cascades
            self.head = node.next.take();
            released += 1;
        }
        if released > 0 {
            trace!("released {released} nodes");
        }
    }

    /// Moves the whole chain into a new list, leaving `self` empty.
    ///
    /// This is O(1): only the head link changes owner.
    pub fn take(&mut self) -> Self {
        Self {
            head: self.head.take(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// Writes `a -> b -> ... -> NULL`, head to tail.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result
    where
        T: Display,
    {
        for value in self.iter() {
            write!(sink, "{value} -> ")?;
        }
        sink.write_str("NULL")
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clean();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    /// Deep copy in the same order, appended through a tail cursor.
    fn clone(&self) -> Self {
        let mut new = Self::new();
        let mut tail = &mut new.head;
        for value in self.iter() {
            let node = tail.insert(Box::new(SinglyLinkedListNode {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
        }
        new
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len();
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Items are pushed at the head, so the last item yielded ends up first.
impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.push(i);
        }
    }
}

impl<T> Stack<T> for SinglyLinkedList<T> {
    fn new() -> Self {
        SinglyLinkedList::new()
    }
    fn is_empty(&self) -> bool {
        SinglyLinkedList::is_empty(self)
    }
    fn push(&mut self, item: T) {
        SinglyLinkedList::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        SinglyLinkedList::pop(self)
    }
    fn peek(&self) -> Result<T, EmptyContainer>
    where
        T: Clone,
    {
        SinglyLinkedList::peek(self)
    }
    fn clean(&mut self) {
        SinglyLinkedList::clean(self)
    }
}

pub use iters::*;
mod iters {
    use super::*;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    /// Owning traversal. Whatever is left unconsumed is released by the
    /// inner list's `Drop`.
    pub struct IntoIter<T> {
        pub(crate) list: SinglyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop()
        }
    }

    pub struct Iter<'a, T> {
        pub(crate) node: Option<&'a SinglyLinkedListNode<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            self.node.map(|node| {
                self.node = node.next.as_deref();
                &node.value
            })
        }
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}
