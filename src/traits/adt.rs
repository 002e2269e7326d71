//! Abstract Data Type Traits

use crate::EmptyContainer;

/// Last-in, first-out container.
///
/// Reading the top of an empty stack is an error, removing from an empty
/// stack is not.
pub trait Stack<T> {
    fn new() -> Self;
    fn is_empty(&self) -> bool;
    /// inserts an element on top
    fn push(&mut self, item: T);
    /// removes the top element, `None` (and no change) when empty
    fn pop(&mut self) -> Option<T>;
    /// copy of the top element
    fn peek(&self) -> Result<T, EmptyContainer>
    where
        T: Clone;
    /// drops every element
    fn clean(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> Stack<T> for Vec<T> {
    fn new() -> Self {
        Vec::new()
    }
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn peek(&self) -> Result<T, EmptyContainer>
    where
        T: Clone,
    {
        self.last().cloned().ok_or(EmptyContainer)
    }
    fn clean(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::{EmptyContainer, SinglyLinkedList};

    fn lifo<S: Stack<u8>>() {
        let mut s = S::new();
        assert!(s.is_empty());
        assert_eq!(s.peek(), Err(EmptyContainer));
        s.push(1);
        s.push(2);
        assert_eq!(s.peek(), Ok(2));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.peek(), Ok(1));
        s.clean();
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn vec_is_a_stack() {
        lifo::<Vec<u8>>();
    }

    #[test]
    fn list_is_a_stack() {
        lifo::<SinglyLinkedList<u8>>();
    }
}
