use thiserror::Error;

/// Returned when the head of a list is read while the list holds no nodes.
///
/// Only [`peek`](crate::SinglyLinkedList::peek) produces this. Popping or
/// cleaning an empty list is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("empty list: attempt to read the head of a list with no nodes")]
pub struct EmptyContainer;
