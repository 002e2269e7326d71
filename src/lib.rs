pub mod error;
pub mod linked_lists;
pub mod traits;

pub use error::EmptyContainer;
pub use linked_lists::SinglyLinkedList;
pub use traits::adt::Stack;
