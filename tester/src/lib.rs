//! Randomised operation testing for [`linked_list::Stack`] implementations.
//!
//! A seeded generator produces a stream of stack operations, replays each on
//! a `Vec` to record the expected outcome, and [`test_stack`] applies the same
//! stream to the implementation under test.

mod tester;

pub use tester::*;
