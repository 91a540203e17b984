//! # Chain Collections
//!
//! Sequence collections built from owned, singly linked chains of
//! heap-allocated nodes.
//!
//! The centerpiece is [`SinglyLinkedList`], an ordered mutable sequence with
//! O(1) insertion at both ends (the tail is tracked), positional insertion
//! and removal, membership and index lookup, and a borrowed iterator over its
//! values. Every node is owned by exactly one predecessor; all link mutation
//! goes through the list, so the chain invariants cannot be violated from
//! outside.

#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::ListError;
pub use linked_list::singly::list::SinglyLinkedList;
pub use linked_list::singly::node::Node;
