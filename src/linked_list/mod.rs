//! # Owned Linked Lists
//!
//! This module provides linked lists that own their nodes.
//!
//! ## Core Components
//!
//! - [`singly::list::SinglyLinkedList`]: an ordered sequence backed by a
//!   singly linked chain with a tracked tail.
//! - [`singly::node::Node`]: a heap-allocated cell holding one value and a
//!   forward link, readable from outside the list but only linkable by it.
//! - [`singly::iter`]: borrowed and consuming iterators over list values.
//!
//! ## Ownership
//!
//! Each node is owned by exactly one predecessor (the list itself for the
//! head node). The tail pointer is a non-owning alias of the last node and is
//! kept consistent by every mutating operation. There are no back links and
//! no shared ownership anywhere in the chain.
//!
//! # Examples
//!
//! ```
//! use chain_collections::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//!
//! assert_eq!(list.len(), 3);
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! assert_eq!(list.to_string(), "( 0 ) => ( 1 ) => ( 2 )");
//! ```

pub mod singly;
