//! A singly linked list with owned nodes and a tracked tail.
//!
//! ## Core Components
//!
//! - [`list::SinglyLinkedList`]: the list itself; all link mutation happens
//!   here.
//! - [`node::Node`]: the storage cell, exposed read-only for inspection.
//! - [`iter::Iter`] and [`iter::IntoIter`]: front-to-back iteration.
//!
//! ## Safety
//!
//! Links are raw `NonNull` pointers so the list can keep an O(1) tail
//! alongside the owned chain. The invariants upheld internally are:
//!
//! - `len == 0` iff `head` is `None` iff `tail` is `None`.
//! - Following `next` from `head` exactly `len` times reaches `None`, and
//!   the last node visited is `tail`.
//! - Every node pointer in the chain came from `Box::into_raw` and is freed
//!   exactly once, on unlink or on drop.

pub mod iter;
pub mod list;
pub mod node;
