//! Doubly-linked list with stable node handles.
//!
//! [`List`] is a circular doubly-linked list built around a sentinel. Nodes
//! live in an internal arena and are addressed by [`Handle`]s, which give
//! O(1) removal and relocation from anywhere in the sequence:
//!
//! ```text
//! List        - owns the nodes, validates every handle it is given
//! Handle      - Copy token: (list id, arena slot, insertion stamp)
//! SyncList    - one List behind one reader-writer lock
//! ```
//!
//! Typical uses are LRU rings, job queues with cancellation, and any ordered
//! data that must keep element identity while it is reshuffled.
//!
//! # Quick Start
//!
//! ```
//! use nexus_list::List;
//!
//! let mut lru = List::new();
//! let a = lru.push_front("a");
//! let b = lru.push_front("b");
//! let _c = lru.push_front("c");
//!
//! // touch "a"
//! lru.move_to_front(a);
//! assert_eq!(lru.to_vec(), vec!["a", "c", "b"]);
//!
//! // evict least recently used
//! assert_eq!(lru.pop_back(), Some("b"));
//! assert_eq!(lru.get(b), None);
//! ```
//!
//! # Handle Validation
//!
//! Handles never dangle. A list only accepts handles it issued for nodes that
//! are still linked; anything else is reported as "no node":
//!
//! ```
//! use nexus_list::{HandleError, List};
//!
//! let mut a = List::new();
//! let mut b = List::new();
//! let foreign = b.push_back(1);
//!
//! assert!(a.insert_after(2, foreign).is_none());
//! assert_eq!(a.try_remove(foreign), Err(HandleError::Foreign));
//!
//! let h = a.push_back(3);
//! a.clear();
//! assert_eq!(a.try_remove(h), Err(HandleError::Stale));
//! ```
//!
//! # Concurrency
//!
//! [`List`] has no internal synchronization. [`SyncList`] serializes access
//! through a `parking_lot::RwLock` and exposes only value-based operations;
//! see the [`sync`] module for its reentrancy rules.
//!
//! # Logging
//!
//! Rejected handles are reported at `debug` level and bulk operations at
//! `trace` level through `tracing`. No subscriber is installed.

#![warn(missing_docs)]

pub mod error;
pub mod handle;
mod key;
pub mod list;
pub mod sync;

pub use error::{HandleError, Rejected};
pub use handle::{Handle, ListId};
pub use list::{Drain, Handles, Iter, List, NodeRef};
pub use sync::SyncList;
