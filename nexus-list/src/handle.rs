//! List identity and node handles.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`List`](crate::List) instance.
///
/// Every list (including clones and filtered copies) draws a fresh id, so a
/// handle can never be mistaken for a node of another list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Opaque handle to a node linked into a [`List`](crate::List).
///
/// Returned by insertion and used later for O(1) removal and relocation.
/// A handle is only accepted by the list that issued it, and only while the
/// node is still linked: once the node is removed (or the list cleared) the
/// handle goes stale and every operation treats it as "no node", even if the
/// arena slot has since been reused.
///
/// Handles are plain values. They do not borrow the list and do not keep the
/// node alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) list: ListId,
    pub(crate) key: usize,
    pub(crate) stamp: u64,
}

impl Handle {
    /// Returns the id of the list that issued this handle.
    #[inline]
    pub const fn list_id(&self) -> ListId {
        self.list
    }
}
