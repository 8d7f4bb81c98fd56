//! SyncList - a [`List`] behind a reader-writer lock.
//!
//! Writers (push, pop, clear, reverse, value-addressed removal and moves)
//! take the exclusive lock; readers (len, front/back, traversal, search)
//! share it. Every operation holds the lock for its full duration, so no
//! structural change is ever observed half-done.
//!
//! # No handles
//!
//! A [`Handle`](crate::Handle) obtained under the lock would be meaningless
//! the moment the lock is released, so `SyncList` never returns one. Values
//! are returned by copy and nodes are addressed by predicate instead.
//!
//! # Reentrancy
//!
//! The lock is not reentrant. Callbacks passed to [`for_each`],
//! [`for_each_reverse`], [`find`], [`find_all`], [`contains`], [`filter`],
//! [`retain`], [`remove_first`] and the `move_first_to_*` methods run while
//! the lock is held and must not call back into the same `SyncList`;
//! doing so deadlocks. [`for_each_snapshot`] and
//! [`for_each_reverse_snapshot`] copy the values out first and release the
//! lock before calling back, at the cost of not seeing concurrent changes.
//!
//! [`for_each`]: SyncList::for_each
//! [`for_each_reverse`]: SyncList::for_each_reverse
//! [`find`]: SyncList::find
//! [`find_all`]: SyncList::find_all
//! [`contains`]: SyncList::contains
//! [`filter`]: SyncList::filter
//! [`retain`]: SyncList::retain
//! [`remove_first`]: SyncList::remove_first
//! [`for_each_snapshot`]: SyncList::for_each_snapshot
//! [`for_each_reverse_snapshot`]: SyncList::for_each_reverse_snapshot
//!
//! # Example
//!
//! ```
//! use std::thread;
//! use nexus_list::SyncList;
//!
//! let jobs = SyncList::new();
//!
//! thread::scope(|s| {
//!     for i in 0..4 {
//!         let jobs = &jobs;
//!         s.spawn(move || jobs.push_back(i));
//!     }
//! });
//!
//! assert_eq!(jobs.len(), 4);
//! assert!(jobs.contains(|job| *job == 2));
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::List;

/// A thread-safe doubly-linked list.
///
/// Wraps one [`List`] and one `parking_lot::RwLock`. See the
/// [module docs](self) for the locking and reentrancy rules.
pub struct SyncList<T> {
    inner: RwLock<List<T>>,
}

impl<T> Default for SyncList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for SyncList<T> {
    fn from(list: List<T>) -> Self {
        Self {
            inner: RwLock::new(list),
        }
    }
}

impl<T> FromIterator<T> for SyncList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(List::from_values(iter))
    }
}

impl<T> SyncList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::from(List::new())
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(List::with_capacity(capacity))
    }

    /// Creates a list holding `values` in iteration order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from(List::from_values(values))
    }

    /// Consumes the wrapper and returns the inner list.
    pub fn into_inner(self) -> List<T> {
        self.inner.into_inner()
    }

    // ========================================================================
    // Shared lock
    // ========================================================================

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Calls `f` on every value, front to back, under the shared lock.
    ///
    /// `f` must not call back into this list.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.inner.read().for_each(f);
    }

    /// Calls `f` on every value, back to front, under the shared lock.
    ///
    /// `f` must not call back into this list.
    pub fn for_each_reverse<F: FnMut(&T)>(&self, f: F) {
        self.inner.read().for_each_reverse(f);
    }

    /// Returns `true` if any value satisfies `pred`.
    ///
    /// `pred` runs under the shared lock and must not call back into this list.
    pub fn contains<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.read().contains(pred)
    }

    // ========================================================================
    // Exclusive lock
    // ========================================================================

    /// Inserts `value` at the front.
    pub fn push_front(&self, value: T) {
        self.inner.write().push_front(value);
    }

    /// Inserts `value` at the back.
    pub fn push_back(&self, value: T) {
        self.inner.write().push_back(value);
    }

    /// Removes and returns the first value, or `None` if empty.
    pub fn pop_front(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Removes and returns the last value, or `None` if empty.
    pub fn pop_back(&self) -> Option<T> {
        self.inner.write().pop_back()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Reverses the list in place.
    pub fn reverse(&self) {
        self.inner.write().reverse();
    }

    /// Removes and returns the first value satisfying `pred`.
    ///
    /// `pred` runs under the exclusive lock and must not call back into this list.
    pub fn remove_first<P>(&self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let handle = list.find(pred)?.handle();
        list.remove(handle)
    }

    /// Keeps only the values satisfying `keep`; returns how many were removed.
    ///
    /// `keep` runs under the exclusive lock and must not call back into this list.
    pub fn retain<F>(&self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.write().retain(keep)
    }

    /// Moves the first value satisfying `pred` to the front.
    ///
    /// Returns `false` if nothing matched. `pred` runs under the exclusive
    /// lock and must not call back into this list.
    pub fn move_first_to_front<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let Some(handle) = list.find(pred).map(|node| node.handle()) else {
            return false;
        };
        list.move_to_front(handle);
        true
    }

    /// Moves the first value satisfying `pred` to the back.
    ///
    /// Returns `false` if nothing matched. `pred` runs under the exclusive
    /// lock and must not call back into this list.
    pub fn move_first_to_back<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let Some(handle) = list.find(pred).map(|node| node.handle()) else {
            return false;
        };
        list.move_to_back(handle);
        true
    }
}

impl<T: Clone> SyncList<T> {
    /// Returns a copy of the first value.
    pub fn front(&self) -> Option<T> {
        self.inner.read().front_value().cloned()
    }

    /// Returns a copy of the last value.
    pub fn back(&self) -> Option<T> {
        self.inner.read().back_value().cloned()
    }

    /// Returns the values front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().to_vec()
    }

    /// Returns a copy of the first value satisfying `pred`.
    ///
    /// `pred` runs under the shared lock and must not call back into this list.
    pub fn find<P>(&self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.read().find(pred).map(|node| node.value().clone())
    }

    /// Returns copies of every value satisfying `pred`, front to back.
    ///
    /// `pred` runs under the shared lock and must not call back into this list.
    pub fn find_all<P>(&self, pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.inner
            .read()
            .find_all(pred)
            .into_iter()
            .map(|node| node.value().clone())
            .collect()
    }

    /// Returns a new, independent list of the values satisfying `pred`.
    ///
    /// The shared lock is held only while the values are copied out.
    pub fn filter<P>(&self, pred: P) -> SyncList<T>
    where
        P: FnMut(&T) -> bool,
    {
        let filtered = self.inner.read().filter(pred);
        SyncList::from(filtered)
    }

    /// Calls `f` on a snapshot of the values, front to back.
    ///
    /// The shared lock is released before `f` runs, so `f` may call back into
    /// this list. Changes made meanwhile are not seen by the walk.
    pub fn for_each_snapshot<F: FnMut(&T)>(&self, f: F) {
        self.to_vec().iter().for_each(f);
    }

    /// Calls `f` on a snapshot of the values, back to front.
    ///
    /// Same locking as [`for_each_snapshot`](Self::for_each_snapshot).
    pub fn for_each_reverse_snapshot<F: FnMut(&T)>(&self, f: F) {
        self.to_vec().iter().rev().for_each(f);
    }

    /// Inserts copies of `other`'s values at the front, keeping their order.
    ///
    /// `other` is read first and its lock released before this list is
    /// locked, so `other` may be `self`.
    pub fn push_front_list(&self, other: &SyncList<T>) {
        let values = other.to_vec();
        let mut list = self.inner.write();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
    }

    /// Appends copies of `other`'s values at the back, keeping their order.
    ///
    /// `other` is read first and its lock released before this list is
    /// locked, so `other` may be `self`.
    pub fn push_back_list(&self, other: &SyncList<T>) {
        let values = other.to_vec();
        self.inner.write().extend(values);
    }
}

impl<T: Clone> Clone for SyncList<T> {
    /// Builds an independent list; the source is read-locked only while copying.
    fn clone(&self) -> Self {
        let list = self.inner.read().clone();
        SyncList::from(list)
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncList")
            .field("list", &*self.inner.read())
            .finish()
    }
}
