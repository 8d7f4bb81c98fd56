//! Circular doubly-linked list with stable node handles.
//!
//! Nodes live in an internal arena (`slab::Slab`) and link to each other by
//! arena key. The ring is closed by a sentinel that is never stored in the
//! arena: its key is `Key::SENTINEL` and its `next`/`prev` links are the
//! list's `head`/`tail` fields. An empty list is the sentinel linked to itself.
//!
//! # Handles
//!
//! Every insertion returns a [`Handle`]. Handles stay valid across any other
//! mutation of the list, including relocation of the node they name, and go
//! stale once that node is removed or the list is cleared.
//!
//! ```
//! use nexus_list::List;
//!
//! let mut list = List::new();
//! let a = list.push_back(1);
//! let b = list.push_back(2);
//! let c = list.push_back(3);
//!
//! list.move_to_front(c);
//! assert_eq!(list.to_vec(), vec![3, 1, 2]);
//!
//! assert_eq!(list.remove(b), Some(2));
//! assert_eq!(list.remove(b), None); // stale
//! assert_eq!(list.next(c), Some(a));
//! ```
//!
//! # Misuse
//!
//! No operation panics on a bad handle. Insertion relative to a foreign or
//! stale mark returns `None`; removal returns `None`; moves are no-ops.
//! The `try_*` variants report the reason as a [`HandleError`].

use std::fmt;

use slab::Slab;
use tracing::{debug, trace};

use crate::key::Key;
use crate::{Handle, HandleError, ListId, Rejected};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Key,
    prev: Key,
    stamp: u64,
}

/// A circular doubly-linked list.
///
/// All structural operations are O(1). Traversal, search, copying and
/// [`reverse`](List::reverse) are O(n).
///
/// # Example
///
/// ```
/// use nexus_list::List;
///
/// let mut list = List::from_values([1, 2, 3]);
/// let four = list.push_back(4);
/// let first = list.front().unwrap().handle();
/// list.insert_before(0, first);
///
/// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(list.get(four), Some(&4));
///
/// list.reverse();
/// assert_eq!(list.pop_front(), Some(4));
/// ```
pub struct List<T> {
    id: ListId,
    nodes: Slab<Node<T>>,
    // sentinel.next
    head: Key,
    // sentinel.prev
    tail: Key,
    len: usize,
    next_stamp: u64,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Ring primitives
// =============================================================================

impl<T> List<T> {
    #[inline]
    fn next_of(&self, key: Key) -> Key {
        if key.is_sentinel() {
            self.head
        } else {
            self.nodes[key.as_usize()].next
        }
    }

    #[inline]
    fn prev_of(&self, key: Key) -> Key {
        if key.is_sentinel() {
            self.tail
        } else {
            self.nodes[key.as_usize()].prev
        }
    }

    #[inline]
    fn set_next(&mut self, key: Key, next: Key) {
        if key.is_sentinel() {
            self.head = next;
        } else {
            self.nodes[key.as_usize()].next = next;
        }
    }

    #[inline]
    fn set_prev(&mut self, key: Key, prev: Key) {
        if key.is_sentinel() {
            self.tail = prev;
        } else {
            self.nodes[key.as_usize()].prev = prev;
        }
    }

    /// Links the (unlinked) node `key` immediately after `at`.
    ///
    /// `at` may be the sentinel. This is the only place links are written for
    /// insertion and relocation.
    #[inline]
    fn link_after(&mut self, at: Key, key: Key) {
        let next = self.next_of(at);

        let node = &mut self.nodes[key.as_usize()];
        node.prev = at;
        node.next = next;

        self.set_next(at, key);
        self.set_prev(next, key);
        self.len += 1;
    }

    /// Unlinks `key` from the ring, leaving it in the arena.
    #[inline]
    fn unlink(&mut self, key: Key) {
        let node = &self.nodes[key.as_usize()];
        let (prev, next) = (node.prev, node.next);

        self.set_next(prev, next);
        self.set_prev(next, prev);

        let node = &mut self.nodes[key.as_usize()];
        node.prev = Key::SENTINEL;
        node.next = Key::SENTINEL;
        self.len -= 1;
    }

    /// Stores a new, unlinked node and returns its key.
    #[inline]
    fn alloc(&mut self, value: T) -> Key {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        Key::from_usize(self.nodes.insert(Node {
            value,
            next: Key::SENTINEL,
            prev: Key::SENTINEL,
            stamp,
        }))
    }

    #[inline]
    fn handle_of(&self, key: Key) -> Handle {
        Handle {
            list: self.id,
            key: key.as_usize(),
            stamp: self.nodes[key.as_usize()].stamp,
        }
    }

    /// Resolves a handle to the key of a node linked into this list.
    #[inline]
    fn resolve(&self, handle: Handle) -> Result<Key, HandleError> {
        if handle.list != self.id {
            return Err(HandleError::Foreign);
        }
        match self.nodes.get(handle.key) {
            Some(node) if node.stamp == handle.stamp => Ok(Key::from_usize(handle.key)),
            _ => Err(HandleError::Stale),
        }
    }

    /// [`resolve`](Self::resolve) for mutating operations; rejections are logged.
    #[inline]
    fn resolve_for(&self, op: &'static str, handle: Handle) -> Option<Key> {
        match self.resolve(handle) {
            Ok(key) => Some(key),
            Err(reason) => {
                debug!(op, ?handle, %reason, "rejected node handle");
                None
            }
        }
    }

    #[inline]
    fn remove_key(&mut self, key: Key) -> T {
        self.unlink(key);
        self.nodes.remove(key.as_usize()).value
    }

    #[inline]
    fn keys(&self) -> Keys<'_, T> {
        Keys {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn node_ref(&self, key: Key) -> Option<NodeRef<'_, T>> {
        if key.is_sentinel() {
            None
        } else {
            Some(NodeRef { list: self, key })
        }
    }
}

// =============================================================================
// Construction and queries
// =============================================================================

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates. Capacity is never a limit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::next(),
            nodes: Slab::with_capacity(capacity),
            head: Key::SENTINEL,
            tail: Key::SENTINEL,
            len: 0,
            next_stamp: 0,
        }
    }

    /// Creates a list holding `values` in iteration order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = values.into_iter();
        let mut list = Self::with_capacity(values.size_hint().0);
        for value in values {
            list.push_back(value);
        }
        list
    }

    /// Returns this list's identity.
    #[inline]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first node, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.head)
    }

    /// Returns the last node, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.tail)
    }

    /// Returns a reference to the first value.
    #[inline]
    pub fn front_value(&self) -> Option<&T> {
        self.front().map(|node| node.value())
    }

    /// Returns a reference to the last value.
    #[inline]
    pub fn back_value(&self) -> Option<&T> {
        self.back().map(|node| node.value())
    }

    /// Returns a mutable reference to the first value.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_sentinel() {
            None
        } else {
            Some(&mut self.nodes[self.head.as_usize()].value)
        }
    }

    /// Returns a mutable reference to the last value.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_sentinel() {
            None
        } else {
            Some(&mut self.nodes[self.tail.as_usize()].value)
        }
    }

    /// Returns `true` if `handle` names a node currently linked into this list.
    #[inline]
    pub fn contains_handle(&self, handle: Handle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Returns a view of the node named by `handle`.
    #[inline]
    pub fn node(&self, handle: Handle) -> Option<NodeRef<'_, T>> {
        self.resolve(handle).ok().and_then(|key| self.node_ref(key))
    }

    /// Returns a reference to the value named by `handle`.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let key = self.resolve(handle).ok()?;
        Some(&self.nodes[key.as_usize()].value)
    }

    /// Returns a mutable reference to the value named by `handle`.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let key = self.resolve(handle).ok()?;
        Some(&mut self.nodes[key.as_usize()].value)
    }

    /// Returns the handle of the node after `handle`.
    ///
    /// `None` if `handle` is the back node or is not linked into this list.
    #[inline]
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        self.node(handle)?.next().map(|node| node.handle())
    }

    /// Returns the handle of the node before `handle`.
    ///
    /// `None` if `handle` is the front node or is not linked into this list.
    #[inline]
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        self.node(handle)?.prev().map(|node| node.handle())
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl<T> List<T> {
    /// Inserts `value` at the front. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Handle {
        let key = self.alloc(value);
        self.link_after(Key::SENTINEL, key);
        self.handle_of(key)
    }

    /// Inserts `value` at the back. O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Handle {
        let key = self.alloc(value);
        self.link_after(self.tail, key);
        self.handle_of(key)
    }

    /// Inserts `value` immediately before `mark`.
    ///
    /// Returns `None` without modifying the list if `mark` is not linked into
    /// this list.
    #[inline]
    pub fn insert_before(&mut self, value: T, mark: Handle) -> Option<Handle> {
        let mark = self.resolve_for("insert_before", mark)?;
        let key = self.alloc(value);
        self.link_after(self.prev_of(mark), key);
        Some(self.handle_of(key))
    }

    /// Inserts `value` immediately after `mark`.
    ///
    /// Returns `None` without modifying the list if `mark` is not linked into
    /// this list.
    #[inline]
    pub fn insert_after(&mut self, value: T, mark: Handle) -> Option<Handle> {
        let mark = self.resolve_for("insert_after", mark)?;
        let key = self.alloc(value);
        self.link_after(mark, key);
        Some(self.handle_of(key))
    }

    /// Like [`insert_before`](Self::insert_before), but hands the value back
    /// on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with [`HandleError::Foreign`] or
    /// [`HandleError::Stale`] if `mark` is not linked into this list.
    pub fn try_insert_before(&mut self, value: T, mark: Handle) -> Result<Handle, Rejected<T>> {
        match self.resolve(mark) {
            Ok(mark) => {
                let key = self.alloc(value);
                self.link_after(self.prev_of(mark), key);
                Ok(self.handle_of(key))
            }
            Err(reason) => Err(Rejected { value, reason }),
        }
    }

    /// Like [`insert_after`](Self::insert_after), but hands the value back on
    /// rejection.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with [`HandleError::Foreign`] or
    /// [`HandleError::Stale`] if `mark` is not linked into this list.
    pub fn try_insert_after(&mut self, value: T, mark: Handle) -> Result<Handle, Rejected<T>> {
        match self.resolve(mark) {
            Ok(mark) => {
                let key = self.alloc(value);
                self.link_after(mark, key);
                Ok(self.handle_of(key))
            }
            Err(reason) => Err(Rejected { value, reason }),
        }
    }
}

// =============================================================================
// Removal
// =============================================================================

impl<T> List<T> {
    /// Removes the node named by `handle` and returns its value.
    ///
    /// The handle goes stale. Returns `None` (and does nothing) if the handle
    /// is foreign or already stale.
    #[inline]
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let key = self.resolve_for("remove", handle)?;
        Some(self.remove_key(key))
    }

    /// Like [`remove`](Self::remove), but reports why a handle was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HandleError::Foreign`] or [`HandleError::Stale`] if the
    /// handle is not linked into this list.
    pub fn try_remove(&mut self, handle: Handle) -> Result<T, HandleError> {
        let key = self.resolve(handle)?;
        Ok(self.remove_key(key))
    }

    /// Removes and returns the first value, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_sentinel() {
            return None;
        }
        Some(self.remove_key(self.head))
    }

    /// Removes and returns the last value, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_sentinel() {
            return None;
        }
        Some(self.remove_key(self.tail))
    }

    /// Removes every element.
    ///
    /// Drops all values (O(n)) and invalidates every handle issued so far:
    /// stamps are never reused, so a pre-clear handle can not match a node
    /// inserted afterwards, even in the same arena slot.
    pub fn clear(&mut self) {
        trace!(list = self.id.get(), dropped = self.len, "clearing list");
        self.nodes.clear();
        self.head = Key::SENTINEL;
        self.tail = Key::SENTINEL;
        self.len = 0;
    }

    /// Keeps only the values for which `keep` returns `true`, preserving order.
    ///
    /// Returns the number of removed values.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut key = self.head;
        while !key.is_sentinel() {
            let next = self.next_of(key);
            if !keep(&self.nodes[key.as_usize()].value) {
                self.remove_key(key);
            }
            key = next;
        }
        before - self.len
    }

    /// Removes all values, returning them front to back.
    ///
    /// Values not consumed are dropped when the iterator is dropped.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { list: self }
    }
}

// =============================================================================
// Relocation
// =============================================================================

impl<T> List<T> {
    /// Moves the node named by `handle` to the front.
    ///
    /// No-op if the handle is not linked into this list or is already first.
    #[inline]
    pub fn move_to_front(&mut self, handle: Handle) {
        let Some(key) = self.resolve_for("move_to_front", handle) else {
            return;
        };
        if self.head == key {
            return;
        }
        self.unlink(key);
        self.link_after(Key::SENTINEL, key);
    }

    /// Moves the node named by `handle` to the back.
    ///
    /// No-op if the handle is not linked into this list or is already last.
    #[inline]
    pub fn move_to_back(&mut self, handle: Handle) {
        let Some(key) = self.resolve_for("move_to_back", handle) else {
            return;
        };
        if self.tail == key {
            return;
        }
        self.unlink(key);
        self.link_after(self.tail, key);
    }

    /// Moves `node` to sit immediately before `mark`.
    ///
    /// No-op if either handle is not linked into this list, if they name the
    /// same node, or if `node` already sits before `mark`.
    pub fn move_before(&mut self, node: Handle, mark: Handle) {
        let Some(key) = self.resolve_for("move_before", node) else {
            return;
        };
        let Some(mark) = self.resolve_for("move_before", mark) else {
            return;
        };
        if key == mark || self.prev_of(mark) == key {
            return;
        }
        self.unlink(key);
        self.link_after(self.prev_of(mark), key);
    }

    /// Moves `node` to sit immediately after `mark`.
    ///
    /// No-op if either handle is not linked into this list, if they name the
    /// same node, or if `node` already sits after `mark`.
    pub fn move_after(&mut self, node: Handle, mark: Handle) {
        let Some(key) = self.resolve_for("move_after", node) else {
            return;
        };
        let Some(mark) = self.resolve_for("move_after", mark) else {
            return;
        };
        if key == mark || self.next_of(mark) == key {
            return;
        }
        self.unlink(key);
        self.link_after(mark, key);
    }

    /// Reverses the list in place. O(n).
    ///
    /// Handles stay valid and keep naming the same values.
    pub fn reverse(&mut self) {
        trace!(list = self.id.get(), len = self.len, "reversing list");
        let mut key = self.head;
        while !key.is_sentinel() {
            let node = &mut self.nodes[key.as_usize()];
            std::mem::swap(&mut node.next, &mut node.prev);
            // already swapped: prev is the old next
            key = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }
}

// =============================================================================
// Traversal and search
// =============================================================================

impl<T> List<T> {
    /// Returns an iterator over values, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { keys: self.keys() }
    }

    /// Alias of [`iter`](Self::iter).
    #[inline]
    pub fn values(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Returns an iterator over node handles, front to back.
    #[inline]
    pub fn handles(&self) -> Handles<'_, T> {
        Handles { keys: self.keys() }
    }

    /// Calls `f` on every value, front to back.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Calls `f` on every value, back to front.
    pub fn for_each_reverse<F: FnMut(&T)>(&self, f: F) {
        self.iter().rev().for_each(f);
    }

    /// Calls `f` on every value by mutable reference, front to back.
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        let mut key = self.head;
        while !key.is_sentinel() {
            let node = &mut self.nodes[key.as_usize()];
            f(&mut node.value);
            key = node.next;
        }
    }

    /// Calls `f` with the handle of every node, front to back.
    ///
    /// `f` receives the list itself and may mutate it, e.g. to remove the
    /// node it was handed. The successor is captured before `f` runs; if `f`
    /// removes that successor the walk stops there. Nodes inserted by `f`
    /// after the current one are not visited.
    ///
    /// The walk makes at most as many calls as the list held when it started.
    /// A node `f` relocates ahead of the walk (e.g. with
    /// [`move_to_back`](Self::move_to_back)) can be handed to `f` again
    /// within that bound. Moving each visited node to the back therefore
    /// visits every node exactly once.
    pub fn for_each_node<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self, Handle),
    {
        let mut budget = self.len;
        let mut current = self.front().map(|node| node.handle());
        while let Some(handle) = current {
            if budget == 0 {
                trace!(?handle, "visit budget spent, stopping walk");
                break;
            }
            budget -= 1;
            let next = self.next(handle);
            f(&mut *self, handle);
            current = match next {
                Some(next) if self.contains_handle(next) => Some(next),
                Some(next) => {
                    trace!(?next, "successor unlinked by callback, stopping walk");
                    None
                }
                None => None,
            };
        }
    }

    /// Returns the first node whose value satisfies `pred`, front to back.
    pub fn find<P>(&self, mut pred: P) -> Option<NodeRef<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.keys()
            .find(|key| pred(&self.nodes[key.as_usize()].value))
            .and_then(|key| self.node_ref(key))
    }

    /// Returns every node whose value satisfies `pred`, front to back.
    pub fn find_all<P>(&self, mut pred: P) -> Vec<NodeRef<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.keys()
            .filter(|key| pred(&self.nodes[key.as_usize()].value))
            .map(|key| NodeRef { list: self, key })
            .collect()
    }

    /// Returns `true` if any value satisfies `pred`.
    pub fn contains<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.find(pred).is_some()
    }
}

// =============================================================================
// Copying operations
// =============================================================================

impl<T: Clone> List<T> {
    /// Returns the values front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a new, independent list of the values satisfying `pred`.
    pub fn filter<P>(&self, mut pred: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|&value| pred(value)).cloned().collect()
    }

    /// Inserts copies of `other`'s values at the front, keeping their order.
    ///
    /// `other` is not modified.
    pub fn push_front_list(&mut self, other: &List<T>) {
        for value in other.iter().rev() {
            self.push_front(value.clone());
        }
    }

    /// Appends copies of `other`'s values at the back, keeping their order.
    ///
    /// `other` is not modified.
    pub fn push_back_list(&mut self, other: &List<T>) {
        self.nodes.reserve(other.len);
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }
}

impl<T: Clone> Clone for List<T> {
    /// Builds an independent list (with its own id) holding the same values.
    fn clone(&self) -> Self {
        let mut list = List::with_capacity(self.len);
        list.push_back_list(self);
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// Borrowed view of a node linked into a [`List`].
///
/// [`next`](NodeRef::next) and [`prev`](NodeRef::prev) never land on the
/// sentinel: they return `None` at either end.
pub struct NodeRef<'a, T> {
    list: &'a List<T>,
    key: Key,
}

impl<'a, T> NodeRef<'a, T> {
    /// Returns the node's value.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.list.nodes[self.key.as_usize()].value
    }

    /// Returns a handle for later removal or relocation.
    #[inline]
    pub fn handle(&self) -> Handle {
        self.list.handle_of(self.key)
    }

    /// Returns the following node, or `None` at the back.
    #[inline]
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.list.next_of(self.key))
    }

    /// Returns the preceding node, or `None` at the front.
    #[inline]
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.list.prev_of(self.key))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle())
            .field("value", self.value())
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

struct Keys<'a, T> {
    list: &'a List<T>,
    front: Key,
    back: Key,
    remaining: usize,
}

impl<T> Iterator for Keys<'_, T> {
    type Item = Key;

    #[inline]
    fn next(&mut self) -> Option<Key> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.front = self.list.next_of(key);
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Keys<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Key> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.back = self.list.prev_of(key);
        self.remaining -= 1;
        Some(key)
    }
}

/// Iterator over references to list values.
pub struct Iter<'a, T> {
    keys: Keys<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let list = self.keys.list;
        self.keys.next().map(|key| &list.nodes[key.as_usize()].value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.keys.list;
        self.keys
            .next_back()
            .map(|key| &list.nodes[key.as_usize()].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over node handles.
pub struct Handles<'a, T> {
    keys: Keys<'a, T>,
}

impl<T> Iterator for Handles<'_, T> {
    type Item = Handle;

    #[inline]
    fn next(&mut self) -> Option<Handle> {
        let list = self.keys.list;
        self.keys.next().map(|key| list.handle_of(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Handles<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Handle> {
        let list = self.keys.list;
        self.keys.next_back().map(|key| list.handle_of(key))
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}

/// Draining iterator returned by [`List::drain`].
pub struct Drain<'a, T> {
    list: &'a mut List<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.list.clear();
    }
}


#[cfg(test)]
mod bench_list {
    use super::*;
    use hdrhistogram::Histogram;
    use std::time::Instant;

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:5} ns | p99: {:5} ns | p999: {:6} ns | min: {:4} | max: {:6}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const WARMUP: usize = 10_000;
    const ITERATIONS: usize = 100_000;

    #[test]
    #[ignore]
    fn bench_list_move_to_front() {
        let mut list = List::with_capacity(ITERATIONS);
        let handles: Vec<_> = (0..ITERATIONS as u64).map(|i| list.push_back(i)).collect();
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for handle in handles.iter().rev().take(WARMUP) {
            list.move_to_front(*handle);
        }

        for handle in &handles {
            let start = Instant::now();
            list.move_to_front(*handle);
            hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        print_histogram("move_to_front", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_remove_middle() {
        let mut list = List::with_capacity(ITERATIONS);
        let handles: Vec<_> = (0..ITERATIONS as u64).map(|i| list.push_back(i)).collect();
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for handle in handles.iter().skip(1).step_by(2) {
            let start = Instant::now();
            let value = list.remove(*handle);
            hist.record(start.elapsed().as_nanos() as u64).unwrap();
            std::hint::black_box(value);
        }

        print_histogram("remove_middle", &hist);
    }
}
