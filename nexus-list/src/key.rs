//! Arena keys for node links.
//!
//! Links between nodes are arena indices rather than pointers. A reserved
//! value (`usize::MAX`) addresses the sentinel, so an empty ring is simply
//! `head == tail == Key::SENTINEL`.

/// Index of a node in the list's arena, or the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Key(usize);

impl Key {
    /// The sentinel node. Never stored in the arena, never handed out.
    pub(crate) const SENTINEL: Self = Key(usize::MAX);

    /// Creates a key from an arena slot index.
    #[inline]
    pub(crate) const fn from_usize(val: usize) -> Self {
        Key(val)
    }

    /// Returns the arena slot index.
    #[inline]
    pub(crate) const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns `true` if this key addresses the sentinel.
    #[inline]
    pub(crate) const fn is_sentinel(self) -> bool {
        self.0 == usize::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_basics() {
        assert!(Key::SENTINEL.is_sentinel());
        assert_eq!(Key::SENTINEL.as_usize(), usize::MAX);
        assert!(!Key::from_usize(0).is_sentinel());
    }

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u32::MAX as usize] {
            assert_eq!(Key::from_usize(i).as_usize(), i);
        }
    }
}
