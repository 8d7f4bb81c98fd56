//! Handle validation errors.

use thiserror::Error;

/// Why a [`Handle`](crate::Handle) was not accepted by a list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    /// The handle was issued by a different list.
    #[error("handle belongs to another list")]
    Foreign,

    /// The node was removed, or the list was cleared since the handle was issued.
    #[error("handle refers to a node that is no longer linked")]
    Stale,
}

/// A value that could not be inserted because the mark handle was rejected.
///
/// Hands the value back to the caller together with the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("insertion rejected: {reason}")]
pub struct Rejected<T> {
    /// The value that was not inserted.
    pub value: T,
    /// Why the mark handle was rejected.
    #[source]
    pub reason: HandleError,
}

impl<T> Rejected<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            HandleError::Foreign.to_string(),
            "handle belongs to another list"
        );
        let rejected = Rejected {
            value: 7u32,
            reason: HandleError::Stale,
        };
        assert_eq!(
            rejected.to_string(),
            "insertion rejected: handle refers to a node that is no longer linked"
        );
        assert_eq!(rejected.into_inner(), 7);
    }

    #[test]
    fn rejected_reports_reason_as_source() {
        use std::error::Error as _;

        let rejected = Rejected {
            value: "job",
            reason: HandleError::Foreign,
        };
        let source = rejected.source().expect("reason is the source");
        assert_eq!(source.to_string(), "handle belongs to another list");
    }
}
