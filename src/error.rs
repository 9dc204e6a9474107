//! Error types for collection operations.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! type is [`CollectionError`]. Errors are raised at the call that violates
//! the contract and a failed call never leaves a container half-modified.

use thiserror::Error;

/// Represents the ways a collection operation can fail.
///
/// # Examples
///
/// ```rust
/// use catena::{CollectionError, Sequence};
///
/// let sequence = Sequence::from(vec!['a', 'b']);
/// assert_eq!(
///     sequence.get(5),
///     Err(CollectionError::OutOfRange { index: 5, length: 2 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Malformed constructor input, such as a map row that is not a
    /// `[key, value]` pair or an unknown queue direction.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected input.
        message: String,
    },

    /// Index access on a position the container does not hold.
    #[error("the index {index} doesn't exist in this collection (length {length})")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        length: usize,
    },

    /// Lookup of a key the map does not hold.
    #[error("the key doesn't exist in this map")]
    KeyNotFound,

    /// Removal from a stack or queue that holds no items.
    #[error("failed to {operation}: no items left")]
    Empty {
        /// The operation that found the container empty.
        operation: &'static str,
    },

    /// A container could not be encoded to or decoded from text.
    #[error("serialization failed: {message}")]
    Serialization {
        /// The message reported by the encoder.
        message: String,
    },
}

impl CollectionError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        CollectionError::invalid_argument("bad row"),
        "invalid argument: bad row"
    )]
    #[case(
        CollectionError::OutOfRange { index: 3, length: 2 },
        "the index 3 doesn't exist in this collection (length 2)"
    )]
    #[case(CollectionError::KeyNotFound, "the key doesn't exist in this map")]
    #[case(
        CollectionError::Empty { operation: "pop stack" },
        "failed to pop stack: no items left"
    )]
    #[case(
        CollectionError::Serialization { message: "EOF".to_string() },
        "serialization failed: EOF"
    )]
    fn test_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_has_no_source() {
        use std::error::Error;

        let error = CollectionError::KeyNotFound;
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_equality() {
        assert_eq!(
            CollectionError::Empty { operation: "dequeue" },
            CollectionError::Empty { operation: "dequeue" }
        );
        assert_ne!(
            CollectionError::Empty { operation: "dequeue" },
            CollectionError::KeyNotFound
        );
    }
}
