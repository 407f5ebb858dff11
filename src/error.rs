//! Errors reported by eager operators.
//!
//! Running out of items is not an error for a lazy sequence: `Iterator::next`
//! and `Stream::poll_next` report it as `None`. The variants here are what the
//! eager operators return when the exhaustion, a failed lookup or a length
//! mismatch has to reach the caller.

/// Failure of an eager operator.
///
/// ```rust
/// use iter_model::{IterError, SyncIter};
///
/// let err = SyncIter::new(Vec::<i32>::new()).first().unwrap_err();
/// assert_eq!(err, IterError::Exhausted);
/// assert_eq!(err.to_string(), "sequence is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IterError {
    /// A single item was requested from a sequence with nothing left in it.
    #[error("sequence is empty")]
    Exhausted,

    /// No item satisfied the condition and no default was supplied.
    #[error("item not found")]
    NotFound,

    /// A reduction had neither items nor an initial value.
    #[error("cannot reduce an empty sequence")]
    EmptyInput,

    /// The sequence ended before reaching `index`.
    #[error("item at index {index} is not found")]
    IndexOutOfRange { index: usize },

    /// A strict zip found sources of different lengths.
    ///
    /// `argument` is the 1-based position of the first source whose length
    /// disagrees with the first one.
    #[error("zip() argument {argument} has a different length than argument 1")]
    LengthMismatch { argument: usize },
}

impl IterError {
    /// Log the error on behalf of operator `op` and hand it back.
    pub(crate) fn logged(self, op: &'static str) -> Self {
        log::debug!("{op}: {self}");
        self
    }
}

/// `Result` with [`IterError`] as the default error.
pub type Result<T, E = IterError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(IterError::NotFound.to_string(), "item not found");
        assert_eq!(
            IterError::IndexOutOfRange { index: 7 }.to_string(),
            "item at index 7 is not found"
        );
        assert_eq!(
            IterError::LengthMismatch { argument: 2 }.to_string(),
            "zip() argument 2 has a different length than argument 1"
        );
    }
}
