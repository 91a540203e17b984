use thiserror::Error;

/// Errors reported by positional list operations.
///
/// Every error is local to the call that produced it; the list is left
/// unchanged whenever an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index does not name a valid position for the operation.
    ///
    /// For removals the valid range is `0..len`; for insertions it is
    /// `0..=len` (inserting at `len` appends).
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
