//! Errors a layout pass can report to its callers.

/// Caller-recoverable errors from viewport queries.
///
/// `OutOfRange` means "not currently displayable", never a fatal
/// condition; stale-cache access is prevented structurally by the
/// controller and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested index is outside the current item collection.
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::OutOfRange { index, len } => {
                write!(f, "item index {index} out of range for {len} items")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
