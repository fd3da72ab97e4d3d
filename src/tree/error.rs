use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for ordered-tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Error when `first` or `last` is called on an empty tree.
    #[error("Tree is empty.")]
    EmptyTree,

    /// Error when `get` is called with a rank outside `[0, len)`.
    #[error("Index {index} out of range for tree of size {size}.")]
    IndexOutOfRange { index: usize, size: usize },

    /// Error when removal is attempted through a traversal cursor.
    #[error("Removal through a traversal cursor is not supported.")]
    CursorRemoveUnsupported,
}
