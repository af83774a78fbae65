//! Error type for tree building and clipboard delivery

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or delivering a directory tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root path does not exist or is not a directory.
    #[error("invalid path: '{0}' is not a directory")]
    InvalidRoot(PathBuf),

    /// A directory could not be read mid-traversal. The whole traversal
    /// aborts; no partial tree is returned.
    #[error("cannot read '{1}': {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// The system clipboard could not be opened or written.
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
