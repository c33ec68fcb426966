use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, ParseIdError};

/// Describes the potential error conditions that might arise from minigit
/// object and store operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A file system operation failed on a specific path.
    #[error("{}: {}", .path.display(), .source)]
    PathIoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The store has no entry for this ID.
    #[error("object {0} not found")]
    ObjectNotFound(Id),

    /// Stored bytes could not be decompressed.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// Decompressed bytes lack a valid `"{kind} {len}\0"` header,
    /// or the declared length doesn't match the payload.
    #[error("malformed object header: {0}")]
    MalformedHeader(String),

    /// Tree payload ended in the middle of an entry.
    #[error("tree entry truncated at byte {offset}")]
    TruncatedTree { offset: usize },

    /// Two tree entries share the same name.
    #[error("duplicate tree entry `{0}`")]
    DuplicateEntry(String),

    /// A tree entry has an unrecognized mode or an illegal name.
    #[error("invalid tree entry: {0}")]
    InvalidEntry(String),

    #[error("malformed commit: {0}")]
    MalformedCommit(String),

    #[error("invalid object ID: {0}")]
    InvalidId(#[from] ParseIdError),

    #[error("work dir doesn't exist: {}", .0.display())]
    WorkDirDoesntExist(PathBuf),

    #[error(".git dir doesn't exist: {}", .0.display())]
    GitDirDoesntExist(PathBuf),

    #[error(".git dir already exists: {}", .0.display())]
    GitDirShouldntExist(PathBuf),
}

impl Error {
    /// Returns a closure that attaches `path` to an `std::io::Error`.
    pub(crate) fn at_path<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::PathIoError { path, source }
    }
}

/// A specialized `Result` type for minigit operations.
pub type Result<T> = std::result::Result<T, Error>;
