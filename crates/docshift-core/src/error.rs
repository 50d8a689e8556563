use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Failures resolving the repository layout. These are fatal.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The root directory does not exist
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory
    #[error("root path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// The root doc would be copied onto itself
    #[error("root doc and docs index are the same file: {}", .0.display())]
    RootDocIsIndex(PathBuf),
}

/// Failures on a single file. The engine records these and moves on.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// Creating a destination directory failed
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Moving a file failed
    #[error("failed to move {} to {}", from.display(), to.display())]
    Move {
        /// Source file
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Copying a file failed
    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        /// Source file
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
