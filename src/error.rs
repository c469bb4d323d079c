//! # Error Types
//!
//! Every fallible operation in the crate returns
//! [`Result<T, ShcryptError>`](ShcryptError). Nothing in the library panics or
//! exits the process on bad input; callers decide how to report.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all shcrypt operations.
#[derive(Error, Debug)]
pub enum ShcryptError {
    /// I/O error from a caller-supplied reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key file could not be resolved or read.
    #[error("key file unreadable: {}", .path.display())]
    KeyFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file could not be resolved or read.
    #[error("source file unreadable: {}", .path.display())]
    SourceFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A buffer handed to the cipher engine is not a whole number of blocks.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The container is too short or its ciphertext region is misaligned.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The trailing padding byte is out of range or larger than the
    /// decrypted region.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// The output file could not be written. Nothing was left behind.
    #[error("output write failed: {}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable file name could be derived for the default output.
    #[error("invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The random source failed while generating an IV.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl ShcryptError {
    /// The filesystem path this error is about, if any.
    ///
    /// Front-ends use this to report "what failed, where".
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::KeyFileUnreadable { path, .. }
            | Self::SourceFileUnreadable { path, .. }
            | Self::OutputWriteFailed { path, .. }
            | Self::InvalidPath(path) => Some(path),
            _ => None,
        }
    }
}
