//! Error types for Texcrypt core operations.
//!
//! Every core error is fatal to the operation that raised it and propagates up
//! to the session boundary. The CLI layer maps these to user-facing messages
//! and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Texcrypt operations.
pub type Result<T> = std::result::Result<T, TexcryptError>;

/// Core error type for Texcrypt operations.
#[derive(Debug, Error)]
pub enum TexcryptError {
    /// Salt missing or of the wrong length
    #[error("Invalid salt: expected {expected} bytes, got {actual}")]
    InvalidSalt { expected: usize, actual: usize },

    /// Encrypted file is shorter than the smallest possible envelope
    #[error("Encrypted file is truncated ({len} bytes, need at least {min})")]
    TruncatedEnvelope { len: usize, min: usize },

    /// Tag verification failed.
    ///
    /// Deliberately does not say whether the passphrase was wrong or the
    /// file was damaged.
    #[error("Could not decrypt: wrong passphrase or corrupted file")]
    Authentication,

    /// Reading keystrokes from the terminal failed
    #[error("Failed to read input: {source}")]
    InputStream {
        #[source]
        source: std::io::Error,
    },

    /// Writing the sealed envelope failed
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decrypted note is not valid UTF-8 and cannot be edited as text
    #[error("Note is not UTF-8 text: {}", .0.display())]
    NotText(PathBuf),

    /// Note file does not exist
    #[error("Note not found: {}", .0.display())]
    NoteNotFound(PathBuf),

    /// Key derivation, cipher setup or randomness failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
