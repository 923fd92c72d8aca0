//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else surfaces through
//! `anyhow` as a general failure.

use std::fmt;

use texcrypt_core::TexcryptError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Note or input file not found
    NotFound { message: String, hint: String },

    /// Decryption failed (wrong passphrase or damaged file)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// File is too short to be an envelope
    Integrity { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. }
            | CliError::AuthFailed { message, .. }
            | CliError::Integrity { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn integrity(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Integrity {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Hint line shown under the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Integrity { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::Integrity { .. } => exit_codes::INTEGRITY_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Translate a core error into the CLI's vocabulary.
///
/// Errors with a dedicated exit code become a [`CliError`]; the rest keep
/// their message and exit with the general failure code.
pub fn from_core(err: TexcryptError) -> anyhow::Error {
    match err {
        TexcryptError::Authentication => CliError::auth_failed_with_hint(
            "Could not decrypt: wrong passphrase or corrupted file",
            "The file was left untouched. Check the passphrase and try again.",
        )
        .into(),
        TexcryptError::TruncatedEnvelope { len, min } => CliError::integrity(
            format!(
                "Encrypted file is damaged: {} bytes, need at least {}",
                len, min
            ),
            "Restore the file from a backup, or delete it to start over.",
        )
        .into(),
        TexcryptError::NoteNotFound(path) => CliError::not_found(
            format!("Nothing found at {}", path.display()),
            "Check the name and --dir. Editing a missing note creates it.",
        )
        .into(),
        TexcryptError::NotText(path) => CliError::invalid_input(format!(
            "{} is not UTF-8 text and cannot be edited; use -r or --decrypt to get its contents",
            path.display()
        ))
        .into(),
        TexcryptError::InvalidInput(message) => CliError::invalid_input(message).into(),
        other => anyhow::Error::new(other),
    }
}
