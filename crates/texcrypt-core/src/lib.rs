//! # Texcrypt Core
//!
//! Core library for Texcrypt - a local, passphrase-encrypted note editor.
//!
//! This crate provides the encryption container, key derivation, the raw-mode
//! line editor and the session controller, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Passphrase handling and Argon2id key derivation
//! - **envelope**: On-disk container (`salt ‖ nonce ‖ ciphertext+tag`)
//! - **editor**: Byte-at-a-time terminal line editor
//! - **session**: Load, edit and persist a single note file
//! - **convert**: Seal a plaintext file, or open an envelope back to one
//! - **fs**: Atomic file replacement
//!
//! ## Limitations
//!
//! There is no file locking. Two processes editing the same note at the same
//! time will race, and the last writer wins.

pub mod convert;
pub mod crypto;
pub mod editor;
pub mod envelope;
pub mod error;
pub mod fs;
pub mod session;

pub use convert::{decrypt_file, encrypt_file};
pub use crypto::{KdfParams, Passphrase};
pub use editor::{CookedTerminal, CrosstermTerminal, LineEditor, Terminal};
pub use envelope::{open, seal};
pub use error::{Result, TexcryptError};
pub use session::{edit_document, edit_note, Document, EditOutcome, NoteFile};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
