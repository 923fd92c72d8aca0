//! Cryptographic primitives for Texcrypt.
//!
//! This module provides passphrase handling and key derivation using
//! well-audited libraries:
//! - **Argon2id**: Memory-hard key derivation function
//! - **secrecy / zeroize**: Secret material is wiped from memory on drop
//!
//! The authenticated cipher itself lives in [`crate::envelope`].
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of an encrypted note file
//! - Offline brute-force attacks on the passphrase
//! - Silent tampering with a note file
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Concurrent writers to the same note

pub mod key;
pub mod passphrase;

pub use key::{derive_key, DerivedKey, KdfParams, KEY_LENGTH, SALT_LEN};
pub use passphrase::{validate_passphrase, Passphrase};
