//! Key derivation using Argon2id.
//!
//! This module derives encryption keys from passphrases using the Argon2id
//! algorithm, which is memory-hard and resistant to GPU-based attacks.

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use super::passphrase::Passphrase;
use crate::error::{Result, TexcryptError};

/// Length of the per-file salt in bytes.
pub const SALT_LEN: usize = 32;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256-GCM).
pub const KEY_LENGTH: usize = 32;

/// Argon2id cost parameters.
///
/// The envelope carries no header, so these must match the values a file was
/// sealed with. The defaults are the parameters every note on disk uses:
/// - Memory: 32 MB (32 * 1024 KB)
/// - Iterations: 2
/// - Parallelism: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl KdfParams {
    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(32 * 1024, 2, 2)
    }
}

/// A cryptographic key derived from a passphrase.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase using Argon2id.
///
/// # Arguments
///
/// * `passphrase` - The passphrase to derive from
/// * `salt` - Random salt, exactly [`SALT_LEN`] bytes
/// * `params` - Argon2id cost parameters
///
/// # Errors
///
/// Returns [`TexcryptError::InvalidSalt`] if the salt is empty or not
/// [`SALT_LEN`] bytes long, and [`TexcryptError::Crypto`] if Argon2 rejects
/// the parameters.
///
/// # Security
///
/// - Same passphrase + salt always produces same key (deterministic)
/// - Different salt produces different key (salt must be stored with the note)
///
/// # Examples
///
/// ```
/// use texcrypt_core::crypto::{derive_key, KdfParams, Passphrase, SALT_LEN};
///
/// let salt = [7u8; SALT_LEN];
/// let params = KdfParams::new(64, 1, 1);
/// let key = derive_key(&Passphrase::from("my-passphrase"), &salt, &params).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &Passphrase, salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(TexcryptError::InvalidSalt {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }

    let argon2_params = argon2::Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(KEY_LENGTH),
    )
    .map_err(|e| TexcryptError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut key_bytes)
        .map_err(|e| TexcryptError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}
