//! AES-256-GCM envelope encryption/decryption.
//!
//! An envelope is the complete on-disk form of a note:
//!
//! ```text
//! [ salt (32 bytes) ][ nonce (12 bytes) ][ ciphertext + GCM tag (16 bytes) ]
//! ```
//!
//! There is no magic, header or version field. Every seal draws a fresh salt
//! (and therefore a fresh key) and a fresh nonce, so a key/nonce pair is never
//! reused. Sealing and opening are pure transforms; writing the result is the
//! caller's job.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{derive_key, KdfParams, Passphrase, SALT_LEN};
use crate::error::{Result, TexcryptError};

/// AES-GCM nonce length (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length.
pub const TAG_LEN: usize = 16;

/// Bytes preceding the ciphertext. Anything shorter is truncated.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// A borrowed view of a serialized envelope.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    pub salt: &'a [u8; SALT_LEN],
    pub nonce: &'a [u8; NONCE_LEN],
    /// Ciphertext with the tag appended.
    pub ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Split raw bytes into salt, nonce and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`TexcryptError::TruncatedEnvelope`] if `bytes` is shorter than
    /// [`HEADER_LEN`].
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let truncated = || TexcryptError::TruncatedEnvelope {
            len: bytes.len(),
            min: HEADER_LEN,
        };

        let (salt, rest) = bytes.split_first_chunk::<SALT_LEN>().ok_or_else(truncated)?;
        let (nonce, ciphertext) = rest.split_first_chunk::<NONCE_LEN>().ok_or_else(truncated)?;

        Ok(Self {
            salt,
            nonce,
            ciphertext,
        })
    }

    /// Total serialized length.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }
}

/// Encrypt `plaintext` into a fresh envelope with the default KDF parameters.
///
/// # Examples
///
/// ```
/// use texcrypt_core::crypto::{KdfParams, Passphrase};
/// use texcrypt_core::envelope::{open_with, seal_with};
///
/// let params = KdfParams::new(64, 1, 1);
/// let passphrase = Passphrase::from("hunter2");
/// let sealed = seal_with(b"secret note", &passphrase, &params).unwrap();
/// let opened = open_with(&sealed, &passphrase, &params).unwrap();
/// assert_eq!(opened.as_slice(), b"secret note");
/// ```
pub fn seal(plaintext: &[u8], passphrase: &Passphrase) -> Result<Vec<u8>> {
    seal_with(plaintext, passphrase, &KdfParams::default())
}

/// Decrypt an envelope produced by [`seal`].
pub fn open(envelope: &[u8], passphrase: &Passphrase) -> Result<Zeroizing<Vec<u8>>> {
    open_with(envelope, passphrase, &KdfParams::default())
}

/// [`seal`] with explicit KDF parameters.
pub fn seal_with(plaintext: &[u8], passphrase: &Passphrase, params: &KdfParams) -> Result<Vec<u8>> {
    let salt: [u8; SALT_LEN] = random_bytes()?;
    let nonce: [u8; NONCE_LEN] = random_bytes()?;

    let key = derive_key(passphrase, &salt, params)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| TexcryptError::Crypto("Encryption failed".to_string()))?;

    let mut output = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);

    debug!(
        plaintext_len = plaintext.len(),
        envelope_len = output.len(),
        "sealed envelope"
    );
    Ok(output)
}

/// [`open`] with explicit KDF parameters.
///
/// # Errors
///
/// - [`TexcryptError::TruncatedEnvelope`] if the input is shorter than [`HEADER_LEN`]
/// - [`TexcryptError::Authentication`] if the tag does not verify, whether the
///   passphrase is wrong or the bytes were damaged
pub fn open_with(
    envelope: &[u8],
    passphrase: &Passphrase,
    params: &KdfParams,
) -> Result<Zeroizing<Vec<u8>>> {
    let parsed = Envelope::parse(envelope)?;

    let key = derive_key(passphrase, parsed.salt, params)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let plaintext = cipher
        .decrypt(Nonce::from_slice(parsed.nonce), parsed.ciphertext)
        .map_err(|_| TexcryptError::Authentication)?;

    debug!(envelope_len = parsed.encoded_len(), "opened envelope");
    Ok(Zeroizing::new(plaintext))
}

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| TexcryptError::Crypto(format!("Failed to gather randomness: {}", e)))?;
    Ok(bytes)
}
