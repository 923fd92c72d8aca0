//! Passphrase wrapper and validation.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, TexcryptError};

/// A user passphrase held in memory only as long as it is needed.
///
/// The backing string is zeroized on drop and never shows up in `Debug`
/// output.
pub struct Passphrase(SecretString);

impl Passphrase {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Raw passphrase bytes for key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }

    pub fn is_blank(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }
}

impl From<String> for Passphrase {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Passphrase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase([REDACTED])")
    }
}

/// Validate a passphrase before it is used to seal a new note.
///
/// Only blank passphrases are rejected; strength is the user's call.
///
/// # Examples
///
/// ```
/// use texcrypt_core::crypto::{validate_passphrase, Passphrase};
///
/// assert!(validate_passphrase(&Passphrase::from("hunter2")).is_ok());
/// assert!(validate_passphrase(&Passphrase::from("   ")).is_err());
/// ```
pub fn validate_passphrase(passphrase: &Passphrase) -> Result<()> {
    if passphrase.is_blank() {
        return Err(TexcryptError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }
    Ok(())
}
