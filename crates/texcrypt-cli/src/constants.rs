//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Note file not found (read-only mode).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong passphrase or damaged file).
    pub const AUTH_FAILED: i32 = 5;

    /// Note file is too short to be an envelope.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "TEXCRYPT_PASSPHRASE";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TEXCRYPT_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TEXCRYPT_LOG";
