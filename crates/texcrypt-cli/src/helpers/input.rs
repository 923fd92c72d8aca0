//! Passphrase input.

use dialoguer::Password;
use texcrypt_core::Passphrase;

use crate::constants::PASSPHRASE_ENV;

/// Read the passphrase from `TEXCRYPT_PASSPHRASE`, or prompt for it.
///
/// With `confirm`, the prompt asks twice and loops until both entries match.
/// The environment variable is taken as-is and never confirmed.
pub fn prompt_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<Passphrase> {
    if let Some(value) = passphrase_from_env() {
        return Ok(value);
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ));
    }

    let prompt = Password::new().with_prompt("Passphrase");
    let value = if confirm {
        prompt
            .with_confirmation("Confirm passphrase", "Passphrases do not match")
            .interact()
    } else {
        prompt.interact()
    }
    .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;

    Ok(Passphrase::from(value))
}

fn passphrase_from_env() -> Option<Passphrase> {
    let value = std::env::var(PASSPHRASE_ENV).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(Passphrase::from(value))
}
