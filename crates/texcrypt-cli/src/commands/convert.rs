use std::path::Path;

use texcrypt_core::crypto::validate_passphrase;
use texcrypt_core::{decrypt_file, encrypt_file, KdfParams};

use crate::app::AppContext;
use crate::errors::from_core;
use crate::helpers::prompt_passphrase;
use crate::ui::{print_status, Badge};

/// Seal a plaintext file next to itself.
pub fn handle_encrypt(ctx: &AppContext, source: &Path) -> anyhow::Result<()> {
    let passphrase = prompt_passphrase(ctx.is_interactive(), ctx.confirm_new_passphrase())?;
    validate_passphrase(&passphrase).map_err(from_core)?;

    let destination =
        encrypt_file(source, &passphrase, &KdfParams::default()).map_err(from_core)?;
    if !ctx.quiet() {
        print_status(
            ctx.ui(),
            Badge::Ok,
            &format!("Encrypted to {}", destination.display()),
        );
    }
    Ok(())
}

/// Open an envelope into a plaintext file next to it.
pub fn handle_decrypt(ctx: &AppContext, source: &Path) -> anyhow::Result<()> {
    let passphrase = prompt_passphrase(ctx.is_interactive(), false)?;

    let destination =
        decrypt_file(source, &passphrase, &KdfParams::default()).map_err(from_core)?;
    if !ctx.quiet() {
        print_status(
            ctx.ui(),
            Badge::Ok,
            &format!("Decrypted to {}", destination.display()),
        );
    }
    Ok(())
}
