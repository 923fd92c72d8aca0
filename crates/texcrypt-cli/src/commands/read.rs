use std::io::{self, IsTerminal, Write};

use texcrypt_core::TexcryptError;

use crate::app::AppContext;
use crate::errors::from_core;
use crate::helpers::prompt_passphrase;

/// Decrypt the note and print its bytes verbatim. Never edits or writes.
pub fn handle_read(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let note = ctx.note(name);
    if !note.exists() {
        return Err(from_core(TexcryptError::NoteNotFound(note.path().to_path_buf())));
    }
    let passphrase = prompt_passphrase(ctx.is_interactive(), false)?;
    let plaintext = note.read(&passphrase).map_err(from_core)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&plaintext)?;
    if stdout.is_terminal() && plaintext.last() != Some(&b'\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
