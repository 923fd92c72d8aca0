use std::fs;
use std::io::{self, IsTerminal, Write};

use texcrypt_core::crypto::validate_passphrase;
use texcrypt_core::{edit_document, CookedTerminal, CrosstermTerminal, EditOutcome, NoteFile, Terminal};
use tracing::debug;

use crate::app::AppContext;
use crate::errors::from_core;
use crate::helpers::prompt_passphrase;
use crate::ui::{print_status, Badge};

const EDITOR_HEADER: &str = "Enter text (Press Ctrl+Q to save):";

pub fn handle_edit(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let note = ctx.note(name);
    let is_new = is_new_note(&note);

    let confirm = is_new && ctx.confirm_new_passphrase();
    let passphrase = prompt_passphrase(ctx.is_interactive(), confirm)?;
    if is_new {
        validate_passphrase(&passphrase).map_err(from_core)?;
    }

    let document = note.load(&passphrase).map_err(from_core)?;

    fs::create_dir_all(ctx.notes_dir()).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create notes directory {}: {}",
            ctx.notes_dir().display(),
            e
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal: Box<dyn Terminal> = if stdin.is_terminal() {
        Box::new(CrosstermTerminal)
    } else {
        debug!("stdin is not a terminal, reading input in cooked mode");
        Box::new(CookedTerminal)
    };

    if !ctx.quiet() {
        let mut out = stdout.lock();
        writeln!(out, "{}", EDITOR_HEADER)?;
        out.flush()?;
    }

    let outcome = edit_document(
        &note,
        &document,
        &passphrase,
        terminal.as_mut(),
        stdin.lock(),
        stdout.lock(),
    )
    .map_err(from_core)?;
    println!();

    if !ctx.quiet() {
        report(ctx, &note, outcome);
    }
    Ok(())
}

/// A missing or zero-length file starts a new note.
fn is_new_note(note: &NoteFile) -> bool {
    fs::metadata(note.path())
        .map(|meta| meta.len() == 0)
        .unwrap_or(true)
}

fn report(ctx: &AppContext, note: &NoteFile, outcome: EditOutcome) {
    match outcome {
        EditOutcome::Saved { bytes } => print_status(
            ctx.ui(),
            Badge::Ok,
            &format!("Saved {} ({} bytes)", note.path().display(), bytes),
        ),
        EditOutcome::Unchanged => print_status(ctx.ui(), Badge::Ok, "No changes; file left as is"),
        EditOutcome::Empty => print_status(ctx.ui(), Badge::Warn, "Nothing to save; file left as is"),
    }
}
