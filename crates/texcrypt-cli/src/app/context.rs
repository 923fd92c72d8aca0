//! Application context for the Texcrypt CLI.
//!
//! Bundles CLI arguments with the loaded configuration so command handlers
//! take a single parameter.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use texcrypt_core::NoteFile;

use crate::cli::Cli;
use crate::config::TexcryptConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_notes_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: TexcryptConfig,
    notes_dir: PathBuf,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    /// Load config and resolve the notes directory for this invocation.
    pub fn load(cli: &'a Cli) -> anyhow::Result<Self> {
        let config = load_config()?;
        let notes_dir = resolve_notes_dir(cli, &config)?;
        Ok(Self {
            cli,
            config,
            notes_dir,
            ui: UiContext::from_env(),
        })
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// The note called `name` in the notes directory.
    pub fn note(&self, name: &str) -> NoteFile {
        NoteFile::new(self.notes_dir.join(name))
    }

    /// Whether a brand-new note's passphrase should be typed twice.
    pub fn confirm_new_passphrase(&self) -> bool {
        self.config.prompt.confirm_new_passphrase
    }

    /// Whether prompts can be shown.
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}
