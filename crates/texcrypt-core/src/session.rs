//! Note sessions: load and decrypt, edit, seal and persist.
//!
//! A [`NoteFile`] is one encrypted note on disk. The caller hands it an
//! already-validated path and passphrase; this module never prompts.
//!
//! Save policy: a session whose final text is empty, or identical to what was
//! loaded, writes nothing and leaves any existing file untouched.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::crypto::{KdfParams, Passphrase};
use crate::editor::{LineEditor, Terminal};
use crate::envelope::{open_with, seal_with};
use crate::error::{Result, TexcryptError};
use crate::fs::write_atomic;

/// Initial state of a note at session start.
#[derive(Debug)]
pub enum Document {
    /// No file yet, or a zero-length file.
    New,
    /// Decrypted contents of an existing envelope.
    Existing(Zeroizing<String>),
}

impl Document {
    pub fn text(&self) -> &str {
        match self {
            Document::New => "",
            Document::Existing(text) => text.as_str(),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Document::New)
    }
}

/// What an edit session did with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new envelope of `bytes` bytes replaced the file.
    Saved { bytes: usize },
    /// Text matched what was loaded; nothing written.
    Unchanged,
    /// Text was empty; nothing written.
    Empty,
}

/// An encrypted note at a fixed path.
#[derive(Debug, Clone)]
pub struct NoteFile {
    path: PathBuf,
    kdf: KdfParams,
}

impl NoteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kdf: KdfParams::default(),
        }
    }

    /// Override the Argon2id cost. Files sealed with one setting only open with the same one.
    pub fn with_kdf_params(mut self, params: KdfParams) -> Self {
        self.kdf = params;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decrypt the note, or report that there is nothing yet.
    ///
    /// # Errors
    ///
    /// - [`TexcryptError::TruncatedEnvelope`] for a non-empty file shorter than an envelope header
    /// - [`TexcryptError::Authentication`] for a wrong passphrase or damaged file
    /// - [`TexcryptError::NotText`] if the plaintext is not valid UTF-8
    /// - [`TexcryptError::Io`] if the file exists but cannot be read
    pub fn load(&self, passphrase: &Passphrase) -> Result<Document> {
        let Some(plaintext) = self.open(passphrase)? else {
            return Ok(Document::New);
        };

        match std::str::from_utf8(&plaintext) {
            Ok(text) => {
                debug!(path = %self.path.display(), "loaded note");
                Ok(Document::Existing(Zeroizing::new(text.to_owned())))
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    valid_up_to = err.valid_up_to(),
                    "note is not UTF-8 text"
                );
                Err(TexcryptError::NotText(self.path.clone()))
            }
        }
    }

    /// Decrypt the note for display. Never runs the editor or writes.
    ///
    /// Returns the plaintext bytes exactly as sealed, UTF-8 or not.
    ///
    /// # Errors
    ///
    /// Same as [`NoteFile::load`] except `NotText`, plus
    /// [`TexcryptError::NoteNotFound`] if the file does not exist.
    pub fn read(&self, passphrase: &Passphrase) -> Result<Zeroizing<Vec<u8>>> {
        if !self.exists() {
            return Err(TexcryptError::NoteNotFound(self.path.clone()));
        }
        Ok(self.open(passphrase)?.unwrap_or_default())
    }

    /// Decrypted bytes, or `None` for a missing or zero-length file.
    fn open(&self, passphrase: &Passphrase) -> Result<Option<Zeroizing<Vec<u8>>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "note does not exist yet");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        if bytes.is_empty() {
            debug!(path = %self.path.display(), "note file is empty, starting fresh");
            return Ok(None);
        }

        open_with(&bytes, passphrase, &self.kdf).map(Some)
    }

    /// Seal `text` under a fresh salt and nonce and replace the file.
    ///
    /// Returns the size of the written envelope.
    pub fn save(&self, text: &str, passphrase: &Passphrase) -> Result<usize> {
        let envelope = seal_with(text.as_bytes(), passphrase, &self.kdf)?;
        write_atomic(&self.path, &envelope).map_err(|source| TexcryptError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = envelope.len(), "saved note");
        Ok(envelope.len())
    }
}

/// Load a note, run the editor over it, and persist the result.
///
/// Load failures abort before the editor is shown. An editor failure aborts
/// without writing.
pub fn edit_note<T, R, W>(
    note: &NoteFile,
    passphrase: &Passphrase,
    terminal: &mut T,
    input: R,
    output: W,
) -> Result<EditOutcome>
where
    T: Terminal + ?Sized,
    R: Read,
    W: Write,
{
    let document = note.load(passphrase)?;
    edit_document(note, &document, passphrase, terminal, input, output)
}

/// Run the editor over an already-loaded document and persist the result.
///
/// Lets a caller load first, report on the document, then hand over the terminal.
pub fn edit_document<T, R, W>(
    note: &NoteFile,
    document: &Document,
    passphrase: &Passphrase,
    terminal: &mut T,
    input: R,
    output: W,
) -> Result<EditOutcome>
where
    T: Terminal + ?Sized,
    R: Read,
    W: Write,
{
    let edited = LineEditor::new(document.text()).run(terminal, input, output)?;

    if edited.is_empty() {
        debug!("nothing to save");
        return Ok(EditOutcome::Empty);
    }
    if !document.is_new() && edited.as_str() == document.text() {
        debug!("text unchanged");
        return Ok(EditOutcome::Unchanged);
    }

    let bytes = note.save(&edited, passphrase)?;
    Ok(EditOutcome::Saved { bytes })
}
