//! One-shot conversion between plaintext files and envelopes.
//!
//! `notes.txt` (or `.md`) seals to `notes.encrypt` beside it; `notes.encrypt`
//! opens to `notes_decrypted.txt`. The envelope layout is the same one the
//! editor writes, so a converted file opens as a note once it is renamed to a
//! plain name (note names carry no extension), and a note file can be passed
//! to `decrypt_file` after renaming it to `<name>.encrypt`. Existing outputs
//! are replaced.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::crypto::{KdfParams, Passphrase};
use crate::envelope::{open_with, seal_with};
use crate::error::{Result, TexcryptError};
use crate::fs::write_atomic;

/// Extension given to sealed files.
pub const ENCRYPTED_EXTENSION: &str = "encrypt";

/// Plaintext extensions accepted for sealing.
pub const PLAINTEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Seal a `.txt` or `.md` file into `<stem>.encrypt` and return the new path.
///
/// The source file is left in place.
pub fn encrypt_file(source: &Path, passphrase: &Passphrase, params: &KdfParams) -> Result<PathBuf> {
    if !has_extension(source, PLAINTEXT_EXTENSIONS) {
        return Err(TexcryptError::InvalidInput(format!(
            "Only .txt or .md files can be encrypted: {}",
            source.display()
        )));
    }

    let plaintext = read_source(source)?;
    let envelope = seal_with(&plaintext, passphrase, params)?;

    let destination = encrypted_path(source);
    persist(&destination, &envelope)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        "encrypted file"
    );
    Ok(destination)
}

/// Open a `.encrypt` file into `<stem>_decrypted.txt` and return the new path.
///
/// Nothing is written unless decryption succeeds.
pub fn decrypt_file(source: &Path, passphrase: &Passphrase, params: &KdfParams) -> Result<PathBuf> {
    if !has_extension(source, &[ENCRYPTED_EXTENSION]) {
        return Err(TexcryptError::InvalidInput(format!(
            "Only files with .{} extension can be decrypted: {}",
            ENCRYPTED_EXTENSION,
            source.display()
        )));
    }

    let envelope = read_source(source)?;
    let plaintext = open_with(&envelope, passphrase, params)?;

    let destination = decrypted_path(source);
    persist(&destination, &plaintext)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        "decrypted file"
    );
    Ok(destination)
}

/// `dir/notes.txt` -> `dir/notes.encrypt`
pub fn encrypted_path(source: &Path) -> PathBuf {
    source.with_extension(ENCRYPTED_EXTENSION)
}

/// `dir/notes.encrypt` -> `dir/notes_decrypted.txt`
pub fn decrypted_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}_decrypted.txt", stem))
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

fn read_source(source: &Path) -> Result<Vec<u8>> {
    fs::read(source).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TexcryptError::NoteNotFound(source.to_path_buf()),
        _ => err.into(),
    })
}

fn persist(destination: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(destination, bytes).map_err(|source| TexcryptError::Persistence {
        path: destination.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{HEADER_LEN, TAG_LEN};
    use tempfile::tempdir;

    const FAST: KdfParams = KdfParams::new(64, 1, 1);

    #[test]
    fn test_output_paths() {
        assert_eq!(
            encrypted_path(Path::new("/tmp/notes.txt")),
            PathBuf::from("/tmp/notes.encrypt")
        );
        assert_eq!(
            decrypted_path(Path::new("/tmp/notes.encrypt")),
            PathBuf::from("/tmp/notes_decrypted.txt")
        );
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("todo.md");
        fs::write(&source, "# todo\n- milk\n").unwrap();
        let passphrase = Passphrase::from("hunter2");

        let sealed = encrypt_file(&source, &passphrase, &FAST).unwrap();
        assert_eq!(sealed, dir.path().join("todo.encrypt"));
        assert_eq!(
            fs::metadata(&sealed).unwrap().len() as usize,
            HEADER_LEN + "# todo\n- milk\n".len() + TAG_LEN
        );
        assert!(source.exists());

        let opened = decrypt_file(&sealed, &passphrase, &FAST).unwrap();
        assert_eq!(opened, dir.path().join("todo_decrypted.txt"));
        assert_eq!(fs::read_to_string(opened).unwrap(), "# todo\n- milk\n");
    }

    #[test]
    fn test_sealed_file_opens_as_note_after_rename() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("journal.txt");
        fs::write(&source, "day one").unwrap();
        let passphrase = Passphrase::from("hunter2");
        let sealed = encrypt_file(&source, &passphrase, &FAST).unwrap();

        let note_path = dir.path().join("journal");
        fs::rename(&sealed, &note_path).unwrap();

        let note = crate::NoteFile::new(note_path).with_kdf_params(FAST);
        assert_eq!(note.read(&passphrase).unwrap().as_slice(), b"day one");
    }

    #[test]
    fn test_extension_check_ignores_case() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("LOUD.TXT");
        fs::write(&source, "hi").unwrap();

        assert!(encrypt_file(&source, &Passphrase::from("pw"), &FAST).is_ok());
    }

    #[test]
    fn test_encrypt_rejects_other_extensions() {
        let dir = tempdir().unwrap();
        for name in ["image.png", "noext", "notes.encrypt"] {
            let source = dir.path().join(name);
            fs::write(&source, "x").unwrap();

            let result = encrypt_file(&source, &Passphrase::from("pw"), &FAST);
            assert!(matches!(result, Err(TexcryptError::InvalidInput(_))), "{name}");
        }
    }

    #[test]
    fn test_decrypt_rejects_other_extensions() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, "x").unwrap();

        let result = decrypt_file(&source, &Passphrase::from("pw"), &FAST);
        assert!(matches!(result, Err(TexcryptError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let dir = tempdir().unwrap();

        let result = encrypt_file(&dir.path().join("absent.txt"), &Passphrase::from("pw"), &FAST);
        assert!(matches!(result, Err(TexcryptError::NoteNotFound(_))));
    }

    #[test]
    fn test_wrong_passphrase_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("secret.txt");
        fs::write(&source, "classified").unwrap();
        let sealed = encrypt_file(&source, &Passphrase::from("right"), &FAST).unwrap();

        let result = decrypt_file(&sealed, &Passphrase::from("wrong"), &FAST);

        assert!(matches!(result, Err(TexcryptError::Authentication)));
        assert!(!dir.path().join("secret_decrypted.txt").exists());
    }

    #[test]
    fn test_short_envelope_is_truncated() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("stub.encrypt");
        fs::write(&source, [0u8; 40]).unwrap();

        let result = decrypt_file(&source, &Passphrase::from("pw"), &FAST);
        assert!(matches!(result, Err(TexcryptError::TruncatedEnvelope { .. })));
    }
}
