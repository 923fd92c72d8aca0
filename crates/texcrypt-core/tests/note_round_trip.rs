use std::fs;
use std::io::Cursor;

use tempfile::tempdir;
use texcrypt_core::envelope::{open_with, HEADER_LEN, TAG_LEN};
use texcrypt_core::{
    edit_note, CookedTerminal, EditOutcome, KdfParams, NoteFile, Passphrase, TexcryptError,
};

const FAST: KdfParams = KdfParams::new(64, 1, 1);

fn edit(note: &NoteFile, passphrase: &str, keys: &[u8]) -> texcrypt_core::Result<EditOutcome> {
    let mut echo = Vec::new();
    edit_note(
        note,
        &Passphrase::from(passphrase),
        &mut CookedTerminal,
        Cursor::new(keys.to_vec()),
        &mut echo,
    )
}

#[test]
fn test_create_then_read_only() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("notes")).with_kdf_params(FAST);

    let outcome = edit(&note, "hunter2", b"hello\rworld\x11").expect("edit should succeed");
    assert!(matches!(outcome, EditOutcome::Saved { .. }));

    let text = note
        .read(&Passphrase::from("hunter2"))
        .expect("read should succeed");
    assert_eq!(text.as_slice(), b"hello\nworld");

    let wrong = note.read(&Passphrase::from("wrong"));
    assert!(matches!(wrong, Err(TexcryptError::Authentication)));
}

#[test]
fn test_on_disk_layout_matches_text_length() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("notes")).with_kdf_params(FAST);

    edit(&note, "hunter2", b"hello\nworld\x11").expect("edit should succeed");

    let on_disk = fs::read(note.path()).expect("read should succeed");
    assert_eq!(on_disk.len(), HEADER_LEN + "hello\nworld".len() + TAG_LEN);

    let plaintext = open_with(&on_disk, &Passphrase::from("hunter2"), &FAST)
        .expect("open should succeed");
    assert_eq!(plaintext.as_slice(), b"hello\nworld");

    let haystack = String::from_utf8_lossy(&on_disk);
    assert!(!haystack.contains("hello"));
}

#[test]
fn test_reopen_edit_and_reread() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("journal")).with_kdf_params(FAST);

    edit(&note, "pw", b"ab\rcd\x11").expect("first edit should succeed");
    // Three backspaces take "ab\ncd" back to "ab".
    edit(&note, "pw", b"\x7f\x7f\x7f!\x11").expect("second edit should succeed");

    let text = note.read(&Passphrase::from("pw")).expect("read should succeed");
    assert_eq!(text.as_slice(), b"ab!");
}

#[test]
fn test_typing_nothing_creates_no_file() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("empty")).with_kdf_params(FAST);

    let outcome = edit(&note, "pw", b"\x11").expect("edit should succeed");

    assert_eq!(outcome, EditOutcome::Empty);
    assert!(!note.exists());
}

#[test]
fn test_truncated_file_blocks_editing() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("notes")).with_kdf_params(FAST);
    fs::write(note.path(), b"short").expect("write should succeed");

    let result = edit(&note, "pw", b"replacement\x11");

    assert!(matches!(
        result,
        Err(TexcryptError::TruncatedEnvelope { len: 5, min: HEADER_LEN })
    ));
    assert_eq!(fs::read(note.path()).expect("read should succeed"), b"short");
}

#[test]
fn test_default_cost_note_round_trip() {
    let dir = tempdir().expect("tempdir should be created");
    let note = NoteFile::new(dir.path().join("notes"));
    let passphrase = Passphrase::from("hunter2");

    note.save("default parameters", &passphrase)
        .expect("save should succeed");

    let text = note.read(&passphrase).expect("read should succeed");
    assert_eq!(text.as_slice(), b"default parameters");

    // A note sealed at the default cost does not open with other parameters.
    let cheap = NoteFile::new(note.path()).with_kdf_params(FAST);
    assert!(matches!(
        cheap.read(&passphrase),
        Err(TexcryptError::Authentication)
    ));
}
