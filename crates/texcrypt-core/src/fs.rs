//! Filesystem utilities for replacing a note in one step.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh temp names tried before giving up on a crowded directory.
const TEMP_ATTEMPTS: u32 = 3;

/// Write `bytes` to `destination` by way of a sibling temp file and a rename.
///
/// The temp file is created with owner-only permissions on unix and synced
/// before the rename, so `destination` holds either the old or the new
/// envelope, never a partial one.
///
/// # Errors
///
/// Returns the first I/O error encountered; the temp file is removed on failure.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut attempt = 0;
    let temp_path = loop {
        let temp_path = temp_sibling(destination, attempt);
        match write_new_file(&temp_path, bytes) {
            Ok(()) => break temp_path,
            // Someone else's temp file; leave it alone and pick another name.
            Err(err)
                if err.kind() == io::ErrorKind::AlreadyExists && attempt + 1 < TEMP_ATTEMPTS =>
            {
                attempt += 1;
            }
            Err(err) => {
                if err.kind() != io::ErrorKind::AlreadyExists {
                    let _ = fs::remove_file(&temp_path);
                }
                return Err(err);
            }
        }
    };

    rename_with_fallback(&temp_path, destination)
}

/// Rename `temp_path` over `destination`, removing the destination and
/// retrying where rename refuses to replace (Windows). The temp file is
/// removed if both attempts fail.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn write_new_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `.<name>.<pid>.<nanos>.<attempt>.tmp` beside `destination`.
fn temp_sibling(destination: &Path, attempt: u32) -> PathBuf {
    let name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    destination.with_file_name(format!(
        ".{}.{}.{}.{}.tmp",
        name,
        std::process::id(),
        nanos,
        attempt
    ))
}
