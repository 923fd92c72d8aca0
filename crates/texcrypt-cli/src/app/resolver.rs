//! Path resolution for the config file and notes directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, TexcryptConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking TEXCRYPT_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config, falling back to defaults when no file exists.
pub fn load_config() -> anyhow::Result<TexcryptConfig> {
    let path = match resolve_config_path() {
        Ok(path) => path,
        Err(err) => {
            debug!(error = %err, "no config location, using defaults");
            return Ok(TexcryptConfig::default());
        }
    };
    if !path.exists() {
        debug!(path = %path.display(), "config not found, using defaults");
        return Ok(TexcryptConfig::default());
    }
    debug!(path = %path.display(), "loading config");
    read_config(&path)
}

/// Resolve the notes directory: `--dir` / TEXCRYPT_DIR, then config, then cwd.
pub fn resolve_notes_dir(cli: &Cli, config: &TexcryptConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.dir.clone() {
        return Ok(dir);
    }
    if let Some(dir) = config.notes.dir.as_deref() {
        if !dir.trim().is_empty() {
            return Ok(expand_home(dir));
        }
    }
    std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to resolve current directory: {}", e))
}

/// Expand a leading `~/` against HOME. Other paths pass through.
fn expand_home(dir: &str) -> PathBuf {
    match (dir.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => Path::new(&home).join(rest),
        _ => PathBuf::from(dir),
    }
}
