use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TexcryptConfig {
    #[serde(default)]
    pub notes: NotesSection,
    #[serde(default)]
    pub prompt: PromptSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NotesSection {
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptSection {
    #[serde(default = "default_true")]
    pub confirm_new_passphrase: bool,
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            confirm_new_passphrase: true,
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TexcryptConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<TexcryptConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("texcrypt"));
        }
    }
    Ok(home_dir()?.join(".config").join("texcrypt"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
