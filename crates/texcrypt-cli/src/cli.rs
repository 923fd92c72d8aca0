use std::path::PathBuf;

use clap::{ArgAction, Parser};

use texcrypt_core::VERSION;

/// Texcrypt - type a note, keep it encrypted at rest
///
/// Opens NAME in a minimal terminal editor (Ctrl+Q saves and exits). If NAME
/// already exists it is decrypted first. --encrypt and --decrypt convert a
/// single file instead.
#[derive(Parser)]
#[command(name = "texcrypt")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Note name (no extension, no path separators)
    #[arg(
        value_name = "NAME",
        required_unless_present_any = ["encrypt", "decrypt"],
        conflicts_with_all = ["encrypt", "decrypt"]
    )]
    pub name: Option<String>,

    /// Decrypt and print the note instead of editing it
    #[arg(short, long, conflicts_with_all = ["encrypt", "decrypt"])]
    pub read_only: bool,

    /// Seal a .txt or .md file into <stem>.encrypt
    #[arg(long, value_name = "FILE", conflicts_with = "decrypt")]
    pub encrypt: Option<PathBuf>,

    /// Open a .encrypt file into <stem>_decrypted.txt
    #[arg(long, value_name = "FILE")]
    pub decrypt: Option<PathBuf>,

    /// Directory holding notes
    #[arg(short, long, value_name = "DIR", env = "TEXCRYPT_DIR")]
    pub dir: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
