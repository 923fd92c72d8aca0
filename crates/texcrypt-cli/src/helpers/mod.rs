//! Helper functions for the Texcrypt CLI.
//!
//! - **input**: Passphrase prompting
//! - **names**: Note name validation

mod input;
mod names;

pub use input::prompt_passphrase;
pub use names::validate_note_name;
