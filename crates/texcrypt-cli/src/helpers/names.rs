//! Note name validation.

use crate::errors::CliError;

/// Characters that would escape the notes directory, add an extension, or trip up a shell.
const FORBIDDEN: &[char] = &[
    '.', '/', '\\', '*', '?', '[', ']', '{', '}', '"', '\'', '<', '>', '|', ':',
];

/// Check that `name` is a bare file name safe to join onto the notes directory.
pub fn validate_note_name(name: &str) -> Result<(), CliError> {
    if name.is_empty() {
        return Err(CliError::invalid_input("Note name cannot be empty"));
    }
    if name.trim() != name {
        return Err(CliError::invalid_input(
            "Note name cannot start or end with whitespace",
        ));
    }
    if let Some(c) = name
        .chars()
        .find(|c| FORBIDDEN.contains(c) || c.is_control())
    {
        return Err(CliError::invalid_input(format!(
            "Invalid character {:?} in note name: {}",
            c, name
        )));
    }
    Ok(())
}
