//! UI context for environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
///
/// Status output goes to stderr, so detection looks at stderr rather than
/// stdout: stdout may carry note text into a pipe.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    pub fn from_env() -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env or TERM=dumb
        let color = is_tty && !no_color_env && !term_is_dumb;

        Self {
            color,
            unicode: !term_is_dumb,
            mode: OutputMode::resolve(is_tty, term_is_dumb),
        }
    }
}
