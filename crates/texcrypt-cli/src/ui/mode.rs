//! Output mode routing logic.

/// Output mode determines how status lines are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with badges and color (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from the environment.
    ///
    /// Routing rules:
    /// 1. `TERM=dumb` forces plain
    /// 2. Pretty only when the stream is a TTY
    pub fn resolve(is_tty: bool, term_is_dumb: bool) -> Self {
        if term_is_dumb || !is_tty {
            Self::Plain
        } else {
            Self::Pretty
        }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
