//! Badges and colors.

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Warn => colors::YELLOW,
            Self::Err => colors::RED,
        }
    }
}

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Green (success)
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow (warning)
    pub const YELLOW: &str = "\x1b[33m";
    /// Red (error)
    pub const RED: &str = "\x1b[31m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in `style` when color is enabled.
pub fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}
