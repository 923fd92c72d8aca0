//! Rendering primitives for CLI status output.

use super::context::UiContext;
use super::theme::{colors, styled, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.color(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line: "Hint: text", label dimmed when color is on.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", colors::DIM, ctx.color);
    format!("{} {}", label, text)
}

/// Format a status line.
///
/// Pretty mode: badge and message
/// Plain mode: the bare message
pub fn status(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, kind, message)
    } else {
        message.to_string()
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "Error: message" with optional "Hint: suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("Error: {}", message));
        if let Some(h) = error_hint {
            lines.push(format!("Hint: {}", h));
        }
    }

    lines.join("\n")
}

/// Print a status line to stderr.
pub fn print_status(ctx: &UiContext, kind: Badge, message: &str) {
    eprintln!("{}", status(ctx, kind, message));
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "Could not decrypt note", Some("check it"));
        assert_eq!(msg, "Error: Could not decrypt note\nHint: check it");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "Could not decrypt note", None);
        assert_eq!(msg, "[\u{2717}] Could not decrypt note");
    }

    #[test]
    fn test_hint_pretty() {
        assert_eq!(hint(&pretty_ctx(), "try again"), "Hint: try again");
    }

    #[test]
    fn test_status_plain_has_no_badge() {
        assert_eq!(status(&plain_ctx(), Badge::Ok, "Saved"), "Saved");
        assert_eq!(status(&pretty_ctx(), Badge::Ok, "Saved"), "[\u{2713}] Saved");
    }

    #[test]
    fn test_badge_with_color() {
        let ctx = UiContext {
            color: true,
            unicode: false,
            mode: OutputMode::Pretty,
        };
        assert_eq!(badge(&ctx, Badge::Warn, ""), "\x1b[33m[WARN]\x1b[0m");
    }
}
