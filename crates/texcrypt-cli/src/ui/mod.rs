//! UI primitives for the Texcrypt CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens, color palette
//! - **Render**: Status lines, errors, hints

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{print_error, print_status};
