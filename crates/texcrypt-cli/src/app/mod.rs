//! Application-level utilities for the Texcrypt CLI.
//!
//! - Path resolution for the config file and notes directory
//! - The per-invocation [`AppContext`]

mod context;
mod resolver;

pub use context::AppContext;
