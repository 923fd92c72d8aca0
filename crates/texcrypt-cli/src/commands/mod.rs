//! Command handlers. Each takes the loaded [`AppContext`](crate::app::AppContext).

mod convert;
mod edit;
mod read;

pub use convert::{handle_decrypt, handle_encrypt};
pub use edit::handle_edit;
pub use read::handle_read;
