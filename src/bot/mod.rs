//! Telegram dispatch layer: action identifiers, pagination keyboards and
//! the command/callback handlers.

pub mod actions;
pub mod handlers;
pub mod pagination;

pub use actions::Action;
pub use handlers::{Command, HandlerResult, handler_tree};
pub use pagination::{Navigation, navigation};
