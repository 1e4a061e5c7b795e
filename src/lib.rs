//! FURIA Fan Bot Library
//!
//! This library provides the building blocks of a Telegram fan-engagement
//! bot for the FURIA CS team: a TTL-cached PandaScore client, pure
//! formatters turning match/roster payloads into Markdown replies, and the
//! dispatch layer wiring both to the Telegram Bot API.
//!
//! # Examples
//!
//! ```rust
//! use furia_fanbot::format;
//! use serde_json::json;
//!
//! let records = vec![json!({
//!     "opponents": [
//!         {"opponent": {"name": "FURIA"}},
//!         {"opponent": {"name": "Rival"}}
//!     ],
//!     "results": [{"score": 16}, {"score": 10}],
//!     "winner": {"name": "FURIA", "image_url": "http://x/logo.png"},
//!     "serie": {"full_name": "Major 2024"},
//!     "streams_list": [
//!         {"official": true, "language": "en", "raw_url": "http://stream"}
//!     ]
//! })];
//!
//! let card = format::last_match(&records).expect("non-empty input");
//! assert!(card.caption.contains("FURIA (16) VS Rival (10)"));
//! ```

pub mod bot;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod stats;

// Re-export commonly used types for convenience
pub use bot::{Action, Command, handler_tree};
pub use config::Config;
pub use error::BotError;
pub use stats::{QueryData, QueryKind, ResponseCache, StatsClient};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
