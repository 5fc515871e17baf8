//! # zoomchat
//!
//! A Rust library for parsing Zoom "meeting saved chat" transcript exports
//! and reconstructing the conversation structure they flatten away.
//!
//! ## Overview
//!
//! Zoom writes the in-meeting chat as plain text: a header line per message
//! (`09:00:01 From Alice to Everyone:`) followed by tab-indented content
//! lines. Reactions, threaded replies and reaction removals appear as
//! system-generated phrases quoting a truncated snippet of the target
//! message — with no explicit link to it. This library classifies every
//! record, extracts the emoji/snippet/free-text payloads, and infers the
//! missing links by scanning backward through already-parsed records for one
//! whose text contains the quoted snippet.
//!
//! The matching is inherently approximate (substring containment over a
//! bounded lookback window); records that cannot be linked are reported in
//! [`ParseStats`](record::ParseStats) rather than silently mis-linked, and
//! inspecting those statistics is a normal part of consuming the result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zoomchat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = ZoomChatParser::new();
//!     let result = parser.parse("meeting_saved_chat.txt".as_ref())?;
//!
//!     for record in &result.records {
//!         println!("[{}] {}: {}", record.timestamp, record.sender, record.text);
//!     }
//!     println!("unresolved parents: {}", result.stats.total_missing());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ZoomChatParser`] and the line-level state machine
//! - [`record`] — [`ChatRecord`], [`Category`], [`ParseResult`], [`ParseStats`](record::ParseStats)
//! - [`extract`] — category classification and payload extraction
//! - [`resolve`] — the backward-matching parent resolver
//! - [`config`] — [`ParserConfig`], lookback window and header policy
//! - [`error`] — [`ZoomChatError`] and the crate [`Result`] alias

pub mod config;
pub mod error;
pub mod extract;
pub mod parser;
pub mod record;
pub mod resolve;

// Re-export the main types at the crate root for convenience
pub use config::ParserConfig;
pub use error::{Result, ZoomChatError};
pub use parser::ZoomChatParser;
pub use record::{Category, ChatRecord, ParseResult};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use zoomchat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DEFAULT_LOOKBACK, MalformedHeaderPolicy, ParserConfig};
    pub use crate::error::{Result, ZoomChatError};
    pub use crate::parser::{LineKind, ZoomChatParser, classify_line};
    pub use crate::record::{Category, ChatRecord, ParseResult, ParseStats};
    pub use crate::resolve::resolve_parent;
}
