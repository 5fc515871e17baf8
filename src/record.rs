//! Data model for reconstructed Zoom meeting chats.
//!
//! This module provides [`ChatRecord`], one conversation turn of the
//! transcript, together with [`ParseResult`] and [`ParseStats`], the
//! whole-file output of [`ZoomChatParser`](crate::parser::ZoomChatParser).
//!
//! # Overview
//!
//! A record consists of:
//! - **Header fields**: `timestamp`, `sender`, `receiver`, copied verbatim
//!   from the transcript header line
//! - **Body fields**: `category` and `text`, derived from the content lines
//! - **Link fields**: `reaction_ids`, `reply_ids` and `removed`, filled in
//!   while *later* records are processed
//!
//! # Examples
//!
//! ```
//! use zoomchat::record::{Category, ChatRecord};
//!
//! let record = ChatRecord::new(0, "09:00:01", "Alice", "Everyone:");
//! assert_eq!(record.id, 0);
//! assert_eq!(record.category, Category::PlainText);
//! assert!(record.text.is_empty());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use zoomchat::record::ParseResult;
//!
//! let result = ParseResult::default();
//! let json = serde_json::to_string(&result)?;
//! let parsed: ParseResult = serde_json::from_str(&json)?;
//! assert_eq!(result, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// The category of a chat record, derived from its first content line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An ordinary message typed by a participant. May span multiple lines.
    #[default]
    PlainText,

    /// A system-generated `Reacted to "..." with <emoji>` line.
    Reaction,

    /// A system-generated `Replying to "..."` line followed by free text.
    Reply,

    /// A system-generated `Removed a <emoji> reaction from "..."` line.
    Removal,
}

/// One conversation turn of a Zoom meeting chat transcript.
///
/// Records are created in file order and addressed solely by their dense,
/// 0-based `id`. Header fields are immutable once decoded; the link fields
/// (`reaction_ids`, `reply_ids`, `removed`) are the only parts mutated while
/// later records resolve their parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Sequence number, 0-based, assigned in file order.
    pub id: usize,

    /// Wall-clock time of the message, verbatim from the header
    /// (`HH:MM:ss` in real exports, but not validated).
    pub timestamp: String,

    /// Display name of the message author, verbatim from the header.
    pub sender: String,

    /// Display name of the addressee, verbatim from the header
    /// (typically `Everyone:` or a participant name).
    pub receiver: String,

    /// Message category, set once from the first content line.
    pub category: Category,

    /// The payload: message body for [`Category::PlainText`], the emoji for
    /// [`Category::Reaction`]/[`Category::Removal`], the reply free text for
    /// [`Category::Reply`].
    pub text: String,

    /// Ids of later messages that reacted to this one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub reaction_ids: Vec<usize>,

    /// Ids of later messages that replied to this one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub reply_ids: Vec<usize>,

    /// `true` once a [`Category::Removal`] record has successfully been
    /// linked to the reaction it cancels.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde(default)]
    pub removed: bool,
}

impl ChatRecord {
    /// Creates a record from decoded header fields.
    ///
    /// The body fields start empty: `category` defaults to
    /// [`Category::PlainText`] and is overwritten when the first content
    /// line is classified.
    pub fn new(
        id: usize,
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            category: Category::default(),
            text: String::new(),
            reaction_ids: Vec::new(),
            reply_ids: Vec::new(),
            removed: false,
        }
    }

    /// Returns `true` if this record's text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns `true` if any later message reacted or replied to this one.
    pub fn has_children(&self) -> bool {
        !self.reaction_ids.is_empty() || !self.reply_ids.is_empty()
    }
}

/// Ids of records whose parent lookup found no candidate within the
/// lookback window.
///
/// Missing parents are the expected, common case near the start of a
/// transcript (nothing to look back into yet) and for references outside the
/// window; they are statistics, not failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Reaction records that could not be linked to a parent.
    pub missing_reaction_ids: Vec<usize>,

    /// Reply records that could not be linked to a parent.
    pub missing_reply_ids: Vec<usize>,

    /// Removal records that could not be linked to a parent.
    pub missing_removal_ids: Vec<usize>,
}

impl ParseStats {
    /// Total number of records whose parent lookup failed.
    pub fn total_missing(&self) -> usize {
        self.missing_reaction_ids.len()
            + self.missing_reply_ids.len()
            + self.missing_removal_ids.len()
    }
}

/// The whole-file output of a parse.
///
/// `records` is ordered and index-addressable: `records[i].id == i` for all
/// well-formed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// All reconstructed records, in file order.
    pub records: Vec<ChatRecord>,

    /// Missing-parent statistics accumulated during the pass.
    pub stats: ParseStats,
}

impl ParseResult {
    /// Returns the record with the given id, if it exists.
    pub fn get(&self, id: usize) -> Option<&ChatRecord> {
        self.records.get(id)
    }

    /// Number of reconstructed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records were reconstructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
