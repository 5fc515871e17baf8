//! The transcript parser.
//!
//! Zoom "meeting saved chat" exports interleave two kinds of lines:
//!
//! ```text
//! 09:00:01 From 박세훈 to Everyone:
//! 	좋은 아침이예요!
//! 09:00:05 From 김또깡 to Everyone:
//! 	Reacted to "좋은 아침이예요!" with 🙌
//! ```
//!
//! A line without a tab is a **header** and starts a new record; a line with
//! a tab is **content** and extends the current record's body. The parser
//! makes a single forward pass: each record is finalized (classified,
//! extracted, parent-resolved) the moment the next header arrives, so the
//! resolver only ever reads already-finalized earlier records.
//!
//! # Example
//!
//! ```rust
//! use zoomchat::parser::ZoomChatParser;
//!
//! let transcript = "09:00:01 From Alice to Everyone:\n\tGood morning!\n\
//!                   09:00:05 From Bob to Everyone:\n\tReacted to \"Good morning!\" with 🙌";
//!
//! let result = ZoomChatParser::new().parse_str(transcript)?;
//! assert_eq!(result.records.len(), 2);
//! # Ok::<(), zoomchat::ZoomChatError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{MalformedHeaderPolicy, ParserConfig};
use crate::error::{Result, ZoomChatError};
use crate::extract::{classify_category, extract_reaction, extract_removal, extract_reply};
use crate::record::{Category, ChatRecord, ParseResult};
use crate::resolve::resolve_parent;

/// Structural kind of a raw transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// No tab anywhere in the line: introduces a new record's metadata.
    Header,
    /// Carries or continues a message body.
    Content,
}

/// Classifies one raw line as header or content.
///
/// The single structural signal separating "a new message begins here" from
/// "this line continues the previous message" is the presence of a literal
/// tab character.
pub fn classify_line(line: &str) -> LineKind {
    if line.contains('\t') {
        LineKind::Content
    } else {
        LineKind::Header
    }
}

/// Decodes a header line into a fresh record.
///
/// Header layout: `<time> From <sender> to <receiver>`, split on single
/// spaces; the connectives at tokens 1 and 3 are discarded. Returns `None`
/// for fewer than five tokens.
fn decode_header(line: &str, id: usize) -> Option<ChatRecord> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < 5 {
        return None;
    }
    Some(ChatRecord::new(id, tokens[0], tokens[2], tokens[4]))
}

/// Parser for Zoom meeting saved chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use zoomchat::parser::ZoomChatParser;
///
/// let parser = ZoomChatParser::new();
/// let result = parser.parse("meeting_saved_chat.txt".as_ref())?;
/// println!("{} records, {} unresolved", result.len(), result.stats.total_missing());
/// # Ok::<(), zoomchat::ZoomChatError>(())
/// ```
pub struct ZoomChatParser {
    config: ParserConfig,
}

impl ZoomChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file.
    ///
    /// A path that cannot be opened yields [`ZoomChatError::NoInput`] before
    /// any parsing begins.
    pub fn parse(&self, path: &Path) -> Result<ParseResult> {
        let file = File::open(path).map_err(|_| ZoomChatError::no_input(path))?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parses a transcript from an already-opened readable stream.
    ///
    /// This is the core entry point; the stream's lifecycle belongs to the
    /// caller. I/O failures while reading surface as [`ZoomChatError::Io`].
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut result = ParseResult::default();
        // Raw content lines of the in-progress record.
        let mut body: Vec<String> = Vec::new();
        let mut in_body = false;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match classify_line(&line) {
                LineKind::Header => {
                    if let Some(record) = decode_header(&line, result.records.len()) {
                        if in_body {
                            finalize_record(&mut result, &body, self.config.lookback);
                        }
                        body.clear();
                        result.records.push(record);
                        in_body = true;
                    } else {
                        match self.config.malformed_headers {
                            MalformedHeaderPolicy::Skip => {}
                            MalformedHeaderPolicy::Error => {
                                return Err(ZoomChatError::malformed_header(index + 1, line));
                            }
                        }
                    }
                }
                LineKind::Content => {
                    if !in_body {
                        // Orphan content line before any header.
                        continue;
                    }
                    if body.is_empty() {
                        if let Some(record) = result.records.last_mut() {
                            record.category = classify_category(line.trim_start_matches('\t'));
                        }
                    }
                    body.push(line);
                }
            }
        }

        // End of stream finalizes the in-progress record; EOF in either
        // state is normal completion.
        if in_body {
            finalize_record(&mut result, &body, self.config.lookback);
        }

        Ok(result)
    }

    /// Parses a transcript from a string.
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }
}

impl Default for ZoomChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs extraction and parent resolution for the newest record.
///
/// Only earlier records' link fields (`reaction_ids`, `reply_ids`) and this
/// record's `text`/`removed` are mutated; header fields and categories of
/// earlier records are never touched.
fn finalize_record(result: &mut ParseResult, raw_body: &[String], lookback: usize) {
    let Some(id) = result.records.len().checked_sub(1) else {
        return;
    };

    let joined = raw_body.join("\n");
    let body = joined.trim_start_matches('\t');

    match result.records[id].category {
        Category::PlainText => {
            result.records[id].text = body.to_string();
        }
        Category::Reaction => {
            let (emoji, snippet) = extract_reaction(body);
            result.records[id].text = emoji;
            match resolve_parent(&snippet, id, &result.records, lookback) {
                Some(parent_id) => result.records[parent_id].reaction_ids.push(id),
                None => result.stats.missing_reaction_ids.push(id),
            }
        }
        Category::Reply => {
            let (snippet, reply_text) = extract_reply(body);
            result.records[id].text = reply_text;
            match resolve_parent(&snippet, id, &result.records, lookback) {
                Some(parent_id) => result.records[parent_id].reply_ids.push(id),
                None => result.stats.missing_reply_ids.push(id),
            }
        }
        Category::Removal => {
            let (emoji, snippet) = extract_removal(body);
            result.records[id].text = emoji;
            match resolve_parent(&snippet, id, &result.records, lookback) {
                Some(parent_id) => {
                    // The removal cancels the parent's record of having been
                    // reacted to by the remover.
                    if let Some(pos) = result.records[parent_id]
                        .reaction_ids
                        .iter()
                        .position(|&reactor| reactor == id)
                    {
                        result.records[parent_id].reaction_ids.remove(pos);
                    }
                    result.records[id].removed = true;
                }
                None => result.stats.missing_removal_ids.push(id),
            }
        }
    }
}
