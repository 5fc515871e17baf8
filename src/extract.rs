//! Category classification and payload extraction.
//!
//! Zoom renders reactions, threaded replies and reaction removals as
//! system-generated English phrases inside the message body:
//!
//! ```text
//! Reacted to "좋은 아침이예요!" with 🙌
//! Replying to "주피터돌리다가 크..."
//! Removed a 👍 reaction from "plt.rcParams['font.f..."
//! ```
//!
//! The quoted snippet is truncated with literal dots when the quoted message
//! is long; those dots are stripped so the snippet can be matched by
//! substring containment against earlier records (see [`crate::resolve`]).
//!
//! Extraction never fails: a body that does not match its category's pattern
//! yields empty values, and the empty snippet simply fails to resolve.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::Category;

/// `Reacted to "<snippet>" with <emoji>`, where the snippet may wrap across
/// continuation lines before the closing marker appears.
static REACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^Reacted to "(.*?)" with (.*)$"#).unwrap());

/// `Replying to "<snippet>"` — matched against the opening line only; the
/// greedy group runs to the last quote on that line.
static REPLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^Replying to "(.*)""#).unwrap());

/// `Removed a <emoji> reaction from "<rest>`.
static REMOVAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^Removed a (.*?) reaction from "(.*)$"#).unwrap());

/// Classifies a message body by its leading system phrase.
///
/// Applied to the first content line of a record (leading tabs stripped);
/// first match wins, anything else is plain text.
///
/// # Example
///
/// ```rust
/// use zoomchat::extract::classify_category;
/// use zoomchat::record::Category;
///
/// assert_eq!(classify_category("Reacted to \"예압\" with 🙌"), Category::Reaction);
/// assert_eq!(classify_category("좋은 아침이예요!"), Category::PlainText);
/// ```
pub fn classify_category(body: &str) -> Category {
    if body.starts_with("Reacted to ") {
        Category::Reaction
    } else if body.starts_with("Replying to ") {
        Category::Reply
    } else if body.starts_with("Removed a ") {
        Category::Removal
    } else {
        Category::PlainText
    }
}

/// Extracts `(emoji, snippet)` from a reaction body.
///
/// The snippet is everything between `Reacted to "` and the *first*
/// `" with `, with trailing truncation dots stripped; the emoji is everything
/// after the marker, kept verbatim (multi-codepoint sequences intact).
/// Returns empty strings if the body does not match.
pub fn extract_reaction(body: &str) -> (String, String) {
    match REACTION_RE.captures(body) {
        Some(caps) => {
            let snippet = caps[1].trim_end_matches('.').to_string();
            let emoji = caps[2].to_string();
            (emoji, snippet)
        }
        None => (String::new(), String::new()),
    }
}

/// Extracts `(snippet, reply_text)` from a reply body.
///
/// The snippet is the quoted text up to the last `"` on the opening line,
/// with trailing truncation dots stripped. The reply free text is the join
/// of all continuation lines (leading tabs stripped, newline-separated),
/// excluding the very first continuation line — the transcript tool emits a
/// blank spacer line between the quote and the reply text.
///
/// A malformed opening line yields an empty snippet; the reply text is still
/// assembled from the continuation lines.
pub fn extract_reply(body: &str) -> (String, String) {
    let opening = body.lines().next().unwrap_or_default();
    let snippet = match REPLY_RE.captures(opening) {
        Some(caps) => caps[1].trim_end_matches('.').to_string(),
        None => String::new(),
    };

    let reply_text = body
        .lines()
        .skip(2)
        .map(|line| line.trim_start_matches('\t'))
        .collect::<Vec<_>>()
        .join("\n");

    (snippet, reply_text)
}

/// Extracts `(emoji, snippet)` from a removal body.
///
/// The emoji sits between `Removed a ` and ` reaction from`. The snippet is
/// the text after `from "` with the final two characters dropped (closing
/// quote plus the period Zoom appends) and trailing truncation dots further
/// stripped. Returns empty strings if the body does not match.
pub fn extract_removal(body: &str) -> (String, String) {
    match REMOVAL_RE.captures(body) {
        Some(caps) => {
            let emoji = caps[1].to_string();
            let mut rest = caps[2].chars();
            rest.next_back();
            rest.next_back();
            let snippet = rest.as_str().trim_end_matches('.').to_string();
            (emoji, snippet)
        }
        None => (String::new(), String::new()),
    }
}
