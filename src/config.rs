//! Parser configuration.
//!
//! # Example
//!
//! ```rust
//! use zoomchat::config::{MalformedHeaderPolicy, ParserConfig};
//! use zoomchat::parser::ZoomChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_lookback(10)
//!     .with_malformed_headers(MalformedHeaderPolicy::Error);
//!
//! let parser = ZoomChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// How many preceding records the parent resolver is willing to scan when
/// searching for the message a snippet quotes.
///
/// Snippets are short (Zoom truncates quoted text around 20 characters), so a
/// wider window raises the odds of a false positive while a narrower one
/// raises the odds of a miss; 30 tracks the reference behavior.
pub const DEFAULT_LOOKBACK: usize = 30;

/// What to do when a header line does not decompose into the expected
/// `<time> From <sender> to <receiver>` token layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedHeaderPolicy {
    /// Ignore the line and keep parsing. Content lines that follow attach to
    /// the previous record, or are dropped if there is none.
    #[default]
    Skip,

    /// Abort the parse with
    /// [`ZoomChatError::MalformedHeader`](crate::error::ZoomChatError::MalformedHeader).
    Error,
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use zoomchat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_lookback(20);
/// assert_eq!(config.lookback, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Size of the parent resolver's lookback window, in records
    /// (default: [`DEFAULT_LOOKBACK`]).
    pub lookback: usize,

    /// Handling of malformed header lines (default: skip).
    pub malformed_headers: MalformedHeaderPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            malformed_headers: MalformedHeaderPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback window size.
    #[must_use]
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Sets the malformed-header policy.
    #[must_use]
    pub fn with_malformed_headers(mut self, policy: MalformedHeaderPolicy) -> Self {
        self.malformed_headers = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.lookback, DEFAULT_LOOKBACK);
        assert_eq!(config.malformed_headers, MalformedHeaderPolicy::Skip);
    }

    #[test]
    fn test_config_builder() {
        let config = ParserConfig::new()
            .with_lookback(10)
            .with_malformed_headers(MalformedHeaderPolicy::Error);
        assert_eq!(config.lookback, 10);
        assert_eq!(config.malformed_headers, MalformedHeaderPolicy::Error);
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&MalformedHeaderPolicy::Skip).unwrap();
        assert_eq!(json, "\"skip\"");
    }
}
