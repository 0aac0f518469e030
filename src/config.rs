//! Parser configuration.
//!
//! [`ParserConfig`] holds the few knobs the parser exposes. The defaults
//! reproduce the behavior expected of WhatsApp text exports; most callers
//! never need to touch them.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_year_range(1995, 2035)
//!     .with_lenient_fallback(false);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Configuration for chat log parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Earliest accepted timestamp year (default: 2000)
    pub min_year: i32,

    /// Latest accepted timestamp year (default: 2030)
    pub max_year: i32,

    /// Run the lenient recovery pass when no header line matched (default: true)
    pub lenient_fallback: bool,

    /// Lines shorter than this are ignored by the lenient pass (default: 10)
    pub min_lenient_line_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_year: Self::DEFAULT_MIN_YEAR,
            max_year: Self::DEFAULT_MAX_YEAR,
            lenient_fallback: true,
            min_lenient_line_len: 10,
        }
    }
}

impl ParserConfig {
    pub const DEFAULT_MIN_YEAR: i32 = 2000;
    pub const DEFAULT_MAX_YEAR: i32 = 2030;

    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive window of accepted timestamp years.
    #[must_use]
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Enables or disables the lenient recovery pass.
    #[must_use]
    pub fn with_lenient_fallback(mut self, enabled: bool) -> Self {
        self.lenient_fallback = enabled;
        self
    }

    /// Sets the minimum line length considered by the lenient pass.
    #[must_use]
    pub fn with_min_lenient_line_len(mut self, len: usize) -> Self {
        self.min_lenient_line_len = len;
        self
    }

    /// Accepted years as a range.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.years(), 2000..=2030);
        assert!(config.lenient_fallback);
        assert_eq!(config.min_lenient_line_len, 10);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new()
            .with_year_range(1990, 2040)
            .with_lenient_fallback(false)
            .with_min_lenient_line_len(4);

        assert!(config.years().contains(&1995));
        assert!(!config.lenient_fallback);
        assert_eq!(config.min_lenient_line_len, 4);
    }

    #[test]
    fn test_serde_partial() {
        let config: ParserConfig = serde_json::from_str(r#"{"max_year": 2040}"#).unwrap();
        assert_eq!(config.max_year, 2040);
        assert_eq!(config.min_year, 2000);
        assert!(config.lenient_fallback);
    }
}
