//! Input options for ranking and report rendering.
//!
//! [`ReportConfig`] is the validated configuration the reporter consumes.
//! [`RawReportConfig`] is the loosely typed form read from user input
//! (CLI flags or a JSON document); converting it checks every field.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LetterFreqError;
use crate::Result;

/// Default number of ranked letters shown in a report.
pub const DEFAULT_MAX_ENTRIES: usize = 20;
/// Default length of the bar drawn for the most frequent letter.
pub const DEFAULT_BAR_WIDTH: usize = 20;
pub const DEFAULT_BAR_SYMBOL: char = '#';
pub const DEFAULT_PADDING_SYMBOL: char = ' ';

/// Secondary ordering among letters with the same count.
///
/// Counts always rank descending; this only decides ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Higher character code first (Z before A)
    #[default]
    LetterDescending,
    /// Lower character code first (A before Z)
    LetterAscending,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" | "descending" | "letter_descending" => Ok(TieBreak::LetterDescending),
            "asc" | "ascending" | "letter_ascending" => Ok(TieBreak::LetterAscending),
            _ => Err(format!("Unknown tie-break: {}", s)),
        }
    }
}

/// Report rendering configuration.
///
/// Build it with the setters or from a [`RawReportConfig`]; it is not
/// deserializable directly so that user input always passes `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of ranked letters to show
    pub max_entries: usize,
    /// Bar length for the top letter; other bars scale proportionally
    pub bar_width: usize,
    /// Character used to draw bars
    pub bar_symbol: char,
    /// Character used to right-align counts
    pub padding_symbol: char,
    /// Ordering among letters with equal counts
    pub tie_break: TieBreak,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_symbol: DEFAULT_BAR_SYMBOL,
            padding_symbol: DEFAULT_PADDING_SYMBOL,
            tie_break: TieBreak::default(),
        }
    }
}

impl ReportConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the number of ranked letters shown
    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Builder: set the maximum bar length
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Builder: set the bar character
    pub fn bar_symbol(mut self, symbol: char) -> Self {
        self.bar_symbol = symbol;
        self
    }

    /// Builder: set the padding character
    pub fn padding_symbol(mut self, symbol: char) -> Self {
        self.padding_symbol = symbol;
        self
    }

    /// Builder: set the tie-break rule
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Check that the configuration renders a well-formed report.
    ///
    /// Control characters (newlines, tabs, ...) as symbols would break the
    /// one-line-per-letter layout.
    pub fn validate(&self) -> Result<()> {
        check_symbol("bar_symbol", self.bar_symbol)?;
        check_symbol("padding_symbol", self.padding_symbol)?;
        Ok(())
    }
}

fn check_symbol(field: &str, symbol: char) -> Result<()> {
    if symbol.is_control() {
        return Err(LetterFreqError::invalid_config(
            field,
            format!("control character {:?} is not a printable symbol", symbol),
        ));
    }
    Ok(())
}

/// Unvalidated report configuration, as supplied by a user.
///
/// Counts are signed so that negative input can be reported instead of
/// silently wrapping. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawReportConfig {
    pub max_entries: Option<i64>,
    pub bar_width: Option<i64>,
    pub bar_symbol: Option<char>,
    pub padding_symbol: Option<char>,
    pub tie_break: Option<TieBreak>,
}

impl TryFrom<RawReportConfig> for ReportConfig {
    type Error = LetterFreqError;

    fn try_from(raw: RawReportConfig) -> Result<Self> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            max_entries: non_negative("max_entries", raw.max_entries, defaults.max_entries)?,
            bar_width: non_negative("bar_width", raw.bar_width, defaults.bar_width)?,
            bar_symbol: raw.bar_symbol.unwrap_or(defaults.bar_symbol),
            padding_symbol: raw.padding_symbol.unwrap_or(defaults.padding_symbol),
            tie_break: raw.tie_break.unwrap_or(defaults.tie_break),
        };
        config.validate()?;
        Ok(config)
    }
}

fn non_negative(field: &str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v).map_err(|_| {
            LetterFreqError::invalid_config(field, format!("must not be negative (got {})", v))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.max_entries, 20);
        assert_eq!(config.bar_width, 20);
        assert_eq!(config.bar_symbol, '#');
        assert_eq!(config.padding_symbol, ' ');
        assert_eq!(config.tie_break, TieBreak::LetterDescending);
    }

    #[test]
    fn test_report_config_builder() {
        let config = ReportConfig::new()
            .max_entries(5)
            .bar_width(40)
            .bar_symbol('*')
            .padding_symbol('0')
            .tie_break(TieBreak::LetterAscending);
        assert_eq!(config.max_entries, 5);
        assert_eq!(config.bar_width, 40);
        assert_eq!(config.bar_symbol, '*');
        assert_eq!(config.padding_symbol, '0');
        assert_eq!(config.tie_break, TieBreak::LetterAscending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_control_symbols() {
        let err = ReportConfig::new().bar_symbol('\n').validate().unwrap_err();
        assert!(matches!(
            err,
            LetterFreqError::InvalidConfig { ref field, .. } if field == "bar_symbol"
        ));
        assert!(ReportConfig::new().padding_symbol('\t').validate().is_err());
    }

    #[test]
    fn test_tie_break_from_str() {
        assert_eq!(TieBreak::from_str("desc").unwrap(), TieBreak::LetterDescending);
        assert_eq!(TieBreak::from_str("ASC").unwrap(), TieBreak::LetterAscending);
        assert_eq!(
            TieBreak::from_str("letter_ascending").unwrap(),
            TieBreak::LetterAscending
        );
        assert!(TieBreak::from_str("random").is_err());
    }

    #[test]
    fn test_raw_config_defaults() {
        let config = ReportConfig::try_from(RawReportConfig::default()).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_raw_config_rejects_negative() {
        let raw = RawReportConfig {
            max_entries: Some(-1),
            ..Default::default()
        };
        let err = ReportConfig::try_from(raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration for 'max_entries': must not be negative (got -1)"
        );

        let raw = RawReportConfig {
            bar_width: Some(-20),
            ..Default::default()
        };
        assert!(ReportConfig::try_from(raw).is_err());
    }

    #[test]
    fn test_raw_config_from_json() {
        let raw: RawReportConfig = serde_json::from_str(
            r#"{"max-entries": 3, "bar-symbol": "=", "tie-break": "letter_ascending"}"#,
        )
        .unwrap();
        let config = ReportConfig::try_from(raw).unwrap();
        assert_eq!(config.max_entries, 3);
        assert_eq!(config.bar_width, 20);
        assert_eq!(config.bar_symbol, '=');
        assert_eq!(config.tie_break, TieBreak::LetterAscending);
    }
}
