//! Report rendering: present ranked letters as a textual bar chart.
//!
//! This is a pure presentation layer. Counting and ordering have already
//! happened; the reporter only takes the top entries, aligns their counts
//! and scales each bar against the top count.
//!
//! ```text
//!
//! Most common letters:
//!
//! C: 4 ####################
//! B: 3 ###############
//! A: 2 ##########
//! ```

use std::fmt;

use serde::Serialize;

use crate::letter::Letter;
use crate::options::ReportConfig;
use crate::ranking::{RankedEntry, RankedList};
use crate::Result;

/// Title line of every report.
pub const REPORT_HEADER: &str = "Most common letters:";

/// Number of decimal digits in `n` (0 has none).
pub fn count_digits(mut n: u64) -> usize {
    let mut digits = 0;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Bar length for `count`, scaled so that `max_count` maps to `width`.
///
/// Rounds half up. Returns 0 when `max_count` is 0.
pub fn bar_length(count: u64, max_count: u64, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    let scaled = 2 * width as u128 * count as u128 + max_count as u128;
    let length = scaled / (2 * max_count as u128);
    usize::try_from(length).unwrap_or(usize::MAX)
}

/// One rendered row of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub letter: Letter,
    pub count: u64,
    /// Alignment prefix placed before the count
    pub padding: String,
    pub bar_length: usize,
    /// The full line as it appears in the report
    pub text: String,
}

impl ReportLine {
    fn render(
        entry: &RankedEntry,
        max_count: u64,
        max_digits: usize,
        config: &ReportConfig,
    ) -> Self {
        let padding_len = max_digits.saturating_sub(count_digits(entry.count));
        let padding: String = std::iter::repeat(config.padding_symbol)
            .take(padding_len)
            .collect();
        let bar_length = bar_length(entry.count, max_count, config.bar_width);
        let bar: String = std::iter::repeat(config.bar_symbol)
            .take(bar_length)
            .collect();
        let text = format!("{}: {}{} {}", entry.letter, padding, entry.count, bar);

        ReportLine {
            letter: entry.letter,
            count: entry.count,
            padding,
            bar_length,
            text,
        }
    }
}

/// A complete bar-chart report.
///
/// `Display` produces the final text: a blank line, the header, then one
/// line per entry, each preceded by a line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub header: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Build a report from ranked letters.
    ///
    /// Fails only if `config` does not validate.
    pub fn from_ranked(ranked: &RankedList, config: &ReportConfig) -> Result<Self> {
        config.validate()?;

        let max_count = ranked.max_count();
        let max_digits = count_digits(max_count);
        let lines = ranked
            .top(config.max_entries)
            .iter()
            .map(|entry| ReportLine::render(entry, max_count, max_digits, config))
            .collect();

        Ok(Report {
            header: REPORT_HEADER.to_string(),
            lines,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self.header)?;
        for line in &self.lines {
            write!(f, "\n{}", line.text)?;
        }
        Ok(())
    }
}

/// Render ranked letters straight to report text.
pub fn render_report(ranked: &RankedList, config: &ReportConfig) -> Result<String> {
    Ok(Report::from_ranked(ranked, config)?.to_string())
}
