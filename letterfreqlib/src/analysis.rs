//! High-level analysis API.
//!
//! A [`LetterAnalysis`] runs the whole pipeline once for a given text:
//!
//! 1. Extract letters
//! 2. Tabulate them into a [`FrequencyTable`]
//! 3. Rank the table into a [`RankedList`]
//!
//! The value is immutable. Analysing a different text means building a new
//! one; nothing is recomputed in place.

use std::borrow::Cow;

use log::debug;

use crate::frequency::FrequencyTable;
use crate::options::{ReportConfig, TieBreak};
use crate::ranking::RankedList;
use crate::report::Report;
use crate::Result;

/// Letter statistics for one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterAnalysis {
    text: String,
    /// Number of letters found in the text
    letters_total: u64,
    table: FrequencyTable,
    /// Rule `ranked` was ordered with
    tie_break: TieBreak,
    ranked: RankedList,
}

impl LetterAnalysis {
    /// Analyse `text`, breaking ties by descending letter.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_tie_break(text, TieBreak::default())
    }

    /// Analyse `text` with an explicit tie-break rule.
    pub fn with_tie_break(text: impl Into<String>, tie_break: TieBreak) -> Self {
        let text = text.into();
        let table = FrequencyTable::from_text(&text);
        let ranked = RankedList::from_table(&table, tie_break);
        let letters_total = table.total();

        debug!(
            "analysed {} chars: {} letters, {} distinct",
            text.chars().count(),
            letters_total,
            table.len()
        );

        Self {
            text,
            letters_total,
            table,
            tie_break,
            ranked,
        }
    }

    /// Analyse possibly absent text; `None` behaves like an empty string.
    pub fn from_optional(text: Option<&str>) -> Self {
        Self::new(text.unwrap_or_default())
    }

    /// The analysed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the text.
    pub fn letters_total(&self) -> u64 {
        self.letters_total
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn ranked(&self) -> &RankedList {
        &self.ranked
    }

    /// Tie-break rule of [`LetterAnalysis::ranked`].
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Build the structured report for this text.
    ///
    /// Ties follow `config.tie_break`. When it differs from the rule this
    /// analysis was built with, the table is ranked again for the report;
    /// the stored ranking is left untouched.
    pub fn report(&self, config: &ReportConfig) -> Result<Report> {
        let ranked = if config.tie_break == self.tie_break {
            Cow::Borrowed(&self.ranked)
        } else {
            debug!(
                "re-ranking with {:?} (analysis uses {:?})",
                config.tie_break, self.tie_break
            );
            Cow::Owned(RankedList::from_table(&self.table, config.tie_break))
        };

        let report = Report::from_ranked(&ranked, config)?;
        debug!(
            "rendered {} of {} ranked letters",
            report.lines.len(),
            ranked.len()
        );
        Ok(report)
    }
}

/// Count, rank and render `text` in one call.
pub fn build_report(text: &str, config: &ReportConfig) -> Result<String> {
    let analysis = LetterAnalysis::with_tie_break(text, config.tie_break);
    Ok(analysis.report(config)?.to_string())
}
