//! # letterfreqlib
//!
//! Count the letters in a text and chart the most common ones.
//!
//! ## Overview
//!
//! The library is a small, pure pipeline. Each stage consumes only the
//! previous stage's output:
//!
//! - **Extract**: keep alphabetic characters, folded to upper case ([`letter`])
//! - **Tabulate**: count occurrences per letter ([`FrequencyTable`])
//! - **Rank**: order by descending count with an explicit tie-break ([`RankedList`])
//! - **Report**: render the top letters as a proportional bar chart ([`Report`])
//!
//! Nothing here performs I/O. Obtaining the text and printing the report are
//! left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use letterfreqlib::{build_report, LetterAnalysis, ReportConfig};
//!
//! let analysis = LetterAnalysis::new("aabbbcccc");
//! let top = analysis.ranked().first().unwrap();
//! assert_eq!(top.letter.as_char(), 'C');
//! assert_eq!(top.count, 4);
//!
//! let report = build_report("aabbbcccc", &ReportConfig::new().bar_width(4)).unwrap();
//! assert_eq!(report, "\nMost common letters:\n\nC: 4 ####\nB: 3 ###\nA: 2 ##");
//! ```

pub mod analysis;
pub mod error;
pub mod frequency;
pub mod letter;
pub mod options;
pub mod ranking;
pub mod report;

pub use analysis::{build_report, LetterAnalysis};
pub use error::LetterFreqError;
pub use frequency::FrequencyTable;
pub use letter::{extract_letters, letters, Letter};
pub use options::{RawReportConfig, ReportConfig, TieBreak};
pub use ranking::{compare_entries, RankedEntry, RankedList};
pub use report::{bar_length, count_digits, render_report, Report, ReportLine, REPORT_HEADER};

/// Result type for letterfreqlib operations
pub type Result<T> = std::result::Result<T, LetterFreqError>;
