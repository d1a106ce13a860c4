//! Ranking: order letters by descending frequency.
//!
//! Entries are materialized as (letter, count) pairs and sorted with an
//! explicit comparator over whole pairs: count descending first, then the
//! letter according to [`TieBreak`]. Distinct letters never compare equal,
//! so the resulting order is fully determined by the table's contents.

use std::cmp::Ordering;

use serde::Serialize;

use crate::frequency::FrequencyTable;
use crate::letter::Letter;
use crate::options::TieBreak;

/// One ranked (letter, count) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub letter: Letter,
    pub count: u64,
}

/// Compare two entries by rank: the entry that should come first is `Less`.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry, tie_break: TieBreak) -> Ordering {
    b.count.cmp(&a.count).then_with(|| match tie_break {
        TieBreak::LetterDescending => b.letter.cmp(&a.letter),
        TieBreak::LetterAscending => a.letter.cmp(&b.letter),
    })
}

/// Letters ordered by rank. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    /// Rank every letter in the table.
    pub fn from_table(table: &FrequencyTable, tie_break: TieBreak) -> Self {
        let mut entries: Vec<RankedEntry> = table
            .iter()
            .map(|(letter, count)| RankedEntry { letter, count })
            .collect();
        entries.sort_by(|a, b| compare_entries(a, b, tie_break));

        Self { entries }
    }

    /// The highest-ranked entry.
    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    /// Count of the top entry, which is the maximum count (0 when empty).
    pub fn max_count(&self) -> u64 {
        self.first().map_or(0, |entry| entry.count)
    }

    /// The first `n` entries (or all of them if there are fewer).
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
