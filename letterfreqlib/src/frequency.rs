//! Frequency tabulation: count occurrences per distinct letter.
//!
//! A [`FrequencyTable`] is built once from the extracted letters and is
//! immutable afterwards. It carries no ordering; ranking happens in
//! [`crate::ranking`].

use std::collections::hash_map;
use std::collections::HashMap;

use serde::Serialize;

use crate::letter::{letters, Letter};

/// Mapping from letter to occurrence count.
///
/// Only letters that actually occurred are present, so every count is at
/// least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<Letter, u64>,
}

impl FrequencyTable {
    /// Tabulate a sequence of letters in a single pass.
    pub fn from_letters<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = Letter>,
    {
        let mut counts = HashMap::new();
        for letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Extract and tabulate the letters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_letters(letters(text))
    }

    /// Like [`FrequencyTable::from_text`], treating absent text as empty.
    pub fn from_optional_text(text: Option<&str>) -> Self {
        Self::from_text(text.unwrap_or_default())
    }

    /// Count for a letter (0 if it never occurred).
    pub fn get(&self, letter: Letter) -> u64 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of letters in the input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Highest count in the table (0 when empty).
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Iterate over (letter, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u64)> + '_ {
        self.counts.iter().map(|(letter, count)| (*letter, *count))
    }
}

impl FromIterator<Letter> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::from_letters(iter)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Letter, &'a u64);
    type IntoIter = hash_map::Iter<'a, Letter, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::fold(c).unwrap()
    }

    #[test]
    fn test_counts_per_letter() {
        let table = FrequencyTable::from_text("aabbbcccc");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(letter('A')), 2);
        assert_eq!(table.get(letter('B')), 3);
        assert_eq!(table.get(letter('C')), 4);
        assert_eq!(table.get(letter('D')), 0);
    }

    #[test]
    fn test_total_matches_alphabetic_chars() {
        let text = "The quick brown fox, 42 times!";
        let table = FrequencyTable::from_text(text);
        let expected = text.chars().filter(|c| c.is_alphabetic()).count() as u64;
        assert_eq!(table.total(), expected);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(FrequencyTable::from_text("aA"), FrequencyTable::from_text("AA"));
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_text("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_count(), 0);
    }

    #[test]
    fn test_absent_input_is_empty() {
        let table = FrequencyTable::from_optional_text(None);
        assert!(table.is_empty());
        assert_eq!(table, FrequencyTable::default());
    }

    #[test]
    fn test_max_count() {
        let table = FrequencyTable::from_text("Hi! Hi? hhh");
        assert_eq!(table.get(letter('H')), 5);
        assert_eq!(table.max_count(), 5);
    }

    #[test]
    fn test_collect_from_letters() {
        let table: FrequencyTable = crate::letter::letters("xyx").collect();
        assert_eq!(table.get(letter('X')), 2);
        assert_eq!(table.get(letter('Y')), 1);
        assert_eq!(table.iter().count(), 2);
    }
}
