//! Letter extraction: the first stage of the pipeline.
//!
//! Text is scanned left to right and every alphabetic character is folded
//! to its canonical upper-case form. Everything else (digits, punctuation,
//! whitespace, symbols) is dropped.
//!
//! Classification follows Unicode's `Alphabetic` property, so `é`, `ж` and
//! `λ` are letters just like `a`. Folding goes through lower case first and
//! then to upper case, taking each step only when it maps to exactly one
//! `char`. Both case forms of a letter therefore land on the same canonical
//! character even when the full upper-case mapping expands (`ß` and `ẞ`
//! both fold to `ß`, `ᾀ` and `ᾈ` both fold to `ᾀ`).

use std::fmt;

use serde::Serialize;

/// A single canonical (case-folded) alphabetic character.
///
/// Equality and ordering follow the underlying character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Letter(char);

impl Letter {
    /// Fold a character into a Letter, or `None` if it is not alphabetic.
    pub fn fold(c: char) -> Option<Self> {
        if !c.is_alphabetic() {
            return None;
        }

        let lower = single_char(c.to_lowercase()).unwrap_or(c);
        let folded = single_char(lower.to_uppercase()).unwrap_or(lower);
        Some(Letter(folded))
    }

    /// The canonical character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Lazily iterate over the letters of `text`, in order.
pub fn letters(text: &str) -> impl Iterator<Item = Letter> + '_ {
    text.chars().filter_map(Letter::fold)
}

/// Collect the letters of `text`, in order.
pub fn extract_letters(text: &str) -> Vec<Letter> {
    letters(text).collect()
}
