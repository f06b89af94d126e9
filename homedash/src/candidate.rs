//! Match candidate: a record's title and url prepared for boundary matching.
//!
//! Preparation borrows the original-case text straight from the record. ASCII
//! text only allocates the lowercase copy; other text also gets a boundary map
//! aligned with that copy. Candidates live for one match call.

use std::borrow::Cow;

use crate::boundary::matches_boundary;
use crate::config::DEFAULT_WINDOW_CHARS;
use crate::interface::{QueryTerm, Record};
use crate::prefix::strip_prefix;

/// Stands in for a non-ASCII char in the boundary map. Never an ASCII letter.
const NON_LETTER_FILL: char = '_';

/// Prefix-stripped, window-truncated text with a lowercase copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText<'a> {
    original: &'a str,
    lower: String,
    /// Byte-aligned with `lower`, carrying the original case of ASCII letters.
    lower_boundaries: Cow<'a, str>,
}

impl<'a> PreparedText<'a> {
    /// `window_units` counts UTF-16 code units.
    pub fn new(text: &'a str, window_units: usize) -> Self {
        let original = truncate_utf16(strip_prefix(text), window_units);
        if original.is_ascii() {
            return Self {
                original,
                lower: original.to_ascii_lowercase(),
                lower_boundaries: Cow::Borrowed(original),
            };
        }

        let mut lower_boundaries = String::with_capacity(original.len());
        for c in original.chars() {
            if c.is_ascii() {
                lower_boundaries.push(c);
            } else {
                let width: usize = c.to_lowercase().map(char::len_utf8).sum();
                lower_boundaries.extend(std::iter::repeat(NON_LETTER_FILL).take(width));
            }
        }
        Self {
            original,
            lower: original.to_lowercase(),
            lower_boundaries: Cow::Owned(lower_boundaries),
        }
    }

    pub fn original(&self) -> &str {
        self.original
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Classification text for searches in [`lower`](Self::lower).
    pub fn lower_boundaries(&self) -> &str {
        &self.lower_boundaries
    }
}

/// Prepare text with the default window.
pub fn prepare_match_text(text: &str) -> PreparedText<'_> {
    PreparedText::new(text, DEFAULT_WINDOW_CHARS)
}

/// Both searchable fields of a record.
#[derive(Debug, Clone)]
pub struct MatchCandidate<'a> {
    pub title: PreparedText<'a>,
    pub url: PreparedText<'a>,
}

impl<'a> MatchCandidate<'a> {
    pub fn prepare(record: &'a Record, window_units: usize) -> Self {
        Self {
            title: PreparedText::new(&record.title, window_units),
            url: PreparedText::new(&record.url, window_units),
        }
    }

    /// A term matches if it boundary-matches either field.
    pub fn matches_term(&self, term: &QueryTerm) -> bool {
        let needle = term.term.as_str();
        if term.ignore_case {
            matches_boundary(needle, self.title.lower(), self.title.lower_boundaries())
                || matches_boundary(needle, self.url.lower(), self.url.lower_boundaries())
        } else {
            matches_boundary(needle, self.title.original(), self.title.original())
                || matches_boundary(needle, self.url.original(), self.url.original())
        }
    }
}

/// Keep at most `max_units` UTF-16 code units, never splitting a char.
fn truncate_utf16(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &text[..idx];
        }
    }
    text
}
