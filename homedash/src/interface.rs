//! Home Dash matcher interface definition
//!
//! Shared types handed between the caller and the matcher. Callers own the
//! records; the matcher only ever reads `title` and `url`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A page the user might be looking for (history entry, bookmark, open tab).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub url: String,
}

impl Record {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Build a record from possibly-missing fields. Missing text matches
    /// exactly like empty text.
    pub fn from_parts(title: Option<&str>, url: Option<&str>) -> Self {
        Self::new(title.unwrap_or_default(), url.unwrap_or_default())
    }
}

/// One whitespace-delimited piece of a query.
///
/// `ignore_case` is inferred from the term itself: a term without uppercase
/// letters is matched against lowercased text, anything else is matched as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTerm {
    pub term: String,
    pub ignore_case: bool,
}

impl QueryTerm {
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let ignore_case = term == term.to_lowercase();
        Self { term, ignore_case }
    }
}

/// Error type for matcher setup. Matching itself never fails.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
