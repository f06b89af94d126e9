//! Query parsing
//!
//! A raw query becomes a list of [`QueryTerm`]s stored in match order,
//! which is the reverse of typing order: during incremental search the last
//! term is the one still being typed and the one most likely to fail, so it
//! is checked first.

use crate::candidate::MatchCandidate;
use crate::config::DEFAULT_WINDOW_CHARS;
use crate::interface::{QueryTerm, Record};
use crate::prefix::strip_prefix;

/// An immutable, parsed query. Cheap to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    terms: Vec<QueryTerm>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let mut terms: Vec<QueryTerm> = strip_prefix(query)
            .split_whitespace()
            .map(QueryTerm::new)
            .collect();
        terms.reverse();
        Self { terms }
    }

    /// Terms in match order (last typed first).
    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Match a record using the default window. A query without terms
    /// matches everything.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_candidate(&MatchCandidate::prepare(record, DEFAULT_WINDOW_CHARS))
    }

    pub fn matches_candidate(&self, candidate: &MatchCandidate<'_>) -> bool {
        self.terms.iter().all(|term| candidate.matches_term(term))
    }
}
