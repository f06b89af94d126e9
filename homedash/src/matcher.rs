//! QueryMatcher - main entry point for matching pages against a query
//!
//! Incremental search asks the same question for every visible page on
//! every keystroke, so the parsed form of the last query is kept in a
//! single slot. A new query string replaces the slot; nothing accumulates.
//!
//! Concurrency Model:
//! - `QueryMatcher` is owned by one search session and mutated through `&mut self`
//! - `SharedQueryMatcher` serializes the cache check-and-replace behind a mutex
//! - Batch filtering evaluates records on the rayon pool against an immutable `ParsedQuery`

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::candidate::MatchCandidate;
use crate::config::MatchConfig;
use crate::interface::{QueryTerm, Record};
use crate::query::ParsedQuery;

/// Per-session matcher holding the single-slot parsed query cache.
#[derive(Debug, Default)]
pub struct QueryMatcher {
    config: MatchConfig,
    last_query: Option<String>,
    parsed: ParsedQuery,
    parse_count: u64,
}

impl QueryMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Check if a query matches some page information.
    ///
    /// The empty query matches everything and leaves the cache untouched.
    pub fn matches_page(&mut self, query: &str, record: &Record) -> bool {
        if query.is_empty() {
            return true;
        }

        let candidate = MatchCandidate::prepare(record, self.config.window_chars);
        self.parsed(query).matches_candidate(&candidate)
    }

    /// Keep the records matching `query`, in their original order.
    pub fn filter<'a>(&mut self, query: &str, records: &'a [Record]) -> Vec<&'a Record> {
        if query.is_empty() {
            return records.iter().collect();
        }

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let window_chars = self.config.window_chars;
        let parsed = self.parsed(query);
        let matched: Vec<&Record> = records
            .par_iter()
            .filter(|record| parsed.matches_candidate(&MatchCandidate::prepare(record, window_chars)))
            .collect();

        debug!(total = records.len(), matched = matched.len(), "filtered records");
        #[cfg(feature = "perf-log")]
        debug!(elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0, "filter timing");

        matched
    }

    /// Parsed terms for `query` in match order, through the cache.
    pub fn terms(&mut self, query: &str) -> &[QueryTerm] {
        self.parsed(query).terms()
    }

    /// How many times a query string has actually been parsed.
    pub fn parse_count(&self) -> u64 {
        self.parse_count
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Drop the cached query. The parse counter keeps counting.
    pub fn clear(&mut self) {
        trace!("clearing cached query");
        self.last_query = None;
        self.parsed = ParsedQuery::default();
    }

    fn parsed(&mut self, query: &str) -> &ParsedQuery {
        if self.last_query.as_deref() != Some(query) {
            self.parsed = ParsedQuery::parse(query);
            match &mut self.last_query {
                Some(last) => {
                    last.clear();
                    last.push_str(query);
                }
                None => self.last_query = Some(query.to_owned()),
            }
            self.parse_count += 1;
            debug!(terms = self.parsed.len(), "parsed new query");
        }
        &self.parsed
    }
}

/// A [`QueryMatcher`] that can be shared between threads.
#[derive(Debug, Default)]
pub struct SharedQueryMatcher {
    inner: Mutex<QueryMatcher>,
}

impl SharedQueryMatcher {
    pub fn new(matcher: QueryMatcher) -> Self {
        Self {
            inner: Mutex::new(matcher),
        }
    }

    pub fn matches_page(&self, query: &str, record: &Record) -> bool {
        self.inner.lock().matches_page(query, record)
    }

    pub fn filter<'a>(&self, query: &str, records: &'a [Record]) -> Vec<&'a Record> {
        self.inner.lock().filter(query, records)
    }

    pub fn parse_count(&self) -> u64 {
        self.inner.lock().parse_count()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn into_inner(self) -> QueryMatcher {
        self.inner.into_inner()
    }
}
