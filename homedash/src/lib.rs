//! Home Dash Core - query matching for the Home Dash new-tab search
//!
//! Decides whether a page (title + url) matches what the user has typed so far.
//! Every query term must start at a word boundary in the title or the url; terms
//! typed in lowercase ignore case, terms with any uppercase letter do not.
//!
//! [`QueryMatcher`] caches the last parsed query so keystroke-by-keystroke
//! filtering over many pages only parses each query string once.

pub mod boundary;
pub(crate) mod candidate;
pub mod config;
pub mod interface;
pub mod matcher;
pub mod prefix;
pub mod query;

pub use boundary::matches_boundary;
pub use candidate::{prepare_match_text, MatchCandidate, PreparedText};
pub use config::MatchConfig;
pub use interface::*;
pub use matcher::{QueryMatcher, SharedQueryMatcher};
pub use prefix::strip_prefix;
pub use query::ParsedQuery;
