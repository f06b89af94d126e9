//! Shared history fixtures for integration tests

use homedash::Record;

/// A small browsing history as the new-tab page would hand it over.
pub const HISTORY_JSON: &str = r#"[
    {"title": "Home Dash :: Add-ons for Firefox", "url": "https://addons.mozilla.org/en-US/firefox/addon/home-dash/"},
    {"title": "Mozilla Developer Network", "url": "https://developer.mozilla.org/en-US/"},
    {"title": "The CAT and DOG show", "url": "http://www.example.com/pets"},
    {"title": "iPhone - Apple", "url": "https://www.apple.com/iphone/"},
    {"title": "getElementById - Web APIs | MDN", "url": "https://developer.mozilla.org/en-US/docs/Web/API/Document/getElementById"},
    {"title": "", "url": "ftp://ftp.gnu.org/gnu/"},
    {"title": "abcxyzdef", "url": "test.com"}
]"#;

pub fn history() -> Vec<Record> {
    serde_json::from_str(HISTORY_JSON).unwrap()
}

pub fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
