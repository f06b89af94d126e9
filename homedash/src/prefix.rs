//! Protocol and subdomain prefix stripping
//!
//! Titles, urls and queries all drop a leading `https://www.`-style prefix
//! before matching, so typing "moz" finds "http://www.mozilla.org".

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional scheme with up to two slashes, optional `www<digits>`/`ftp`
/// subdomain, optional dot. Every part is optional, so this always matches
/// (possibly empty) at the start of the text.
static PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:ftp|https?):/{0,2})?(?:ftp|w{3}[0-9]*)?\.?").unwrap()
});

/// Remove one leading protocol/subdomain prefix, borrowing the remainder.
pub fn strip_prefix(text: &str) -> &str {
    match PREFIX_REGEX.find(text) {
        Some(prefix) => &text[prefix.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme_and_www() {
        assert_eq!(strip_prefix("https://www.mozilla.org/firefox"), "mozilla.org/firefox");
        assert_eq!(strip_prefix("http://www2.example.com"), "example.com");
        assert_eq!(strip_prefix("ftp://ftp.gnu.org/pub"), "gnu.org/pub");
    }

    #[test]
    fn test_strip_scheme_without_slashes() {
        assert_eq!(strip_prefix("http:example.com"), "example.com");
        assert_eq!(strip_prefix("https:/example.com"), "example.com");
    }

    #[test]
    fn test_strip_bare_subdomain() {
        assert_eq!(strip_prefix("www.example.com"), "example.com");
        assert_eq!(strip_prefix("www123.example.com"), "example.com");
    }

    #[test]
    fn test_strip_only_at_start() {
        assert_eq!(strip_prefix("see http://www.example.com"), "see http://www.example.com");
        assert_eq!(strip_prefix("mozilla.org/http://"), "mozilla.org/http://");
    }

    #[test]
    fn test_unprefixed_text_is_unchanged() {
        assert_eq!(strip_prefix("Home Dash"), "Home Dash");
        assert_eq!(strip_prefix(""), "");
        assert_eq!(strip_prefix("!!!"), "!!!");
    }

    #[test]
    fn test_unknown_scheme_is_kept() {
        assert_eq!(strip_prefix("about:config"), "about:config");
        assert_eq!(strip_prefix("file:///tmp"), "file:///tmp");
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert_eq!(strip_prefix("HTTP://example.com"), "HTTP://example.com");
    }

    #[test]
    fn test_non_ascii_digits_are_not_subdomain_digits() {
        assert_eq!(strip_prefix("www٣.example.com"), "٣.example.com");
    }

    #[test]
    fn test_strip_is_stable_on_typical_input() {
        for text in [
            "https://www.mozilla.org/en-US/",
            "http://www3.example.com/page",
            "ftp://ftp.gnu.org",
            "Home Dash: Firefox add-on",
            "www.wikipedia.org",
        ] {
            let once = strip_prefix(text);
            assert_eq!(strip_prefix(once), once, "restripping changed {:?}", text);
        }
    }
}
