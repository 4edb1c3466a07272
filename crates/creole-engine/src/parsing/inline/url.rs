//! URL grammar shared by bracketed links, free-URL autolinking and the
//! escape marker.

use std::sync::OnceLock;

use regex::Regex;

/// A scheme from the allow-list followed by `://`, or a hostname-like token
/// with a short alphabetic suffix followed by `/`; then a body of characters
/// that are neither whitespace nor brackets. Tag brackets and the raw zone
/// sentinels end a URL too.
const URL_PATTERN: &str = concat!(
    r"(?:(?:https?|ftps?|sftp|news|mailto|irc|cvs|svn|git|bzr)://",
    r"|[A-Za-z0-9][A-Za-z0-9.-]*\.[A-Za-z]{2,4}/)",
    r"[^\s\[\]<>\x{E000}-\x{E003}]+",
);

/// Sentence punctuation that is never the last character of a free URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\''];

/// Escaped characters that are never the end of a free URL.
const TRAILING_ENTITIES: &[&str] = &["&quot;", "&gt;", "&lt;"];

fn full_regex() -> &'static Regex {
    static FULL: OnceLock<Regex> = OnceLock::new();
    FULL.get_or_init(|| Regex::new(&format!("^(?:{URL_PATTERN})$")).expect("Invalid URL regex"))
}

fn prefix_regex() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(&format!("^(?:{URL_PATTERN})")).expect("Invalid URL regex"))
}

/// Matches a URL preceded by whitespace, the end of a tag or the start of
/// the text.
pub(crate) fn free_url_regex() -> &'static Regex {
    static FREE: OnceLock<Regex> = OnceLock::new();
    FREE.get_or_init(|| {
        Regex::new(&format!(r"(^|[\s>])({URL_PATTERN})")).expect("Invalid URL regex")
    })
}

/// Whether the whole of `text` is a URL.
pub fn is_url(text: &str) -> bool {
    full_regex().is_match(text)
}

/// Whether `text` begins with a URL.
pub fn starts_with_url(text: &str) -> bool {
    prefix_regex().is_match(text)
}

/// Strips trailing sentence punctuation from a URL match.
///
/// Returns `None` when nothing URL-shaped remains.
pub fn trim_trailing(url: &str) -> Option<&str> {
    let mut trimmed = url;
    while let Some(shorter) = strip_punctuation(trimmed) {
        trimmed = shorter;
    }
    is_url(trimmed).then_some(trimmed)
}

/// Drops one trailing punctuation character or escaped bracket/quote.
pub(crate) fn strip_punctuation(url: &str) -> Option<&str> {
    TRAILING_ENTITIES
        .iter()
        .find_map(|entity| url.strip_suffix(*entity))
        .or_else(|| url.strip_suffix(TRAILING_PUNCTUATION))
}

/// The href for a URL: hostname-form URLs get an `http://` scheme.
pub fn href(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
