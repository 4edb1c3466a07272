//! # Inline Formatting
//!
//! Turns one escaped run of text (a paragraph, list item, table cell or
//! heading) into HTML.
//!
//! ## Pass order
//!
//! 1. **`raw`**: `{{{…}}}` zones are lifted out; no later pass sees them
//! 2. **`targets`**: link targets, image sources and free URLs are lifted
//!    out the same way
//! 3. **`spans`**: bold, italic, strikethrough, underline, monospace,
//!    superscript, subscript, each with the parity guard where it applies
//! 4. **`targets`**: targets put back unchanged
//! 5. **`escapes`**: `\\` forced line breaks
//! 6. **`links`**: images, then bracketed links, then free URLs
//! 7. **`escapes`**: escape markers removed outside tags
//! 8. **`raw`**: zones restored as `<tt>`
//!
//! Span formatting runs before links so markup inside link display text is
//! already rendered when the link is built.

pub mod cursor;
pub mod escapes;
pub mod kinds;
pub mod links;
pub mod raw;
pub mod spans;
pub mod targets;
pub mod url;

use crate::options::Options;

use raw::RawZone;
use targets::TargetZone;

/// Private-use characters the inline passes reserve for sentinel tokens.
pub const SENTINELS: [char; 4] = [
    RawZone::OPEN,
    RawZone::CLOSE,
    TargetZone::OPEN,
    TargetZone::CLOSE,
];

/// Formats inline markup with the link settings of one parse call.
#[derive(Debug, Clone, Copy)]
pub struct InlineFormatter<'a> {
    options: &'a Options,
}

impl<'a> InlineFormatter<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Formats escaped `text`.
    pub fn format(&self, text: &str) -> String {
        let (protected, zones) = raw::protect(text);
        let (protected, targets) = targets::protect(&protected);
        let html = spans::apply_all(&protected);
        let html = targets::restore(&html, &targets);
        let html = escapes::line_breaks(&html);
        let html = links::images(&html, self.options);
        let html = links::links(&html, self.options);
        let html = links::autolink(&html, self.options);
        let html = escapes::unescape_markers(&html);
        raw::restore(&html, &zones)
    }
}
