//! Inline verbatim spans (`{{{text}}}`).
//!
//! Raw zones are lifted out before any formatting pass runs and replaced by a
//! sentinel token made of private-use characters; the escaper guarantees those
//! characters never occur in user text. The token carries the zone's index, so
//! restoring is by address, not by order.

use std::fmt::Write;

/// Sentinel characters and delimiters of an inline raw zone.
pub struct RawZone;

impl RawZone {
    pub const OPEN: char = '\u{E000}';
    pub const CLOSE: char = '\u{E001}';
    pub const MARKUP_OPEN: &'static str = "{{{";
    pub const MARKUP_CLOSE: &'static str = "}}}";
    pub const TAG: &'static str = "tt";
}

/// Lifts every `{{{…}}}` on a single line out of `text`.
///
/// Returns the text with sentinel tokens in place of the zones, and the zone
/// contents in index order. Extra closing braces directly after the first
/// `}}}` belong to the content.
pub fn protect(text: &str) -> (String, Vec<String>) {
    let mut zones = Vec::new();
    if !text.contains(RawZone::MARKUP_OPEN) {
        return (text.to_string(), zones);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(RawZone::MARKUP_OPEN) {
        let content_start = open + RawZone::MARKUP_OPEN.len();
        let line_end = rest[content_start..]
            .find('\n')
            .map_or(rest.len(), |n| content_start + n);
        let Some(close) = rest[content_start..line_end].find(RawZone::MARKUP_CLOSE) else {
            out.push_str(&rest[..content_start]);
            rest = &rest[content_start..];
            continue;
        };

        let mut content_end = content_start + close;
        while rest[content_end + RawZone::MARKUP_CLOSE.len()..line_end].starts_with('}') {
            content_end += 1;
        }

        out.push_str(&rest[..open]);
        write_token(&mut out, RawZone::OPEN, RawZone::CLOSE, zones.len());
        zones.push(rest[content_start..content_end].to_string());
        rest = &rest[content_end + RawZone::MARKUP_CLOSE.len()..];
    }
    out.push_str(rest);
    (out, zones)
}

/// Replaces sentinel tokens with the rendered raw zones.
pub fn restore(text: &str, zones: &[String]) -> String {
    restore_tokens(text, RawZone::OPEN, RawZone::CLOSE, zones, |content, out| {
        let _ = write!(out, "<{tag}>{content}</{tag}>", tag = RawZone::TAG);
    })
}

/// Writes the sentinel token for item `index`.
pub(crate) fn write_token(out: &mut String, open: char, close: char, index: usize) {
    let _ = write!(out, "{open}{index}{close}");
}

/// Replaces `open`/`close` sentinel tokens with their items, rendered by
/// `render`. Malformed tokens are copied through.
pub(crate) fn restore_tokens<F>(
    text: &str,
    open: char,
    close: char,
    items: &[String],
    render: F,
) -> String
where
    F: Fn(&str, &mut String),
{
    if items.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after = &rest[start + open.len_utf8()..];
        let item = after.find(close).and_then(|end| {
            let index: usize = after[..end].parse().ok()?;
            Some((items.get(index)?, end))
        });
        match item {
            Some((content, end)) => {
                render(content, &mut out);
                rest = &after[end + close.len_utf8()..];
            }
            None => {
                out.push(open);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
