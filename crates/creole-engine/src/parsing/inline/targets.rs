//! Link targets, image sources and free URLs.
//!
//! These are lifted out of the text before the span passes run, the same way
//! raw zones are, and put back right after. `--`, `__` or `//` inside a URL
//! therefore stay part of the URL. Display and alt text remain in place and
//! are formatted as usual.

use std::ops::Range;

use super::{
    kinds::{ImageTag, LinkTag, SpanStyle},
    links,
    raw::{restore_tokens, write_token},
    url,
};

/// Sentinel characters of a lifted target.
pub struct TargetZone;

impl TargetZone {
    pub const OPEN: char = '\u{E002}';
    pub const CLOSE: char = '\u{E003}';
}

/// Replaces every link target, image source and free URL with a sentinel
/// token; returns the text and the lifted targets in index order.
pub fn protect(text: &str) -> (String, Vec<String>) {
    let mut targets = Vec::new();
    let ranges = target_ranges(text);
    if ranges.is_empty() {
        return (text.to_string(), targets);
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for range in ranges {
        out.push_str(&text[copied..range.start]);
        write_token(&mut out, TargetZone::OPEN, TargetZone::CLOSE, targets.len());
        targets.push(text[range.clone()].to_string());
        copied = range.end;
    }
    out.push_str(&text[copied..]);
    (out, targets)
}

/// Puts lifted targets back verbatim.
pub fn restore(text: &str, targets: &[String]) -> String {
    restore_tokens(text, TargetZone::OPEN, TargetZone::CLOSE, targets, |target, out| {
        out.push_str(target)
    })
}

/// Non-overlapping target ranges in text order. On overlap the earlier
/// range wins.
fn target_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if text.contains(LinkTag::OPEN) {
        ranges.extend(first_groups(links::link_regex(), text));
    }
    if text.contains(ImageTag::OPEN) {
        ranges.extend(first_groups(links::image_regex(), text));
    }
    ranges.extend(url::free_url_regex().captures_iter(text).filter_map(|caps| {
        let found = caps.get(2)?;
        let core = url_core(found.as_str(), &text[..found.start()])?;
        Some(found.start()..found.start() + core.len())
    }));

    ranges.sort_by_key(|r| r.start);
    let mut accepted: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if accepted.last().is_none_or(|last| range.start >= last.end) {
            accepted.push(range);
        }
    }
    accepted
}

fn first_groups<'t>(
    regex: &'t regex::Regex,
    text: &'t str,
) -> impl Iterator<Item = Range<usize>> + 't {
    regex.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if links::is_escaped(text, whole.start()) {
            return None;
        }
        caps.get(1).map(|m| m.range())
    })
}

/// A free URL without the punctuation and span closers that follow it. A
/// trailing delimiter only closes a span when `before` opened one.
fn url_core<'t>(candidate: &'t str, before: &str) -> Option<&'t str> {
    let mut core = candidate;
    loop {
        if let Some(style) = SpanStyle::ALL.iter().find(|s| {
            core.as_bytes().ends_with(s.delimiter)
                && before.as_bytes().windows(s.delimiter.len()).any(|w| w == s.delimiter)
        }) {
            core = &core[..core.len() - style.delimiter.len()];
        } else if let Some(shorter) = url::strip_punctuation(core) {
            core = shorter;
        } else {
            break;
        }
    }
    url::is_url(core).then_some(core)
}
