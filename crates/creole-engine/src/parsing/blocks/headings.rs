//! Heading lines.

use super::{Claim, CreoleLineClassifier, LineKind};
use crate::parsing::inline::InlineFormatter;

pub fn find_headings(text: &str, inline: &InlineFormatter<'_>) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match line.kind {
            LineKind::Heading { level, text } => Some(Claim::lines(
                &lines,
                i..i + 1,
                format!("<h{level}>{}</h{level}>\n", inline.format(text)),
            )),
            _ => None,
        })
        .collect()
}
