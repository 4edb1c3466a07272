//! Verbatim blocks: `{{{` and `}}}` on lines of their own.

use log::debug;

use super::{Claim, CreoleLineClassifier, LineKind, kinds::Verbatim};

/// Finds verbatim blocks and renders them as `<pre>`.
///
/// The content is already entity-escaped and gets no further formatting.
pub fn find_verbatim(text: &str) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    let mut claims = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].kind != LineKind::VerbatimOpen {
            i += 1;
            continue;
        }
        let Some(close) = (i + 1..lines.len()).find(|&j| lines[j].kind == LineKind::VerbatimClose)
        else {
            debug!("verbatim block never closed");
            break;
        };

        let content = lines[i + 1..close]
            .iter()
            .map(|l| Verbatim::content(l.content))
            .collect::<Vec<_>>()
            .join("\n");
        claims.push(Claim::lines(&lines, i..close + 1, format!("<pre>{content}</pre>\n")));
        i = close + 1;
    }
    claims
}
