//! # Block Extraction
//!
//! Block constructs are pulled out of the text segments one kind at a time.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line of a text segment is
//!    classified into a `LineClass` from local facts only
//!
//! 2. **Extraction** (one module per kind): a state machine over the
//!    classified lines decides which line ranges form a block and renders
//!    them. [`extract_blocks`] stores the HTML in the call's buffers and
//!    splits the segment around a block reference
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `CreoleLineClassifier` produces `LineClass` for each line
//! - **`macros`**, **`verbatim`**, **`lists`**, **`tables`**, **`headings`**,
//!   **`rules`**: the extractors, in pipeline order
//!
//! ## Key Invariants
//!
//! - A block always covers whole lines, so the text around it still starts
//!   and ends on line boundaries
//! - Text a pass does not claim is left byte-for-byte as it was

pub mod classify;
pub mod headings;
pub mod kinds;
pub mod lists;
pub mod macros;
pub mod rules;
pub mod tables;
pub mod verbatim;

use std::ops::Range;

use log::trace;

pub use classify::{CreoleLineClassifier, LineClass, LineKind};

use crate::parsing::{
    segment::{BlockKind, Buffers, Segment},
    text::Span,
};

/// A rendered block covering `span` of a text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub span: Span,
    pub html: String,
}

impl Claim {
    /// A claim over the lines `range` of `lines`.
    pub fn lines(lines: &[LineClass<'_>], range: Range<usize>, html: String) -> Self {
        let first = lines[range.start].line;
        let last = lines[range.end - 1].line;
        Self {
            span: first.cover(last),
            html,
        }
    }
}

/// Runs `find` over every text segment and replaces each claimed span with a
/// block reference of `kind`.
///
/// Claims must be in order and must not overlap. Empty text left between
/// blocks is dropped.
pub fn extract_blocks<F>(
    doc: Vec<Segment>,
    kind: BlockKind,
    buffers: &mut Buffers,
    mut find: F,
) -> Vec<Segment>
where
    F: FnMut(&str) -> Vec<Claim>,
{
    let mut out = Vec::with_capacity(doc.len());
    for segment in doc {
        let text = match segment {
            Segment::Text(text) => text,
            block => {
                out.push(block);
                continue;
            }
        };

        let claims = find(&text);
        if claims.is_empty() {
            out.push(Segment::Text(text));
            continue;
        }

        let mut copied = 0;
        for claim in claims {
            debug_assert!(claim.span.start >= copied, "overlapping {kind:?} claims");
            push_text(&mut out, &text[copied..claim.span.start]);
            let block = buffers.push(kind, claim.html);
            trace!("{kind:?} block {} at {:?}", block.index, claim.span);
            out.push(Segment::Block(block));
            copied = claim.span.end;
        }
        push_text(&mut out, &text[copied..]);
    }
    out
}

fn push_text(out: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        out.push(Segment::Text(text.to_string()));
    }
}

/// Maximal runs of consecutive lines matching `pred`, as index ranges.
pub fn runs<P>(lines: &[LineClass<'_>], pred: P) -> Vec<Range<usize>>
where
    P: Fn(&LineKind<'_>) -> bool,
{
    let mut found = Vec::new();
    let mut start = None;
    for (i, line) in lines.iter().enumerate() {
        match (pred(&line.kind), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                found.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        found.push(s..lines.len());
    }
    found
}
