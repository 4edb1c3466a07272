//! # List Reconstruction
//!
//! Nested lists are rebuilt from a flat run of marker-prefixed lines with a
//! stack of open lists. The marker count of a line is its depth; a line may
//! open at most one level below the current one. A deeper jump abandons the
//! whole run, which then stays in the text as written.

use log::debug;

use super::{
    Claim, CreoleLineClassifier, LineKind, runs,
    kinds::{ListItem, ListType},
};
use crate::parsing::inline::InlineFormatter;

/// One open list.
#[derive(Debug, Clone, Copy)]
struct Frame {
    list_type: ListType,
    items: usize,
}

/// A run whose depth increased by more than one level in a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestingJump {
    /// Index of the offending item within the run.
    pub item: usize,
    pub from: usize,
    pub to: usize,
}

/// Finds list runs in `text` and renders each well-formed one.
pub fn find_lists(text: &str, inline: &InlineFormatter<'_>) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    let mut claims = Vec::new();

    for run in runs(&lines, |k| matches!(k, LineKind::ListItem(_))) {
        let items: Vec<ListItem<'_>> = lines[run.clone()]
            .iter()
            .filter_map(|l| match l.kind {
                LineKind::ListItem(item) => Some(item),
                _ => None,
            })
            .collect();

        match build_list(&items, |t| inline.format(t)) {
            Ok(html) => claims.push(Claim::lines(&lines, run, html)),
            Err(jump) => debug!(
                "list left as text: item {} jumps from depth {} to {}",
                jump.item + 1,
                jump.from,
                jump.to
            ),
        }
    }
    claims
}

/// Renders one run of list items.
pub fn build_list<F>(items: &[ListItem<'_>], format: F) -> Result<String, NestingJump>
where
    F: Fn(&str) -> String,
{
    let mut out = String::new();
    let mut stack: Vec<Frame> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let level = stack.len();
        if item.depth > level + 1 {
            return Err(NestingJump {
                item: i,
                from: level,
                to: item.depth,
            });
        }

        if item.depth == level + 1 {
            open_list(&mut out, item.list_type);
            stack.push(Frame {
                list_type: item.list_type,
                items: 0,
            });
        } else {
            while stack.len() > item.depth {
                if let Some(frame) = stack.pop() {
                    close_list(&mut out, frame.list_type);
                }
            }
            let same_depth = item.depth == level;
            match stack.last_mut() {
                Some(frame) if same_depth && frame.list_type != item.list_type => {
                    close_list(&mut out, frame.list_type);
                    open_list(&mut out, item.list_type);
                    *frame = Frame {
                        list_type: item.list_type,
                        items: 0,
                    };
                }
                _ => {}
            }
        }

        let Some(frame) = stack.last_mut() else {
            // depth >= 1 always leaves a frame open
            continue;
        };
        if frame.items > 0 {
            out.push_str("</li>\n");
        }
        out.push_str("<li>");
        out.push_str(&format(item.text));
        frame.items += 1;
    }

    while let Some(frame) = stack.pop() {
        close_list(&mut out, frame.list_type);
    }
    Ok(out)
}

fn open_list(out: &mut String, list_type: ListType) {
    out.push('<');
    out.push_str(list_type.tag());
    out.push_str(">\n");
}

fn close_list(out: &mut String, list_type: ListType) {
    out.push_str("</li>\n</");
    out.push_str(list_type.tag());
    out.push_str(">\n");
}
