//! Joins paragraph HTML and buffered blocks into the final document.

use log::error;

use super::segment::{Buffers, Fragment};

/// Concatenates `fragments`, resolving block references in `buffers`.
///
/// Every block ends on a line break, so a macro handler returning a bare
/// fragment still leaves the next block on its own line.
pub fn recombine(fragments: &[Fragment], buffers: &Buffers) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Html(html) => out.push_str(html),
            Fragment::Block(block) => match buffers.get(*block) {
                Some(html) => {
                    out.push_str(html);
                    if !html.is_empty() && !html.ends_with('\n') {
                        out.push('\n');
                    }
                }
                None => {
                    debug_assert!(false, "dangling block reference {block:?}");
                    error!("dangling block reference {block:?}");
                }
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::segment::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_blocks_by_kind_and_index() {
        let mut buffers = Buffers::default();
        let first = buffers.push(BlockKind::Heading, "<h1>A</h1>\n".into());
        let second = buffers.push(BlockKind::Heading, "<h2>B</h2>\n".into());
        // Out of insertion order on purpose.
        let fragments = vec![
            Fragment::Block(second),
            Fragment::Html("<p>x</p>\n".into()),
            Fragment::Block(first),
        ];
        assert_eq!(
            recombine(&fragments, &buffers),
            "<h2>B</h2>\n<p>x</p>\n<h1>A</h1>\n"
        );
    }

    #[test]
    fn terminates_blocks_with_newline() {
        let mut buffers = Buffers::default();
        let block = buffers.push(BlockKind::Macro, "<div>m</div>".into());
        assert_eq!(
            recombine(&[Fragment::Block(block), Fragment::Html("<p>y</p>\n".into())], &buffers),
            "<div>m</div>\n<p>y</p>\n"
        );
    }

    #[test]
    fn user_text_that_looks_like_a_placeholder_is_plain_text() {
        let buffers = Buffers::default();
        let fragments = vec![Fragment::Html("<p>@list@ %s $1</p>\n".into())];
        assert_eq!(recombine(&fragments, &buffers), "<p>@list@ %s $1</p>\n");
    }
}
