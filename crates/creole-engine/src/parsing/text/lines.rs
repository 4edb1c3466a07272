use super::span::Span;

/// A reference to a single line of a text segment with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The raw line text, including its newline.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line without its trailing line terminator.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Whether the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newlines stay attached to their line so that spans of consecutive lines
/// tile the input exactly.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line,
        }
    })
}
