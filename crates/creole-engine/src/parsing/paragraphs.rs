//! Paragraph wrapping of the text left after block extraction.

use super::{
    inline::InlineFormatter,
    segment::{Fragment, Segment},
    text::lines_with_spans,
};

/// Splits every text segment on blank lines and wraps each non-empty piece
/// in `<p>`. Block references pass through.
pub fn wrap_paragraphs(doc: Vec<Segment>, inline: &InlineFormatter<'_>) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(doc.len());
    for segment in doc {
        match segment {
            Segment::Block(block) => out.push(Fragment::Block(block)),
            Segment::Text(text) => {
                for paragraph in split_paragraphs(&text) {
                    out.push(Fragment::Html(format!("<p>{}</p>\n", inline.format(&paragraph))));
                }
            }
        }
    }
    out
}

/// Blank-line separated pieces of `text`, trimmed, without empty pieces.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines_with_spans(text) {
        if line.is_blank() {
            flush(&mut paragraphs, &mut current);
        } else {
            current.push(line.content());
        }
    }
    flush(&mut paragraphs, &mut current);
    paragraphs
}

fn flush(paragraphs: &mut Vec<String>, current: &mut Vec<&str>) {
    let joined = current.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}
