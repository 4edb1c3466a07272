//! Delimiter-pair formatting with parity disambiguation.
//!
//! Each style is one left-to-right pass over the output of the previous pass.
//! A span runs from an opening delimiter to the nearest closing one. Before a
//! guarded span is committed, every other guarded delimiter inside it must
//! occur an even number of times; an odd count means the span boundary cuts
//! through a neighbouring span, so the whole candidate stays literal.

use std::fmt::Write;

use log::debug;

use super::{
    cursor::Cursor,
    kinds::{ESCAPE, SpanStyle},
};

/// Applies every span style in order.
pub fn apply_all(text: &str) -> String {
    SpanStyle::ALL
        .iter()
        .fold(text.to_string(), |acc, style| apply(&acc, style))
}

/// Applies one span style to `text`.
pub fn apply(text: &str, style: &SpanStyle) -> String {
    if !text
        .as_bytes()
        .windows(style.delimiter.len())
        .any(|w| w == style.delimiter)
    {
        return text.to_string();
    }

    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;

    while !cur.eof() {
        if delimiter_at(&cur, style) {
            let start = cur.pos();
            let content_start = start + style.delimiter.len();
            if let Some(close) = find_close(text, content_start, style) {
                let inner = &text[content_start..close];
                let end = close + style.delimiter.len();
                out.push_str(&text[copied..start]);

                if style.guarded && crosses_other_span(inner, style) {
                    debug!("{} span rejected by parity guard: {inner:?}", style.name);
                    out.push_str(&text[start..end]);
                } else {
                    let _ = write!(out, "<{tag}>{inner}</{tag}>", tag = style.tag);
                }

                copied = end;
                cur.seek(end);
                continue;
            }
        }
        cur.bump();
    }

    out.push_str(&text[copied..]);
    out
}

/// Counts the recognised (unescaped) delimiters of `style` in `text`.
pub fn count_delimiters(text: &str, style: &SpanStyle) -> usize {
    let mut cur = Cursor::new(text);
    let mut count = 0;
    while !cur.eof() {
        if delimiter_at(&cur, style) {
            count += 1;
            cur.bump_n(style.delimiter.len());
        } else {
            cur.bump();
        }
    }
    count
}

fn delimiter_at(cur: &Cursor<'_>, style: &SpanStyle) -> bool {
    if !cur.starts_with(style.delimiter) {
        return false;
    }
    match cur.prev() {
        Some(ESCAPE) => false,
        Some(b':') => !style.after_colon_is_literal,
        _ => true,
    }
}

/// Finds the nearest closing delimiter after at least one byte of content.
fn find_close(text: &str, content_start: usize, style: &SpanStyle) -> Option<usize> {
    let mut cur = Cursor::new(text);
    cur.seek(content_start);
    while !cur.eof() {
        if !style.multiline && cur.peek() == Some(b'\n') {
            return None;
        }
        if cur.pos() > content_start && delimiter_at(&cur, style) {
            return Some(cur.pos());
        }
        cur.bump();
    }
    None
}

fn crosses_other_span(inner: &str, style: &SpanStyle) -> bool {
    SpanStyle::ALL
        .iter()
        .filter(|other| other.guarded && other.name != style.name)
        .any(|other| count_delimiters(inner, other) % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::bold("**bold**", "<strong>bold</strong>")]
    #[case::italic("//italic//", "<em>italic</em>")]
    #[case::strike("--gone--", "<del>gone</del>")]
    #[case::underline("__under__", "<u>under</u>")]
    #[case::monospace("##mono##", "<tt>mono</tt>")]
    #[case::superscript("x^^2^^", "x<sup>2</sup>")]
    #[case::subscript("H,,2,,O", "H<sub>2</sub>O")]
    #[case::two_spans("**a** and **b**", "<strong>a</strong> and <strong>b</strong>")]
    #[case::unclosed("**never closed", "**never closed")]
    #[case::empty_pair("****", "****")]
    fn formats_single_styles(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_all(input), expected);
    }

    #[test]
    fn bold_inside_italic() {
        assert_eq!(
            apply_all("//a **b** c//"),
            "<em>a <strong>b</strong> c</em>"
        );
    }

    #[test]
    fn italic_inside_bold() {
        assert_eq!(
            apply_all("**a //b// c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn crossing_spans_stay_literal() {
        let input = "**a //b** c//";
        let output = apply_all(input);
        assert!(
            !(output.contains("<strong>") && output.contains("<em>")),
            "crossing spans must not both format: {output}"
        );
        assert_eq!(output, input);
    }

    #[test]
    fn parity_guard_ignores_escaped_delimiters() {
        assert_eq!(apply_all("**a ~// b**"), "<strong>a ~// b</strong>");
    }

    #[test]
    fn bold_and_italic_cross_lines() {
        assert_eq!(apply_all("**a\nb**"), "<strong>a\nb</strong>");
        assert_eq!(apply_all("//a\nb//"), "<em>a\nb</em>");
    }

    #[rstest]
    #[case("--a\nb--")]
    #[case("__a\nb__")]
    #[case("##a\nb##")]
    #[case("^^a\nb^^")]
    #[case(",,a\nb,,")]
    fn single_line_styles_do_not_cross_lines(#[case] input: &str) {
        assert_eq!(apply_all(input), input);
    }

    #[test]
    fn escaped_delimiter_does_not_open() {
        assert_eq!(apply_all("~**not bold**"), "~**not bold**");
    }

    #[test]
    fn url_scheme_does_not_open_italics() {
        let input = "see http://a.org and http://b.org";
        assert_eq!(apply_all(input), input);
    }

    /// `//` right after a colon reads as a URL scheme, even without a known
    /// scheme in front; a space after the colon restores italics.
    #[rstest]
    #[case("Note://x//", "Note://x//")]
    #[case("Note: //x//", "Note: <em>x</em>")]
    #[case("a://b// c", "a://b// c")]
    fn colon_before_italic_delimiter_is_literal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_all(input), expected);
    }

    #[test]
    fn url_inside_bold_is_not_counted_as_italic() {
        assert_eq!(
            apply_all("**see http://a.org**"),
            "<strong>see http://a.org</strong>"
        );
    }

    #[test]
    fn superscript_is_not_parity_guarded() {
        assert_eq!(apply_all("^^a **b^^"), "<sup>a **b</sup>");
    }

    #[test]
    fn counts_unescaped_delimiters() {
        assert_eq!(count_delimiters("** ~** **", &SpanStyle::BOLD), 2);
        assert_eq!(count_delimiters("http:// //", &SpanStyle::ITALIC), 1);
    }
}
