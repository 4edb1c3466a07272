//! Forced line breaks and removal of the escape marker.

use super::{
    cursor::Cursor,
    kinds::{ESCAPABLE, ESCAPE, LINE_BREAK},
    url,
};

const BREAK_TAG: &str = "<br />";

/// Rewrites `\\` to `<br />` unless it is escaped.
pub fn line_breaks(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    while !cur.eof() {
        if cur.starts_with(LINE_BREAK) && cur.prev() != Some(ESCAPE) {
            out.push_str(&text[copied..cur.pos()]);
            out.push_str(BREAK_TAG);
            cur.bump_n(LINE_BREAK.len());
            copied = cur.pos();
        } else {
            cur.bump();
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Drops the escape marker in front of markup characters and URLs.
///
/// The character after a dropped marker is copied as-is, so `~~` leaves one
/// `~`. Markers in front of anything else are ordinary text. Tags emitted by
/// earlier passes are copied untouched.
pub fn unescape_markers(text: &str) -> String {
    if !text.as_bytes().contains(&ESCAPE) {
        return text.to_string();
    }

    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    while let Some(b) = cur.peek() {
        match b {
            b'<' => {
                let end = cur.rest().find('>').map_or(text.len(), |n| cur.pos() + n + 1);
                cur.seek(end);
            }
            ESCAPE => {
                let next = cur.pos() + 1;
                let escapes_markup = text.as_bytes().get(next).is_some_and(|c| ESCAPABLE.contains(c));
                if escapes_markup || url::starts_with_url(&text[next..]) {
                    out.push_str(&text[copied..cur.pos()]);
                    copied = next;
                    // The protected character is never a marker itself.
                    cur.seek(if escapes_markup { next + 1 } else { next });
                } else {
                    cur.bump();
                }
            }
            _ => {
                cur.bump();
            }
        }
    }
    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(r"one\\two", "one<br />two")]
    #[case(r"a\\\\b", "a<br /><br />b")]
    #[case(r"a~\\b", r"a~\\b")]
    #[case(r"single \ slash", r"single \ slash")]
    fn rewrites_line_breaks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(line_breaks(input), expected);
    }

    #[rstest]
    #[case("~**not bold**", "**not bold**")]
    #[case("~~", "~")]
    #[case("~~~", "~~")]
    #[case("~~**", "~**")]
    #[case("~http://example.org", "http://example.org")]
    #[case("a ~ b", "a ~ b")]
    #[case("~a", "~a")]
    #[case("end~", "end~")]
    #[case(r"a~\\b", r"a\\b")]
    #[case("~[[Page]]", "[[Page]]")]
    fn removes_escape_markers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape_markers(input), expected);
    }

    #[test]
    fn leaves_tags_alone() {
        let input = r#"<a href="http://x.org/~user/~**">~**</a>"#;
        assert_eq!(unescape_markers(input), r#"<a href="http://x.org/~user/~**">**</a>"#);
    }
}
