/// `=` headings, levels 1 to 6. A closing run of `=` is optional.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '=';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the heading text.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let t = line.trim();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = t[level..].trim_end_matches(Self::MARKER).trim();
        (!text.is_empty()).then_some((level, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("= Title", Some((1, "Title")))]
    #[case("== Title ==", Some((2, "Title")))]
    #[case("====== Deep", Some((6, "Deep")))]
    #[case("  === a = b ===", Some((3, "a = b")))]
    #[case("======= Seven", None)]
    #[case("====", None)]
    #[case("|=cell", None)]
    #[case("text", None)]
    fn parses_headings(#[case] line: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
