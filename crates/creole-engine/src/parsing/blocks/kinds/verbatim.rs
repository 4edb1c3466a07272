/// Verbatim (preformatted) block delimiters. Each sits alone on its line.
pub struct Verbatim;

impl Verbatim {
    pub const OPEN: &'static str = "{{{";
    pub const CLOSE: &'static str = "}}}";

    pub fn opens(line: &str) -> bool {
        line.trim_end() == Self::OPEN
    }

    /// Only an unindented `}}}` closes a block.
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::CLOSE
    }

    /// An indented `}}}` inside a block is literal and loses one space.
    pub fn content(line: &str) -> &str {
        match line.strip_prefix(' ') {
            Some(rest) if rest.trim_start_matches(' ').trim_end() == Self::CLOSE => rest,
            _ => line,
        }
    }
}
