/// A line of four or more `-` and nothing else.
pub struct Rule;

impl Rule {
    pub const MARKER: u8 = b'-';
    pub const MIN_LEN: usize = 4;
    pub const HTML: &'static str = "<hr />\n";

    pub fn is_rule(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.bytes().all(|b| b == Self::MARKER)
    }
}
