/// Table row syntax: cells separated by `|`, header cells led by `=`.
pub struct TableRow;

impl TableRow {
    pub const SEPARATOR: char = '|';
    pub const HEADER: char = '=';

    pub fn is_row(line: &str) -> bool {
        line.trim_start().starts_with(Self::SEPARATOR)
    }
}
