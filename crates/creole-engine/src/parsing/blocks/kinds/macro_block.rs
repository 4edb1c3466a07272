/// Macro block delimiters, as they read after entity escaping.
pub struct MacroBlock;

/// The opening line of a macro block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroOpen<'a> {
    pub name: &'a str,
    pub args: &'a str,
}

impl MacroBlock {
    /// `<<<`
    pub const OPEN: &'static str = "&lt;&lt;&lt;";
    /// `>>>`
    pub const CLOSE: &'static str = "&gt;&gt;&gt;";

    pub fn open(line: &str) -> Option<MacroOpen<'_>> {
        let rest = line.trim().strip_prefix(Self::OPEN)?;
        let (name, args) = rest
            .split_once(char::is_whitespace)
            .unwrap_or((rest, ""));
        if name.is_empty() || name.contains(Self::CLOSE) {
            return None;
        }
        Some(MacroOpen {
            name,
            args: args.trim(),
        })
    }

    pub fn closes(line: &str) -> bool {
        line.trim() == Self::CLOSE
    }
}
