#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Unordered,
    Ordered,
}

impl ListType {
    pub const UNORDERED_MARKER: u8 = b'*';
    pub const ORDERED_MARKER: u8 = b'#';

    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            Self::UNORDERED_MARKER => Some(ListType::Unordered),
            Self::ORDERED_MARKER => Some(ListType::Ordered),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }
}

/// One list line: a run of a single marker character, then the item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub list_type: ListType,
    pub depth: usize,
    pub text: &'a str,
}

impl<'a> ListItem<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let t = line.trim_start();
        let marker = *t.as_bytes().first()?;
        let list_type = ListType::from_marker(marker)?;
        let depth = t.bytes().take_while(|&b| b == marker).count();
        let text = t[depth..].trim();
        if text.is_empty() {
            return None;
        }
        Some(ListItem {
            list_type,
            depth,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* Alpha", ListType::Unordered, 1, "Alpha")]
    #[case("  ** Nested", ListType::Unordered, 2, "Nested")]
    #[case("#First", ListType::Ordered, 1, "First")]
    #[case("### three", ListType::Ordered, 3, "three")]
    #[case("*# mixed", ListType::Unordered, 1, "# mixed")]
    fn parses_items(
        #[case] line: &str,
        #[case] list_type: ListType,
        #[case] depth: usize,
        #[case] text: &str,
    ) {
        assert_eq!(
            ListItem::parse(line),
            Some(ListItem {
                list_type,
                depth,
                text
            })
        );
    }

    #[rstest]
    #[case("*")]
    #[case("**   ")]
    #[case("- dash")]
    #[case("text * star")]
    fn rejects_non_items(#[case] line: &str) {
        assert_eq!(ListItem::parse(line), None);
    }
}
