use crate::parsing::text::{LineRef, Span};

use super::kinds::{Heading, ListItem, MacroBlock, MacroOpen, Rule, TableRow, Verbatim};

/// What a single line looks like on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    VerbatimOpen,
    VerbatimClose,
    MacroOpen(MacroOpen<'a>),
    MacroClose,
    Heading { level: usize, text: &'a str },
    Rule,
    TableRow,
    ListItem(ListItem<'a>),
    Text,
}

/// Classification of a single line containing only local facts.
///
/// Extractors run their state machines over these; no extractor looks at
/// raw text across line boundaries.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// Full byte span of this line in its text segment, newline included.
    pub line: Span,
    /// The line without its newline.
    pub content: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines of escaped Creole text.
pub struct CreoleLineClassifier;

impl CreoleLineClassifier {
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let content = lr.content();
        LineClass {
            line: lr.span,
            content,
            kind: Self::kind(content),
        }
    }

    /// Classifies every line of `text`.
    pub fn classify_all<'a>(&self, text: &'a str) -> Vec<LineClass<'a>> {
        crate::parsing::text::lines_with_spans(text)
            .map(|lr| self.classify(&lr))
            .collect()
    }

    fn kind(content: &str) -> LineKind<'_> {
        if content.trim().is_empty() {
            return LineKind::Blank;
        }
        if Verbatim::opens(content) {
            return LineKind::VerbatimOpen;
        }
        if Verbatim::closes(content) {
            return LineKind::VerbatimClose;
        }
        if let Some(open) = MacroBlock::open(content) {
            return LineKind::MacroOpen(open);
        }
        if MacroBlock::closes(content) {
            return LineKind::MacroClose;
        }
        if let Some((level, text)) = Heading::parse(content) {
            return LineKind::Heading { level, text };
        }
        if Rule::is_rule(content) {
            return LineKind::Rule;
        }
        if TableRow::is_row(content) {
            return LineKind::TableRow;
        }
        if let Some(item) = ListItem::parse(content) {
            return LineKind::ListItem(item);
        }
        LineKind::Text
    }
}
