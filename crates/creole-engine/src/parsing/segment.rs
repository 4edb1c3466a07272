//! # Document Segments
//!
//! The working document of one parse call is a sequence of [`Segment`]s.
//! Extraction passes split `Text` segments around the blocks they claim and
//! store each rendered block in the [`Buffers`] of the call, leaving a
//! [`BlockRef`] behind. A reference addresses its block by kind and index,
//! so recombination never depends on the order passes ran in and user text
//! can never be mistaken for a reference.

/// The kind of an extracted block; each kind has its own buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Macro,
    Verbatim,
    List,
    Table,
    Heading,
    Rule,
}

/// Typed stand-in for one rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef {
    pub kind: BlockKind,
    pub index: usize,
}

/// A piece of the working document before paragraph wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Escaped markup not yet claimed by any block extractor.
    Text(String),
    /// A block already rendered into the buffers.
    Block(BlockRef),
}

/// A piece of the document after paragraph wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Rendered paragraph HTML.
    Html(String),
    /// A block to be resolved from the buffers.
    Block(BlockRef),
}

/// Per-call side buffers holding rendered HTML, one per [`BlockKind`].
#[derive(Debug, Default)]
pub struct Buffers {
    macros: Vec<String>,
    verbatim: Vec<String>,
    lists: Vec<String>,
    tables: Vec<String>,
    headings: Vec<String>,
    rules: Vec<String>,
}

impl Buffers {
    /// Appends rendered HTML to the buffer of `kind` and returns its reference.
    pub fn push(&mut self, kind: BlockKind, html: String) -> BlockRef {
        let buffer = self.buffer_mut(kind);
        buffer.push(html);
        BlockRef {
            kind,
            index: buffer.len() - 1,
        }
    }

    /// Looks up the HTML a reference points at.
    pub fn get(&self, block: BlockRef) -> Option<&str> {
        self.buffer(block.kind)
            .get(block.index)
            .map(String::as_str)
    }

    /// Number of blocks stored for `kind`.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.buffer(kind).len()
    }

    fn buffer(&self, kind: BlockKind) -> &Vec<String> {
        match kind {
            BlockKind::Macro => &self.macros,
            BlockKind::Verbatim => &self.verbatim,
            BlockKind::List => &self.lists,
            BlockKind::Table => &self.tables,
            BlockKind::Heading => &self.headings,
            BlockKind::Rule => &self.rules,
        }
    }

    fn buffer_mut(&mut self, kind: BlockKind) -> &mut Vec<String> {
        match kind {
            BlockKind::Macro => &mut self.macros,
            BlockKind::Verbatim => &mut self.verbatim,
            BlockKind::List => &mut self.lists,
            BlockKind::Table => &mut self.tables,
            BlockKind::Heading => &mut self.headings,
            BlockKind::Rule => &mut self.rules,
        }
    }
}
