//! # Rendering Pipeline
//!
//! One call turns a whole document into HTML:
//!
//! 1. **`escape`**: entity-escape the input once
//! 2. **`blocks`**: extract macros, verbatim blocks, lists, tables, headings
//!    and rules, in that order, into the buffers of the call's [`Context`]
//! 3. **`paragraphs`**: wrap the remaining text, formatting it with `inline`
//! 4. **`recombine`**: join paragraphs and buffered blocks
//!
//! Nothing outlives a call: the context is created per call and dropped with
//! it, so a parser can be reused and shared.

pub mod blocks;
pub mod escape;
pub mod inline;
pub mod paragraphs;
pub mod recombine;
pub mod segment;
pub mod text;

use log::debug;

use crate::{macros::MacroRegistry, options::Options, warning::Warning};

use blocks::{
    extract_blocks, headings::find_headings, lists::find_lists, macros::find_macros,
    rules::find_rules, tables::find_tables, verbatim::find_verbatim,
};
use inline::InlineFormatter;
use segment::{BlockKind, Buffers, Segment};

/// The result of rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub warnings: Vec<Warning>,
}

/// State of one render call.
pub struct Context<'a> {
    options: &'a Options,
    macros: &'a MacroRegistry,
    buffers: Buffers,
    warnings: Vec<Warning>,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a Options, macros: &'a MacroRegistry) -> Self {
        Self {
            options,
            macros,
            buffers: Buffers::default(),
            warnings: Vec::new(),
        }
    }

    /// Runs the whole pipeline over `text`.
    pub fn render(mut self, text: &str) -> Rendered {
        let inline = InlineFormatter::new(self.options);
        let doc = vec![Segment::Text(escape::escape(text))];

        let doc = self.extract_macros(doc);
        let doc = self.extract(doc, BlockKind::Verbatim, find_verbatim);
        let doc = self.extract(doc, BlockKind::List, |t| find_lists(t, &inline));
        let doc = self.extract(doc, BlockKind::Table, |t| find_tables(t, &inline));
        let doc = self.extract(doc, BlockKind::Heading, |t| find_headings(t, &inline));
        let doc = self.extract(doc, BlockKind::Rule, find_rules);

        let fragments = paragraphs::wrap_paragraphs(doc, &inline);
        debug!("{} fragments after paragraph wrapping", fragments.len());
        let html = recombine::recombine(&fragments, &self.buffers);

        Rendered {
            html,
            warnings: self.warnings,
        }
    }

    fn extract<F>(&mut self, doc: Vec<Segment>, kind: BlockKind, find: F) -> Vec<Segment>
    where
        F: FnMut(&str) -> Vec<blocks::Claim>,
    {
        let doc = extract_blocks(doc, kind, &mut self.buffers, find);
        debug!("{kind:?} pass: {} blocks", self.buffers.count(kind));
        doc
    }

    /// Macros are the first pass, so line numbers in warnings count from the
    /// start of each text segment plus the lines seen before it.
    fn extract_macros(&mut self, doc: Vec<Segment>) -> Vec<Segment> {
        let Self {
            macros,
            buffers,
            warnings,
            ..
        } = self;
        let mut line = 1;
        let doc = extract_blocks(doc, BlockKind::Macro, buffers, |text| {
            let claims = find_macros(text, line, *macros, warnings);
            line += text.matches('\n').count();
            claims
        });
        debug!("Macro pass: {} blocks", buffers.count(BlockKind::Macro));
        doc
    }
}

/// Renders `text` with the given options and macros.
pub fn render_document(text: &str, options: &Options, macros: &MacroRegistry) -> Rendered {
    Context::new(options, macros).render(text)
}

#[cfg(test)]
mod tests;
