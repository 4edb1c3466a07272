//! # Link Rendering
//!
//! Every link form (external, internal, missing page, free URL) is produced by
//! a [`LinkRenderer`]: `render(url, text) -> html`. A [`Template`] string such
//! as `<a href="{url}">{text}</a>` and any `Fn(&str, &str) -> String` both
//! satisfy it; [`Renderer`] is the closed set the options store.

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

/// Renders one link from its URL and display text.
pub trait LinkRenderer: Send + Sync {
    fn render(&self, url: &str, text: &str) -> String;
}

impl<F> LinkRenderer for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn render(&self, url: &str, text: &str) -> String {
        self(url, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown slot `{{{name}}}` at byte {offset}")]
    UnknownSlot { name: String, offset: usize },
    #[error("unclosed `{{` at byte {offset}")]
    Unclosed { offset: usize },
    #[error("unmatched `}}` at byte {offset}")]
    UnmatchedClose { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Url,
    Text,
}

/// A format template over the `{url}` and `{text}` slots.
///
/// `{{` and `}}` write literal braces. The template is parsed once, and
/// rendering fills the slots in a single pass, so a URL or text that itself
/// contains `{text}` is copied as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    parts: Vec<Part>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        Self::parse_slots(source, true)
    }

    /// Parses a template that may only use the `{url}` slot.
    pub fn parse_url_only(source: &str) -> Result<Self, TemplateError> {
        Self::parse_slots(source, false)
    }

    fn parse_slots(source: &str, allow_text: bool) -> Result<Self, TemplateError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed { offset });
                    }
                    let part = match name.as_str() {
                        "url" => Some(Part::Url),
                        "text" if allow_text => Some(Part::Text),
                        _ => None,
                    };
                    let Some(part) = part else {
                        return Err(TemplateError::UnknownSlot { name, offset });
                    };
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(part);
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClose { offset }),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    /// The template as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template has a `{text}` slot.
    pub fn uses_text(&self) -> bool {
        self.parts.contains(&Part::Text)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl LinkRenderer for Template {
    fn render(&self, url: &str, text: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + url.len() + text.len());
        for part in &self.parts {
            match part {
                Part::Literal(s) => out.push_str(s),
                Part::Url => out.push_str(url),
                Part::Text => out.push_str(text),
            }
        }
        out
    }
}

/// A link renderer as stored in the options: a template or a host function.
#[derive(Clone)]
pub enum Renderer {
    Template(Template),
    Custom(Arc<dyn LinkRenderer>),
}

impl Renderer {
    /// Wraps a host function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Renderer::Custom(Arc::new(f))
    }

    /// The template, when this renderer is one.
    pub fn template(&self) -> Option<&Template> {
        match self {
            Renderer::Template(t) => Some(t),
            Renderer::Custom(_) => None,
        }
    }

    pub(crate) fn from_default(source: &str) -> Self {
        Renderer::Template(Template::parse(source).expect("Invalid default link template"))
    }
}

impl LinkRenderer for Renderer {
    fn render(&self, url: &str, text: &str) -> String {
        match self {
            Renderer::Template(t) => t.render(url, text),
            Renderer::Custom(f) => f.render(url, text),
        }
    }
}

impl From<Template> for Renderer {
    fn from(t: Template) -> Self {
        Renderer::Template(t)
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Template(t) => f.debug_tuple("Template").field(&t.source).finish(),
            Renderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
