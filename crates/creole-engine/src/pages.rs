//! Page existence and slug normalisation.

use std::collections::{BTreeSet, HashSet};

/// Characters that never appear in a page slug.
const SLUG_ILLEGAL: &[char] = &[
    '`', '#', '%', '^', '&', '*', '=', '[', ']', '{', '}', '|', '\\', '\'', '"', '<', '>', '/',
    '?',
];

/// Answers whether a page with the given slug exists.
pub trait PageExists: Send + Sync {
    fn exists(&self, slug: &str) -> bool;
}

impl<F> PageExists for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, slug: &str) -> bool {
        self(slug)
    }
}

/// Normalises a page title into the slug used in hrefs and catalog lookups.
///
/// HTML entities are decoded first, then spaces become hyphens and the
/// characters that are illegal in a slug are dropped.
pub fn slugify(title: &str) -> String {
    html_escape::decode_html_entities(title)
        .chars()
        .filter(|c| !SLUG_ILLEGAL.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// A fixed set of existing page slugs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCatalog {
    slugs: HashSet<String>,
}

impl PageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page by title; the title is slugified.
    pub fn insert(&mut self, title: &str) -> bool {
        self.slugs.insert(slugify(title))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Slugs in sorted order.
    pub fn slugs(&self) -> BTreeSet<&str> {
        self.slugs.iter().map(String::as_str).collect()
    }
}

impl PageExists for PageCatalog {
    fn exists(&self, slug: &str) -> bool {
        self.contains(slug)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PageCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for title in iter {
            catalog.insert(title.as_ref());
        }
        catalog
    }
}

impl<S: AsRef<str>> Extend<S> for PageCatalog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for title in iter {
            self.insert(title.as_ref());
        }
    }
}
