//! # Options
//!
//! The fixed set of rendering options: link and image base paths, the four
//! link renderers and the page catalog. Keys are a closed enum, so an unknown
//! key can only come in through [`OptionKey::from_str`].

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    error::EngineError,
    pages::{PageCatalog, PageExists},
    render::{Renderer, Template},
};

pub const DEFAULT_EXTERNAL_LINK: &str = r#"<a class="external" href="{url}">{text}</a>"#;
pub const DEFAULT_INTERNAL_LINK: &str = r#"<a class="internal" href="{url}">{text}</a>"#;
pub const DEFAULT_MISSING_LINK: &str =
    r#"<a class="internal missing" href="{url}" title="Create this page">{text}</a>"#;
pub const DEFAULT_URL_LINK: &str = r#"<a class="external" href="{url}">{url}</a>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    BaseUrl,
    ImageBaseUrl,
    ExternalLink,
    InternalLink,
    MissingLink,
    UrlLink,
    Pages,
}

impl OptionKey {
    pub const ALL: [OptionKey; 7] = [
        OptionKey::BaseUrl,
        OptionKey::ImageBaseUrl,
        OptionKey::ExternalLink,
        OptionKey::InternalLink,
        OptionKey::MissingLink,
        OptionKey::UrlLink,
        OptionKey::Pages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::BaseUrl => "base_url",
            OptionKey::ImageBaseUrl => "image_base_url",
            OptionKey::ExternalLink => "external_link",
            OptionKey::InternalLink => "internal_link",
            OptionKey::MissingLink => "missing_link",
            OptionKey::UrlLink => "url_link",
            OptionKey::Pages => "pages",
        }
    }

    fn is_link(self) -> bool {
        matches!(
            self,
            OptionKey::ExternalLink
                | OptionKey::InternalLink
                | OptionKey::MissingLink
                | OptionKey::UrlLink
        )
    }
}

impl FromStr for OptionKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EngineError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for one option.
///
/// Link options accept `Text` (parsed as a template) or a `Renderer`;
/// `pages` accepts `Pages(None)` to clear the catalog.
#[derive(Clone)]
pub enum OptionValue {
    Text(String),
    Renderer(Renderer),
    Pages(Option<Arc<dyn PageExists>>),
}

impl OptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            OptionValue::Text(_) => "text",
            OptionValue::Renderer(_) => "renderer",
            OptionValue::Pages(_) => "pages",
        }
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            OptionValue::Renderer(r) => f.debug_tuple("Renderer").field(r).finish(),
            OptionValue::Pages(Some(_)) => f.write_str("Pages(Some(..))"),
            OptionValue::Pages(None) => f.write_str("Pages(None)"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<Renderer> for OptionValue {
    fn from(r: Renderer) -> Self {
        OptionValue::Renderer(r)
    }
}

impl From<Template> for OptionValue {
    fn from(t: Template) -> Self {
        OptionValue::Renderer(Renderer::Template(t))
    }
}

impl From<PageCatalog> for OptionValue {
    fn from(catalog: PageCatalog) -> Self {
        OptionValue::Pages(Some(Arc::new(catalog)))
    }
}

impl From<Arc<dyn PageExists>> for OptionValue {
    fn from(pages: Arc<dyn PageExists>) -> Self {
        OptionValue::Pages(Some(pages))
    }
}

/// Rendering options. Every field has a default, so `Options::default()`
/// renders the standard link forms with empty base paths and no catalog.
#[derive(Clone)]
pub struct Options {
    base_url: String,
    image_base_url: String,
    external_link: Renderer,
    internal_link: Renderer,
    missing_link: Renderer,
    url_link: Renderer,
    pages: Option<Arc<dyn PageExists>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            image_base_url: String::new(),
            external_link: Renderer::from_default(DEFAULT_EXTERNAL_LINK),
            internal_link: Renderer::from_default(DEFAULT_INTERNAL_LINK),
            missing_link: Renderer::from_default(DEFAULT_MISSING_LINK),
            url_link: Renderer::from_default(DEFAULT_URL_LINK),
            pages: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one option. On error the options are unchanged.
    pub fn set(&mut self, key: OptionKey, value: impl Into<OptionValue>) -> Result<(), EngineError> {
        let value = value.into();
        match key {
            OptionKey::BaseUrl | OptionKey::ImageBaseUrl => {
                let OptionValue::Text(text) = value else {
                    return Err(invalid_value(key, "a string", &value));
                };
                if key == OptionKey::BaseUrl {
                    self.base_url = text;
                } else {
                    self.image_base_url = text;
                }
            }
            OptionKey::Pages => {
                let OptionValue::Pages(pages) = value else {
                    return Err(invalid_value(key, "a page catalog", &value));
                };
                self.pages = pages;
            }
            _ => {
                let renderer = link_renderer(key, value)?;
                *self.renderer_mut(key) = renderer;
            }
        }
        Ok(())
    }

    /// Builder form of [`Options::set`].
    pub fn with(mut self, key: OptionKey, value: impl Into<OptionValue>) -> Result<Self, EngineError> {
        self.set(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::BaseUrl => OptionValue::Text(self.base_url.clone()),
            OptionKey::ImageBaseUrl => OptionValue::Text(self.image_base_url.clone()),
            OptionKey::Pages => OptionValue::Pages(self.pages.clone()),
            OptionKey::ExternalLink => OptionValue::Renderer(self.external_link.clone()),
            OptionKey::InternalLink => OptionValue::Renderer(self.internal_link.clone()),
            OptionKey::MissingLink => OptionValue::Renderer(self.missing_link.clone()),
            OptionKey::UrlLink => OptionValue::Renderer(self.url_link.clone()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn external_link(&self) -> &Renderer {
        &self.external_link
    }

    pub fn internal_link(&self) -> &Renderer {
        &self.internal_link
    }

    pub fn missing_link(&self) -> &Renderer {
        &self.missing_link
    }

    pub fn url_link(&self) -> &Renderer {
        &self.url_link
    }

    /// Whether a page exists. Without a catalog every page exists.
    pub fn page_exists(&self, slug: &str) -> bool {
        self.pages.as_ref().is_none_or(|pages| pages.exists(slug))
    }

    fn renderer_mut(&mut self, key: OptionKey) -> &mut Renderer {
        match key {
            OptionKey::ExternalLink => &mut self.external_link,
            OptionKey::InternalLink => &mut self.internal_link,
            OptionKey::MissingLink => &mut self.missing_link,
            _ => &mut self.url_link,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("external_link", &self.external_link)
            .field("internal_link", &self.internal_link)
            .field("missing_link", &self.missing_link)
            .field("url_link", &self.url_link)
            .field("pages", &self.pages.as_ref().map(|_| ".."))
            .finish()
    }
}

fn link_renderer(key: OptionKey, value: OptionValue) -> Result<Renderer, EngineError> {
    debug_assert!(key.is_link());
    let url_only = key == OptionKey::UrlLink;
    let template = match value {
        OptionValue::Text(source) => {
            let parsed = if url_only {
                Template::parse_url_only(&source)
            } else {
                Template::parse(&source)
            };
            parsed.map_err(|source| EngineError::InvalidTemplate {
                key: key.to_string(),
                source,
            })?
        }
        OptionValue::Renderer(Renderer::Template(template)) if url_only => {
            Template::parse_url_only(template.source()).map_err(|source| {
                EngineError::InvalidTemplate {
                    key: key.to_string(),
                    source,
                }
            })?
        }
        OptionValue::Renderer(renderer) => return Ok(renderer),
        other => return Err(invalid_value(key, "a template or renderer", &other)),
    };
    Ok(Renderer::Template(template))
}

fn invalid_value(key: OptionKey, expected: &'static str, got: &OptionValue) -> EngineError {
    log::debug!("option `{key}` rejected a {} value", got.kind());
    EngineError::InvalidOptionValue {
        key: key.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LinkRenderer;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_render_standard_forms() {
        let options = Options::default();
        assert_eq!(options.base_url(), "");
        assert_eq!(
            options.external_link().render("http://x.org", "X"),
            r#"<a class="external" href="http://x.org">X</a>"#
        );
        assert_eq!(
            options.missing_link().render("P", "P"),
            r#"<a class="internal missing" href="P" title="Create this page">P</a>"#
        );
        assert_eq!(
            options.url_link().render("http://x.org", "ignored"),
            r#"<a class="external" href="http://x.org">http://x.org</a>"#
        );
        assert!(options.page_exists("Anything"));
    }

    #[rstest]
    #[case("base_url", OptionKey::BaseUrl)]
    #[case("image_base_url", OptionKey::ImageBaseUrl)]
    #[case("external_link", OptionKey::ExternalLink)]
    #[case("internal_link", OptionKey::InternalLink)]
    #[case("missing_link", OptionKey::MissingLink)]
    #[case("url_link", OptionKey::UrlLink)]
    #[case("pages", OptionKey::Pages)]
    fn parses_keys(#[case] name: &str, #[case] key: OptionKey) {
        assert_eq!(name.parse::<OptionKey>().unwrap(), key);
        assert_eq!(key.to_string(), name);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "colour".parse::<OptionKey>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownOption(ref k) if k == "colour"));
    }

    #[test]
    fn sets_and_gets_text() {
        let mut options = Options::default();
        options.set(OptionKey::BaseUrl, "/wiki/").unwrap();
        assert_eq!(options.get(OptionKey::BaseUrl).as_text(), Some("/wiki/"));
    }

    #[test]
    fn wrong_value_kind_is_rejected() {
        let mut options = Options::default();
        let err = options
            .set(OptionKey::BaseUrl, PageCatalog::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptionValue { .. }));
        let err = options.set(OptionKey::Pages, "Home").unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptionValue { .. }));
        let err = options.set(OptionKey::InternalLink, PageCatalog::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptionValue { .. }));
    }

    #[test]
    fn text_link_values_are_templates() {
        let options = Options::default()
            .with(OptionKey::InternalLink, r#"<a href="{url}">{text}</a>"#)
            .unwrap();
        assert_eq!(options.internal_link().render("/p", "P"), r#"<a href="/p">P</a>"#);
        match options.get(OptionKey::InternalLink) {
            OptionValue::Renderer(r) => {
                assert_eq!(r.template().map(Template::source), Some(r#"<a href="{url}">{text}</a>"#))
            }
            other => panic!("expected renderer, got {other:?}"),
        }
    }

    #[test]
    fn malformed_template_leaves_option_unchanged() {
        let mut options = Options::default();
        let err = options.set(OptionKey::ExternalLink, "<a>{link}</a>").unwrap_err();
        assert!(matches!(err, EngineError::InvalidTemplate { ref key, .. } if key == "external_link"));
        assert_eq!(
            options.external_link().render("u", "t"),
            r#"<a class="external" href="u">t</a>"#
        );
    }

    #[test]
    fn url_link_accepts_only_url_slot() {
        let mut options = Options::default();
        assert!(options.set(OptionKey::UrlLink, "<a>{text}</a>").is_err());
        let template = Template::parse("<a>{text}</a>").unwrap();
        assert!(options.set(OptionKey::UrlLink, template).is_err());
        assert!(options.set(OptionKey::UrlLink, "<{url}>").is_ok());
        assert_eq!(options.url_link().render("u", "u"), "<u>");
    }

    #[test]
    fn custom_renderers_are_accepted() {
        let mut options = Options::default();
        options
            .set(
                OptionKey::ExternalLink,
                Renderer::custom(|url, text| format!("{text} <{url}>")),
            )
            .unwrap();
        assert_eq!(options.external_link().render("u", "t"), "t <u>");
    }

    #[test]
    fn catalog_decides_existence() {
        let catalog: PageCatalog = ["Home"].into_iter().collect();
        let mut options = Options::default().with(OptionKey::Pages, catalog).unwrap();
        assert!(options.page_exists("Home"));
        assert!(!options.page_exists("Away"));
        options.set(OptionKey::Pages, OptionValue::Pages(None)).unwrap();
        assert!(options.page_exists("Away"));
    }
}
