//! Bracketed links, images and free URLs.
//!
//! These passes run on escaped, span-formatted text in which link targets,
//! image sources and free URLs were kept away from the span passes. Images
//! go first so an image may serve as a link's display text.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    kinds::{ESCAPE, ImageTag, LinkTag},
    url,
};
use crate::{options::Options, pages::slugify, render::LinkRenderer};

pub(crate) fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        Regex::new(&format!(
            r"{open}([^\[\]|\n]+?)(?:\{sep}(.*?))?{close}",
            open = regex::escape(LinkTag::OPEN),
            sep = LinkTag::SEPARATOR,
            close = regex::escape(LinkTag::CLOSE),
        ))
        .expect("Invalid link regex")
    })
}

pub(crate) fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| {
        Regex::new(&format!(
            r"{open}([^{{}}|\n]+?)(?:\{sep}([^{{}}\n]*?))?{close}",
            open = regex::escape(ImageTag::OPEN),
            sep = ImageTag::SEPARATOR,
            close = regex::escape(ImageTag::CLOSE),
        ))
        .expect("Invalid image regex")
    })
}

/// Whether the match at `start` sits directly after the escape marker.
pub(crate) fn is_escaped(text: &str, start: usize) -> bool {
    text.as_bytes()[..start].last() == Some(&ESCAPE)
}

/// `{{source}}` and `{{source|alt}}` to `<img />`.
pub fn images(text: &str, options: &Options) -> String {
    if !text.contains(ImageTag::OPEN) {
        return text.to_string();
    }
    image_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            if is_escaped(text, caps.get(0).map_or(0, |m| m.start())) {
                return whole.to_string();
            }
            let source = caps[1].trim();
            let src = if source.contains('/') {
                source.to_string()
            } else {
                format!("{}{source}", options.image_base_url())
            };
            match caps.get(2).map(|m| m.as_str().trim()) {
                Some(alt) if !alt.is_empty() => {
                    format!(r#"<img src="{src}" alt="{}" />"#, strip_tags(alt))
                }
                _ => format!(r#"<img src="{src}" />"#),
            }
        })
        .into_owned()
}

/// Alt text has been span formatted like any other text; attributes only
/// take its plain text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `[[target]]` and `[[target|display]]` to external, internal or missing
/// page links.
pub fn links(text: &str, options: &Options) -> String {
    if !text.contains(LinkTag::OPEN) {
        return text.to_string();
    }
    link_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            if is_escaped(text, caps.get(0).map_or(0, |m| m.start())) {
                return whole.to_string();
            }
            let target = caps[1].trim();
            let display = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|d| !d.is_empty())
                .unwrap_or(target);

            if url::is_url(target) {
                return options.external_link().render(&url::href(target), display);
            }

            let slug = slugify(target);
            let href = format!("{}{slug}", options.base_url());
            if options.page_exists(&slug) {
                options.internal_link().render(&href, display)
            } else {
                log::trace!("link to missing page `{slug}`");
                options.missing_link().render(&href, display)
            }
        })
        .into_owned()
}

/// Links URLs that follow whitespace or start the text. Text inside
/// rendered anchors is left alone.
pub fn autolink(text: &str, options: &Options) -> String {
    if !url::free_url_regex().is_match(text) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 32);
    let mut rest = text;
    while let Some(open) = find_anchor(rest) {
        out.push_str(&autolink_plain(&rest[..open], options));
        let close = rest[open..]
            .find(ANCHOR_CLOSE)
            .map_or(rest.len(), |n| open + n + ANCHOR_CLOSE.len());
        out.push_str(&rest[open..close]);
        rest = &rest[close..];
    }
    out.push_str(&autolink_plain(rest, options));
    out
}

const ANCHOR_CLOSE: &str = "</a>";

fn find_anchor(text: &str) -> Option<usize> {
    text.match_indices("<a").map(|(i, _)| i).find(|&i| {
        matches!(text.as_bytes().get(i + 2), Some(b' ' | b'>'))
    })
}

fn autolink_plain(text: &str, options: &Options) -> String {
    url::free_url_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let lead = &caps[1];
            let candidate = &caps[2];
            match url::trim_trailing(candidate) {
                Some(found) => format!(
                    "{lead}{}{}",
                    options.url_link().render(&url::href(found), found),
                    &candidate[found.len()..]
                ),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
