//! Markdown to sanitized HTML
//!
//! The only code path allowed to produce HTML for the render tree.
//! Markdown is rendered with pulldown-cmark (raw HTML passes through the
//! parser untouched) and the result is cleaned by an ammonia allow-list:
//! anything not explicitly listed below is removed.

use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use thiserror::Error;

/// Markdown shown when a tab has no content configured
pub const NO_CONTENT_MARKDOWN: &str = "# No Content";

/// Largest markdown document accepted for rendering
pub const MAX_MARKDOWN_BYTES: usize = 512 * 1024;

const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "ul", "ol", "li", "em", "strong",
    "code", "pre", "blockquote", "a", "img", "table", "thead", "tbody", "tr", "th", "td",
];

const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title", "class"];

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "callto", "cid", "xmpp"];

/// Tags removed together with everything inside them
const STRIPPED_CONTENT_TAGS: &[&str] = &["script", "style"];

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::empty();
    builder
        .add_tags(ALLOWED_TAGS.iter().copied())
        .add_generic_attributes(ALLOWED_ATTRIBUTES.iter().copied())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .url_relative(UrlRelative::Custom(Box::new(same_origin_relative)))
        .clean_content_tags(STRIPPED_CONTENT_TAGS.iter().copied().collect::<HashSet<_>>())
        .link_rel(Some("noopener noreferrer"));
    builder
});

/// Relative URLs stay as written unless they are protocol-relative
/// (`//host/...`, or the `/\host` spelling browsers treat the same way).
fn same_origin_relative(url: &str) -> Option<Cow<'_, str>> {
    let normalized = url.trim_start().replace('\\', "/");
    if normalized.starts_with("//") {
        None
    } else {
        Some(Cow::Borrowed(url))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("markdown document is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

/// HTML that has passed through [`sanitize_markdown`].
///
/// Cannot be constructed any other way, so holding one is proof the
/// content went through the allow-list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SanitizedHtml {
    html: String,
}

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.html
    }
}

impl std::fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html)
    }
}

/// Render markdown and strip every tag, attribute and URL scheme outside
/// the allow-list. Blank input renders the "No Content" heading.
pub fn sanitize_markdown(markdown: &str) -> Result<SanitizedHtml, SanitizeError> {
    if markdown.len() > MAX_MARKDOWN_BYTES {
        return Err(SanitizeError::TooLarge {
            size: markdown.len(),
            limit: MAX_MARKDOWN_BYTES,
        });
    }

    let source = if markdown.trim().is_empty() {
        NO_CONTENT_MARKDOWN
    } else {
        markdown
    };

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, Parser::new_ext(source, Options::ENABLE_TABLES));

    Ok(SanitizedHtml {
        html: SANITIZER.clean(&rendered).to_string(),
    })
}
