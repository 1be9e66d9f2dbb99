//! Meta payload computation and `<head>` rendering.

use std::fmt::Write;

use docshell_config::SiteConfig;
use serde::{Deserialize, Serialize};

use crate::social;
use crate::url::url_join;

/// Per-page SEO overrides, usually taken from front matter.
///
/// Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoOverrides {
    /// Page title, combined with the site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page path relative to the site URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Share image path relative to the site URL, or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Which attribute names a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttr {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

/// A single `<meta>` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// Naming attribute.
    pub attr: MetaAttr,
    /// Attribute value (`description`, `og:title`, ...).
    pub key: &'static str,
    /// `content` attribute.
    pub content: String,
}

impl MetaTag {
    pub(crate) fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    pub(crate) fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }
}

/// Directives emitted on every page regardless of overrides.
const AUXILIARY_TAGS: [(&str, &str); 3] = [
    ("MobileOptimized", "320"),
    ("HandheldFriendly", "True"),
    ("google", "notranslate"),
];

/// Computed page metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetaPayload {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Canonical page URL.
    pub url: String,
    /// Absolute share image URL.
    pub image: String,
    /// Document language.
    pub language: String,
    /// `<meta>` entries in output order.
    pub tags: Vec<MetaTag>,
    /// schema.org JSON-LD, present only with social tags enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// Compute page metadata from site configuration and page overrides.
///
/// Deterministic: the same inputs always produce the same payload.
#[must_use]
pub fn compute_meta(site: &SiteConfig, overrides: &SeoOverrides) -> MetaPayload {
    let page_title = non_empty(overrides.title.as_deref());

    let title = match page_title {
        Some(title) => format!("{title} | {}", site.title),
        None => site.default_title.clone(),
    };
    let description = non_empty(overrides.description.as_deref())
        .unwrap_or(site.description.as_str())
        .to_owned();
    let url = url_join(&site.url, overrides.slug.as_deref().unwrap_or_default());
    let image = url_join(
        &site.url,
        non_empty(overrides.image.as_deref()).unwrap_or(site.image.as_str()),
    );

    let mut tags = vec![
        MetaTag::name("description", description.clone()),
        MetaTag::property("image", image.clone()),
    ];
    tags.extend(
        AUXILIARY_TAGS
            .iter()
            .map(|&(key, content)| MetaTag::name(key, content)),
    );

    let mut payload = MetaPayload {
        title,
        description,
        url,
        image,
        language: site.language.clone(),
        tags,
        schema: None,
    };

    if site.social_tags {
        payload.tags.extend(social::social_tags(site, &payload));
        payload.schema = Some(social::website_schema(site, &payload));
    }

    tracing::debug!(url = %payload.url, title = %payload.title, "Computed page metadata");
    payload
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl MetaPayload {
    /// Render the payload as `<head>` markup.
    #[must_use]
    pub fn to_head_html(&self) -> String {
        let mut html = String::with_capacity(1024);
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        let _ = writeln!(html, "<link rel=\"canonical\" href=\"{}\">", escape(&self.url));
        for tag in &self.tags {
            let attr = match tag.attr {
                MetaAttr::Name => "name",
                MetaAttr::Property => "property",
            };
            let _ = writeln!(
                html,
                "<meta {attr}=\"{}\" content=\"{}\">",
                tag.key,
                escape(&tag.content)
            );
        }
        if let Some(schema) = &self.schema {
            // `</` cannot appear inside a script element.
            let json = schema.to_string().replace("</", "<\\/");
            let _ = writeln!(
                html,
                "<script type=\"application/ld+json\">{json}</script>"
            );
        }
        html
    }
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
