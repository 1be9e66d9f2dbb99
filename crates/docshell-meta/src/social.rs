//! Open Graph, Twitter card and schema.org tags.
//!
//! Only emitted when `site.social_tags` is enabled.

use docshell_config::SiteConfig;
use serde_json::json;

use crate::payload::{MetaPayload, MetaTag};

const BANNER_ALT: &str = "Banner";
const BANNER_WIDTH: &str = "1200";
const BANNER_HEIGHT: &str = "630";

/// Build the Open Graph and Twitter card tags for a computed payload.
pub(crate) fn social_tags(site: &SiteConfig, meta: &MetaPayload) -> Vec<MetaTag> {
    vec![
        MetaTag::name("referrer", "no-referrer-when-downgrade"),
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:title", meta.title.as_str()),
        MetaTag::property("og:description", meta.description.as_str()),
        MetaTag::property("og:url", meta.url.as_str()),
        MetaTag::property("og:locale", site.language.as_str()),
        MetaTag::property("og:site_name", site.title.as_str()),
        MetaTag::property("og:image", meta.image.as_str()),
        MetaTag::property("og:image:secure_url", meta.image.as_str()),
        MetaTag::property("og:image:alt", BANNER_ALT),
        MetaTag::property("og:image:type", "image/png"),
        MetaTag::property("og:image:width", BANNER_WIDTH),
        MetaTag::property("og:image:height", BANNER_HEIGHT),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("twitter:title", meta.title.as_str()),
        MetaTag::name("twitter:site", site.author.as_str()),
        MetaTag::name("twitter:creator", site.author.as_str()),
        MetaTag::name("twitter:image", meta.image.as_str()),
        MetaTag::name("twitter:image:src", meta.image.as_str()),
        MetaTag::name("twitter:image:alt", BANNER_ALT),
        MetaTag::name("twitter:image:width", BANNER_WIDTH),
        MetaTag::name("twitter:image:height", BANNER_HEIGHT),
    ]
}

/// Build the schema.org `WebSite` description.
pub(crate) fn website_schema(site: &SiteConfig, meta: &MetaPayload) -> serde_json::Value {
    json!([{
        "@context": "http://schema.org",
        "@type": "WebSite",
        "url": meta.url,
        "name": meta.title,
        "alternateName": site.title_short,
    }])
}
