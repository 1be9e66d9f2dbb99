//! Page metadata for docshell.
//!
//! [`compute_meta`] turns the site configuration and a page's SEO overrides
//! into a [`MetaPayload`]: document title, description, canonical URL and
//! share image, plus a fixed list of `<meta>` directives emitted on every
//! page. [`MetaPayload::to_head_html`] renders it for the `<head>` element.
//!
//! Open Graph, Twitter card and schema.org tags are only added when the
//! site enables `social_tags`.
//!
//! # Example
//!
//! ```
//! use docshell_config::SiteConfig;
//! use docshell_meta::{SeoOverrides, compute_meta};
//!
//! let site = SiteConfig {
//!     title: "Docs".to_owned(),
//!     default_title: "Docs Home".to_owned(),
//!     url: "https://x.io".to_owned(),
//!     ..SiteConfig::default()
//! };
//! let overrides = SeoOverrides {
//!     title: Some("Guide".to_owned()),
//!     slug: Some("guide/intro".to_owned()),
//!     ..SeoOverrides::default()
//! };
//!
//! let meta = compute_meta(&site, &overrides);
//! assert_eq!(meta.title, "Guide | Docs");
//! assert_eq!(meta.url, "https://x.io/guide/intro");
//! ```

mod payload;
mod social;
mod url;

pub use payload::{MetaAttr, MetaPayload, MetaTag, SeoOverrides, compute_meta};
pub use url::url_join;
