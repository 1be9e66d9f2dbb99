//! Plain HTML backend.
//!
//! Produces semantic HTML5 with no theme-specific classes.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::util::escape_html;

/// HTML render backend.
///
/// Produces:
/// - `<pre><code class="language-*">` for annotated code blocks
/// - `<pre>` for bare code blocks
/// - bare `<table>` and `<code>` elements
/// - `<img>` for images
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: &str, content: &str, out: &mut String) {
        let _ = write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        );
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        let _ = write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        );
    }
}
