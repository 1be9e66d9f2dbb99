//! Theme content rules.

use std::fmt::Write;

use docshell_renderer::{RenderBackend, escape_html};

/// Content rules applied to page bodies.
///
/// - inline code gets the `inline-code` class
/// - tables scroll horizontally inside a wrapper instead of overflowing
/// - fences with a language that no processor claimed fall back to a
///   labelled `<pre>`
pub struct ThemeRules;

impl RenderBackend for ThemeRules {
    fn code_block(lang: &str, content: &str, out: &mut String) {
        let _ = write!(
            out,
            r#"<pre class="language-{lang}"><code>{}</code></pre>"#,
            escape_html(content),
            lang = escape_html(lang),
        );
    }

    fn inline_code(code: &str, out: &mut String) {
        out.push_str(r#"<code class="inline-code">"#);
        out.push_str(&escape_html(code));
        out.push_str("</code>");
    }

    fn table_start(out: &mut String) {
        out.push_str(r#"<div style="overflow-x: auto"><table>"#);
    }

    fn table_end(out: &mut String) {
        out.push_str("</table></div>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}" loading="lazy""#,
            escape_html(src),
            escape_html(alt)
        );
        if !title.is_empty() {
            let _ = write!(out, r#" title="{}""#, escape_html(title));
        }
        out.push('>');
    }
}
