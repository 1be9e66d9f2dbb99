//! Render backend trait for node-specific output.
//!
//! A backend is the set of content rules a theme applies to markdown nodes.
//! Each method handles exactly one node kind, so swapping the backend type
//! swaps the rule for that kind without touching the event loop.

use std::borrow::Cow;

use crate::util::escape_html;

/// Backend trait for node-specific rendering operations.
///
/// Only code blocks and images are required. Everything else has a plain
/// HTML5 default that themes override selectively.
pub trait RenderBackend {
    /// Render a fenced code block that carries a language.
    ///
    /// Called when no [`CodeBlockProcessor`](crate::CodeBlockProcessor)
    /// claimed the fence.
    fn code_block(lang: &str, content: &str, out: &mut String);

    /// Render a code block without language or metadata as preformatted text.
    fn preformatted(content: &str, out: &mut String) {
        out.push_str("<pre>");
        out.push_str(&escape_html(content));
        out.push_str("</pre>");
    }

    /// Render an inline code span.
    fn inline_code(code: &str, out: &mut String) {
        out.push_str("<code>");
        out.push_str(&escape_html(code));
        out.push_str("</code>");
    }

    /// Open a table.
    fn table_start(out: &mut String) {
        out.push_str("<table>");
    }

    /// Close a table opened by [`table_start`](Self::table_start).
    fn table_end(out: &mut String) {
        out.push_str("</table>");
    }

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL
    /// * `alt` - Alt text for the image
    /// * `title` - Title attribute, empty when absent
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Transform a link URL.
    ///
    /// Default implementation returns the URL unchanged.
    #[must_use]
    fn transform_link(url: &str) -> Cow<'_, str> {
        Cow::Borrowed(url)
    }

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
