//! Default code-block renderer.
//!
//! Handles every fence that carries a language or metadata:
//!
//! ````markdown
//! ```rust title="main.rs" {1,3-4}
//! fn main() {
//! ```
//! ````
//!
//! `title=` becomes a caption above the block, `{...}` lists 1-based line
//! numbers and inclusive ranges to highlight. The language is shown as a
//! label and kept as a `language-*` class for client-side highlighters.

use std::collections::BTreeSet;
use std::fmt::Write;

use docshell_renderer::{CodeBlockProcessor, CodeFence, ProcessResult, escape_html};

/// Theme code-block processor.
#[derive(Debug, Default)]
pub struct ThemeCodeBlocks {
    warnings: Vec<String>,
}

impl ThemeCodeBlocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn highlighted_lines(&mut self, fence: &CodeFence<'_>) -> BTreeSet<usize> {
        let mut lines = BTreeSet::new();
        let Some(group) = highlight_group(fence.meta) else {
            return lines;
        };

        let line_count = fence.source.lines().count();
        for part in group.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match parse_range(part) {
                Some((start, end)) if start <= line_count => {
                    if end > line_count {
                        self.warnings.push(format!(
                            "code block {}: line highlight `{part}` past last line {line_count}",
                            fence.index
                        ));
                    }
                    lines.extend(start..=end.min(line_count));
                }
                Some(_) => self.warnings.push(format!(
                    "code block {}: line highlight `{part}` past last line {line_count}",
                    fence.index
                )),
                None => self.warnings.push(format!(
                    "code block {}: invalid line highlight `{part}`",
                    fence.index
                )),
            }
        }
        lines
    }
}

impl CodeBlockProcessor for ThemeCodeBlocks {
    fn process(&mut self, fence: &CodeFence<'_>) -> ProcessResult {
        let highlighted = self.highlighted_lines(fence);
        let mut html = String::with_capacity(fence.source.len() + 128);

        html.push_str(r#"<div class="code-block""#);
        if let Some(lang) = fence.language {
            let _ = write!(html, r#" data-language="{}""#, escape_html(lang));
        }
        html.push('>');

        if let Some(title) = fence.attrs.get("title").filter(|t| !t.is_empty()) {
            let _ = write!(
                html,
                r#"<div class="code-title">{}</div>"#,
                escape_html(title)
            );
        }

        match fence.language {
            Some(lang) => {
                let lang = escape_html(lang);
                let _ = write!(
                    html,
                    r#"<span class="code-language">{lang}</span><pre class="language-{lang}"><code>"#
                );
            }
            None => html.push_str("<pre><code>"),
        }

        for (number, line) in fence.source.lines().enumerate() {
            let class = if highlighted.contains(&(number + 1)) {
                "code-line highlighted"
            } else {
                "code-line"
            };
            let _ = writeln!(
                html,
                r#"<span class="{class}">{}</span>"#,
                escape_html(line)
            );
        }

        html.push_str("</code></pre></div>");
        ProcessResult::Inline(html)
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Contents of the first `{...}` group in fence metadata.
fn highlight_group(meta: &str) -> Option<&str> {
    let start = meta.find('{')?;
    let end = start + meta[start..].find('}')?;
    Some(&meta[start + 1..end])
}

/// Parse `3` or `3-5` into an inclusive 1-based range.
fn parse_range(part: &str) -> Option<(usize, usize)> {
    let (start, end) = match part.split_once('-') {
        Some((start, end)) => (start.trim().parse().ok()?, end.trim().parse().ok()?),
        None => {
            let line = part.parse().ok()?;
            (line, line)
        }
    };
    (start >= 1 && start <= end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use docshell_renderer::MarkdownRenderer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::ThemeRules;

    fn render(markdown: &str) -> (String, Vec<String>) {
        let result = MarkdownRenderer::<ThemeRules>::new()
            .with_processor(ThemeCodeBlocks::new())
            .render_markdown(markdown);
        (result.html, result.warnings)
    }

    #[test]
    fn test_language_label() {
        let (html, warnings) = render("```rust\nfn main() {}\n```");
        assert_eq!(
            html,
            "<div class=\"code-block\" data-language=\"rust\">\
             <span class=\"code-language\">rust</span>\
             <pre class=\"language-rust\"><code>\
             <span class=\"code-line\">fn main() {}</span>\n\
             </code></pre></div>"
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_title_caption() {
        let (html, _) = render("```js title=\"app.js\"\nrun();\n```");
        assert!(html.contains(r#"<div class="code-title">app.js</div>"#));
    }

    #[test]
    fn test_line_highlights() {
        let (html, warnings) = render("```text {1,3-4}\na\nb\nc\nd\ne\n```");
        let highlighted: Vec<_> = html
            .lines()
            .filter(|l| l.contains("highlighted"))
            .collect();
        assert_eq!(highlighted.len(), 3);
        assert!(html.contains(r#"<span class="code-line highlighted">a</span>"#));
        assert!(html.contains(r#"<span class="code-line">b</span>"#));
        assert!(html.contains(r#"<span class="code-line highlighted">d</span>"#));
        assert!(html.contains(r#"<span class="code-line">e</span>"#));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_metadata_without_language() {
        let (html, _) = render("``` title=notes\nx\n```");
        assert!(html.starts_with(r#"<div class="code-block"><div class="code-title">notes</div><pre><code>"#));
    }

    #[test]
    fn test_invalid_highlight_warns() {
        let (html, warnings) = render("```rust {0,x,4-2}\nfn main() {}\n```");
        assert!(!html.contains("highlighted"));
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0], "code block 0: invalid line highlight `0`");
    }

    #[test]
    fn test_source_escaped() {
        let (html, _) = render("```html\n<b>\n```");
        assert!(html.contains(r#"<span class="code-line">&lt;b&gt;</span>"#));
    }

    #[test]
    fn test_bare_fence_not_processed() {
        let (html, _) = render("```\nplain\n```");
        assert_eq!(html, "<pre>plain\n</pre>");
    }

    #[test]
    fn test_highlight_clamped_to_block() {
        let (html, warnings) = render("```rust {1-18446744073709551615}\nfn main() {}\n```");
        assert!(html.contains(r#"<span class="code-line highlighted">fn main() {}</span>"#));
        assert_eq!(
            warnings,
            ["code block 0: line highlight `1-18446744073709551615` past last line 1"]
        );
    }

    #[test]
    fn test_highlight_starting_past_block() {
        let (html, warnings) = render("```rust {5-9}\na\nb\n```");
        assert!(!html.contains("highlighted"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("3"), Some((3, 3)));
        assert_eq!(parse_range("3-5"), Some((3, 5)));
        assert_eq!(parse_range(" 2 - 2 "), Some((2, 2)));
        assert_eq!(parse_range("5-3"), None);
        assert_eq!(parse_range("0"), None);
    }
}
