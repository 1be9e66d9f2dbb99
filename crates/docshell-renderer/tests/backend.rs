use std::borrow::Cow;

use docshell_renderer::{
    CodeBlockProcessor, CodeFence, MarkdownRenderer, ProcessResult, RenderBackend, escape_html,
};
use pretty_assertions::assert_eq;

/// Backend that overrides every optional rule.
struct Marked;

impl RenderBackend for Marked {
    fn code_block(lang: &str, content: &str, out: &mut String) {
        out.push_str(&format!("[code {lang}]{}", escape_html(content)));
    }

    fn preformatted(content: &str, out: &mut String) {
        out.push_str(&format!("[pre]{}", escape_html(content)));
    }

    fn inline_code(code: &str, out: &mut String) {
        out.push_str(&format!("[ic]{code}[/ic]"));
    }

    fn table_start(out: &mut String) {
        out.push_str("[table]");
    }

    fn table_end(out: &mut String) {
        out.push_str("[/table]");
    }

    fn image(src: &str, _alt: &str, _title: &str, out: &mut String) {
        out.push_str(&format!("[img {src}]"));
    }

    fn transform_link(url: &str) -> Cow<'_, str> {
        match url.strip_suffix(".md") {
            Some(stem) => Cow::Owned(format!("{stem}/")),
            None => Cow::Borrowed(url),
        }
    }
}

struct Counter {
    seen: Vec<usize>,
}

impl CodeBlockProcessor for Counter {
    fn process(&mut self, fence: &CodeFence<'_>) -> ProcessResult {
        self.seen.push(fence.index);
        ProcessResult::PassThrough
    }
}

#[test]
fn each_node_kind_routes_to_its_rule() {
    let markdown = "\
Use `x` and [next](guide.md).

```
bare
```

```rust
fn f() {}
```

| a |
|---|
| 1 |
";
    let html = MarkdownRenderer::<Marked>::new()
        .with_processor(Counter { seen: vec![] })
        .render_markdown(markdown)
        .html;

    assert!(html.contains("[ic]x[/ic]"));
    assert!(html.contains(r#"<a href="guide/">next</a>"#));
    assert!(html.contains("[pre]bare\n"));
    assert!(html.contains("[code rust]fn f() {}\n"));
    assert!(html.starts_with("<p>"));
    assert!(html.contains("[table]<thead>"));
    assert!(html.ends_with("</tbody>[/table]"));
}

#[test]
fn title_and_toc_extracted_together() {
    let result = MarkdownRenderer::<Marked>::new()
        .with_title_extraction()
        .render_markdown("# Guide\n\n## Setup\n\n## Setup\n\n### Deep `code`\n");

    assert_eq!(result.title.as_deref(), Some("Guide"));
    let ids: Vec<_> = result.toc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["setup", "setup-1", "deep-code"]);
    assert_eq!(result.toc[2].title, "Deep code");
    assert!(result.html.contains(r#"<h3 id="deep-code">Deep [ic]code[/ic]</h3>"#));
}
