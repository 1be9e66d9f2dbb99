use docshell_config::Config;
use docshell_shell::{MenuEvent, PageShell, UiState};
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
[site]
title = "Rocket Docs"
title_short = "Rocket"
default_title = "Rocket Docs Home"
description = "Out of this world"
url = "https://docs.rocket.io/"
image = "/banner.png"

[theme]
toc_max_depth = 2

[[sidebar]]
label = "Getting started"
link = "/"

[[sidebar]]
label = "Guides"
items = [
    { label = "Install", link = "/guides/install" },
    { label = "Deploy", link = "/guides/deploy" },
]
"#;

const PAGE: &str = "---
title: Deploy
description: Ship it
slug: guides/deploy
---

## Build

```sh title=\"build.sh\" {2}
cargo build
cargo test
```

### Details

| Target | Time |
|--------|------|
| linux  | 2m   |

## Release
";

fn shell() -> PageShell {
    PageShell::from_config(&Config::from_toml_str(CONFIG).unwrap())
}

#[test]
fn renders_full_document() {
    let shell = shell();
    let page = shell.page_from_markdown(PAGE).unwrap();
    let doc = shell.render_document(&page, UiState::default());

    assert!(doc.contains("<title>Deploy | Rocket Docs</title>"));
    assert!(doc.contains("<link rel=\"canonical\" href=\"https://docs.rocket.io/guides/deploy\">"));
    assert!(doc.contains("<meta name=\"description\" content=\"Ship it\">"));
    assert!(doc.contains("<meta property=\"image\" content=\"https://docs.rocket.io/banner.png\">"));

    assert!(doc.contains("<a href=\"/\" class=\"logo\">Rocket</a>"));
    assert!(doc.contains(
        "<a href=\"/guides/deploy\" class=\"active\" aria-current=\"page\">Deploy</a>"
    ));
    assert!(doc.contains("<a href=\"/guides/install\">Install</a>"));

    assert!(doc.contains("<h1 class=\"title-mobile\">Deploy</h1>"));
    assert!(doc.contains("<h1 class=\"title-desktop\">Deploy</h1>"));

    assert!(doc.contains("<div class=\"code-title\">build.sh</div>"));
    assert!(doc.contains("<span class=\"code-line highlighted\">cargo test</span>"));
    assert!(doc.contains("<div style=\"overflow-x: auto\"><table>"));
}

#[test]
fn toc_respects_max_depth() {
    let shell = shell();
    let page = shell.page_from_markdown(PAGE).unwrap();
    let html = shell.render(&page, UiState::default()).html;

    let toc_start = html.find("data-toc").unwrap();
    let toc = &html[toc_start..];
    assert!(toc.contains("#build"));
    assert!(toc.contains("#release"));
    assert!(!toc.contains("#details"));
}

#[test]
fn menu_state_round_trips_through_events() {
    let shell = shell();
    let page = shell.page_from_markdown("Hello").unwrap();

    let closed = UiState::default();
    let open = closed.apply(MenuEvent::Toggle);
    assert_eq!(open.apply(MenuEvent::Toggle), closed);

    let open_html = shell.render(&page, open).html;
    let closed_html = shell.render(&page, closed).html;
    assert!(open_html.contains("<aside class=\"sidebar open\">"));
    assert!(closed_html.contains("<aside class=\"sidebar\">"));
    assert!(closed_html.contains(" hidden></div>"));
    assert!(!page.show_toc());
}

#[test]
fn shells_render_independently_across_threads() {
    let shell = &shell();
    let pages: Vec<_> = ["# One\n\n## A", "# Two\n\n## B"]
        .iter()
        .map(|src| shell.page_from_markdown(src).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = pages
            .iter()
            .map(|page| scope.spawn(move || shell.render(page, UiState::default())))
            .collect();
        for (handle, page) in handles.into_iter().zip(&pages) {
            assert_eq!(handle.join().unwrap(), shell.render(page, UiState::default()));
        }
    });
}
