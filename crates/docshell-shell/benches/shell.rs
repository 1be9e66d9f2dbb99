//! Benchmarks for page shell rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docshell_config::SiteConfig;
use docshell_shell::{PageShell, UiState};

/// Generate a page with front matter, code blocks and tables per section.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::from("---\ntitle: Benchmark\nslug: bench\n---\n\n");
    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\nSome `inline` text with **bold**.\n\n"));
        md.push_str("```rust title=\"main.rs\" {1}\nfn main() {}\n```\n\n");
        md.push_str("| a | b |\n|---|---|\n| 1 | 2 |\n\n");
    }
    md
}

fn shell() -> PageShell {
    PageShell::new(SiteConfig {
        title: "Docs".to_owned(),
        default_title: "Docs Home".to_owned(),
        url: "https://x.io".to_owned(),
        ..SiteConfig::default()
    })
}

fn bench_page_from_markdown(c: &mut Criterion) {
    let shell = shell();
    let mut group = c.benchmark_group("page_from_markdown");

    for sections in [10, 100] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &markdown, |b, md| {
            b.iter(|| shell.page_from_markdown(black_box(md)));
        });
    }
    group.finish();
}

fn bench_render_document(c: &mut Criterion) {
    let shell = shell();
    let page = shell
        .page_from_markdown(&generate_markdown(50))
        .unwrap();

    c.bench_function("render_document", |b| {
        b.iter(|| shell.render_document(black_box(&page), UiState::default()));
    });
}

criterion_group!(benches, bench_page_from_markdown, bench_render_document);
criterion_main!(benches);
