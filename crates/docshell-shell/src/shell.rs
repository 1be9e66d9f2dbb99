//! The page shell.

use std::fmt::Write;

use docshell_config::{Config, SiteConfig, ThemeConfig};
use docshell_meta::{SeoOverrides, compute_meta};
use docshell_renderer::{CodeBlockProcessor, MarkdownRenderer, escape_html};

use crate::code::ThemeCodeBlocks;
use crate::front_matter::{FrontMatterError, extract_front_matter};
use crate::layout::Chrome;
use crate::nav::NavItem;
use crate::page::{Heading, PageRequest};
use crate::rules::ThemeRules;
use crate::state::UiState;

/// Renders page chrome around content.
///
/// Holds only read-only site data, so one shell can serve any number of
/// pages, including from several threads at once.
#[derive(Clone, Debug)]
pub struct PageShell {
    site: SiteConfig,
    theme: ThemeConfig,
    navigation: Vec<NavItem>,
}

/// Output of [`PageShell::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Chrome and content markup for `<body>`.
    pub html: String,
    /// Whether the table of contents panel was rendered.
    pub show_toc: bool,
    /// State the page was rendered with.
    pub ui: UiState,
}

impl PageShell {
    /// Create a shell with default theme options and no navigation.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            theme: ThemeConfig::default(),
            navigation: Vec::new(),
        }
    }

    /// Create a shell from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            site: config.site.clone(),
            theme: config.theme.clone(),
            navigation: NavItem::from_config(&config.sidebar),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: Vec<NavItem>) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Content renderer configured with the theme's content rules.
    #[must_use]
    pub fn content_renderer(&self) -> MarkdownRenderer<ThemeRules> {
        self.content_renderer_with(Vec::new())
    }

    /// Content renderer that tries `processors` before the theme's own
    /// code-block renderer.
    #[must_use]
    pub fn content_renderer_with(
        &self,
        processors: Vec<Box<dyn CodeBlockProcessor>>,
    ) -> MarkdownRenderer<ThemeRules> {
        processors
            .into_iter()
            .fold(
                MarkdownRenderer::new().with_gfm(self.theme.gfm),
                MarkdownRenderer::with_boxed_processor,
            )
            .with_processor(ThemeCodeBlocks::new())
    }

    /// Render the chrome around a page.
    #[must_use]
    pub fn render(&self, page: &PageRequest, ui: UiState) -> RenderedPage {
        let show_toc = page.show_toc();
        let chrome = Chrome {
            site_title: self.short_title(),
            navigation: &self.navigation,
            slug: page.seo.slug.as_deref(),
            title: page.display_title(),
            body: &page.body,
            toc: page.headings.as_deref().filter(|_| show_toc),
            toc_max_depth: self.theme.toc_max_depth,
            ui,
        };

        tracing::debug!(
            title = ?chrome.title,
            show_toc,
            menu_open = ui.menu_open,
            "Rendered page shell"
        );

        RenderedPage {
            html: chrome.render(),
            show_toc,
            ui,
        }
    }

    /// Render a page and its metadata as a complete HTML document.
    #[must_use]
    pub fn render_document(&self, page: &PageRequest, ui: UiState) -> String {
        let head = compute_meta(&self.site, &page.seo).to_head_html();
        self.render(page, ui)
            .into_document(&head, &self.site.language)
    }

    /// Build a page request from a markdown document with front matter.
    pub fn page_from_markdown(&self, source: &str) -> Result<PageRequest, FrontMatterError> {
        self.page_from_markdown_with(source, Vec::new())
    }

    /// Like [`page_from_markdown`](Self::page_from_markdown), with extra
    /// code-block processors tried before the theme's.
    pub fn page_from_markdown_with(
        &self,
        source: &str,
        processors: Vec<Box<dyn CodeBlockProcessor>>,
    ) -> Result<PageRequest, FrontMatterError> {
        let (front_matter, body) = extract_front_matter(source)?;

        let mut renderer = self.content_renderer_with(processors);
        if front_matter.title.is_none() {
            renderer = renderer.with_title_extraction();
        }
        let result = renderer.render_markdown(body);

        for warning in &result.warnings {
            tracing::warn!("{warning}");
        }

        let title = front_matter.title.clone().or(result.title);
        let seo = SeoOverrides {
            title: title.clone(),
            ..front_matter.seo()
        };

        Ok(PageRequest {
            body: result.html,
            title,
            headings: Some(result.toc.into_iter().map(Heading::from).collect()),
            disable_table_of_contents: front_matter.disable_table_of_contents,
            seo,
        })
    }

    fn short_title(&self) -> &str {
        if self.site.title_short.is_empty() {
            &self.site.title
        } else {
            &self.site.title_short
        }
    }
}

impl RenderedPage {
    /// Wrap the page in a complete HTML document.
    ///
    /// `head` is inserted verbatim into `<head>`.
    #[must_use]
    pub fn into_document(self, head: &str, lang: &str) -> String {
        let mut doc = String::with_capacity(self.html.len() + head.len() + 256);
        let _ = writeln!(doc, "<!DOCTYPE html>\n<html lang=\"{}\">", escape_html(lang));
        doc.push_str("<head>\n<meta charset=\"utf-8\">\n");
        doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        doc.push_str(head);
        doc.push_str("</head>\n<body>\n");
        doc.push_str(&self.html);
        doc.push_str("</body>\n</html>\n");
        doc
    }
}
