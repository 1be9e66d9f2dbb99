//! Page chrome markup.
//!
//! Element order is fixed: global style, overlay, then a container holding
//! the sidebar and the main column (header, mobile title, content with the
//! desktop title, table of contents).

use std::fmt::Write;

use docshell_renderer::escape_html;

use crate::nav::NavItem;
use crate::page::Heading;
use crate::state::UiState;

/// Viewport width at which the two title variants swap.
pub const TITLE_BREAKPOINT_PX: u32 = 1200;

/// Value of `data-action` on elements that toggle the menu.
pub const TOGGLE_ACTION: &str = "toggle-menu";

const GLOBAL_STYLE: &str = "<style>\n\
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}\n\
html,body{min-height:100%}\n\
body{-webkit-font-smoothing:antialiased;text-rendering:optimizeLegibility}\n\
.overlay{position:fixed;inset:0;background:rgba(0,0,0,.4);z-index:10}\n\
.overlay[hidden]{display:none}\n\
.container{display:flex;min-height:100vh}\n\
.sidebar{width:280px;flex-shrink:0}\n\
.main{flex:1;min-width:0}\n\
.title-mobile{display:none}\n\
@media (max-width:1200px){\n\
.title-mobile{display:block}\n\
.title-desktop{display:none}\n\
.sidebar{position:fixed;top:0;bottom:0;transform:translateX(-100%);transition:transform .2s;z-index:20}\n\
.sidebar.open{transform:translateX(0)}\n\
.toc{display:none}\n\
}\n\
</style>\n";

/// Inputs for one chrome render.
pub(crate) struct Chrome<'a> {
    pub site_title: &'a str,
    pub navigation: &'a [NavItem],
    pub slug: Option<&'a str>,
    pub title: Option<&'a str>,
    pub body: &'a str,
    /// Present only when the TOC panel is shown.
    pub toc: Option<&'a [Heading]>,
    pub toc_max_depth: u8,
    pub ui: UiState,
}

impl Chrome<'_> {
    pub(crate) fn render(&self) -> String {
        let mut html = String::with_capacity(self.body.len() + 4096);

        html.push_str(GLOBAL_STYLE);
        self.render_overlay(&mut html);

        html.push_str("<div class=\"container\">\n");
        self.render_sidebar(&mut html);

        html.push_str("<div class=\"main\">\n");
        self.render_header(&mut html);
        if let Some(title) = self.title {
            let _ = writeln!(html, "<h1 class=\"title-mobile\">{}</h1>", escape_html(title));
        }

        html.push_str("<main class=\"content\">\n");
        if let Some(title) = self.title {
            let _ = writeln!(html, "<h1 class=\"title-desktop\">{}</h1>", escape_html(title));
        }
        html.push_str(self.body);
        html.push_str("\n</main>\n");

        if let Some(headings) = self.toc {
            self.render_toc(&mut html, headings);
        }

        html.push_str("</div>\n</div>\n");
        html
    }

    fn render_overlay(&self, html: &mut String) {
        let hidden = if self.ui.menu_open { "" } else { " hidden" };
        let _ = writeln!(
            html,
            "<div class=\"overlay\" data-action=\"{TOGGLE_ACTION}\"{hidden}></div>"
        );
    }

    fn render_sidebar(&self, html: &mut String) {
        let open = if self.ui.menu_open { " open" } else { "" };
        let _ = writeln!(html, "<aside class=\"sidebar{open}\">");
        let _ = writeln!(
            html,
            "<a href=\"/\" class=\"logo\">{}</a>",
            escape_html(self.site_title)
        );
        if !self.navigation.is_empty() {
            html.push_str("<nav>\n<ul>\n");
            self.render_nav_items(html, self.navigation);
            html.push_str("</ul>\n</nav>\n");
        }
        html.push_str("</aside>\n");
    }

    fn render_nav_items(&self, html: &mut String, items: &[NavItem]) {
        for item in items {
            html.push_str("<li>");
            match item.link.as_deref() {
                Some(link) => {
                    let active = if item.is_active(self.slug) {
                        " class=\"active\" aria-current=\"page\""
                    } else {
                        ""
                    };
                    let _ = write!(
                        html,
                        "<a href=\"{}\"{active}>{}</a>",
                        escape_html(link),
                        escape_html(&item.label)
                    );
                }
                None => {
                    let _ = write!(
                        html,
                        "<span class=\"group\">{}</span>",
                        escape_html(&item.label)
                    );
                }
            }
            if !item.items.is_empty() {
                html.push_str("\n<ul>\n");
                self.render_nav_items(html, &item.items);
                html.push_str("</ul>\n");
            }
            html.push_str("</li>\n");
        }
    }

    fn render_header(&self, html: &mut String) {
        html.push_str("<header class=\"header\">\n");
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"menu-toggle\" data-action=\"{TOGGLE_ACTION}\" \
             aria-label=\"Toggle menu\" aria-expanded=\"{}\">Menu</button>",
            self.ui.menu_open
        );
        html.push_str("</header>\n");
    }

    fn render_toc(&self, html: &mut String, headings: &[Heading]) {
        html.push_str("<aside class=\"toc\" data-toc>\n");
        html.push_str("<h2>On this page</h2>\n<ul>\n");
        for heading in headings.iter().filter(|h| h.depth <= self.toc_max_depth) {
            let _ = writeln!(
                html,
                "<li class=\"depth-{}\"><a href=\"#{}\">{}</a></li>",
                heading.depth,
                escape_html(&heading.slug),
                escape_html(&heading.value)
            );
        }
        html.push_str("</ul>\n</aside>\n");
    }
}
