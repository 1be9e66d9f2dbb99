//! Page shell for docshell.
//!
//! [`PageShell`] wraps rendered page content in the site chrome: global
//! style reset, mobile overlay, sidebar navigation, header with the menu
//! toggle, responsive page title and, when the page has headings, a table
//! of contents panel.
//!
//! The shell also owns the theme's content rules ([`ThemeRules`] and
//! [`ThemeCodeBlocks`]) and hands a configured renderer to callers through
//! [`PageShell::content_renderer`].
//!
//! Menu state is not stored by the shell. Callers keep a [`UiState`], apply
//! [`MenuEvent`]s to it and pass it into each render.
//!
//! # Example
//!
//! ```
//! use docshell_config::SiteConfig;
//! use docshell_shell::{MenuEvent, PageShell, UiState};
//!
//! let site = SiteConfig {
//!     title: "Docs".to_owned(),
//!     ..SiteConfig::default()
//! };
//! let shell = PageShell::new(site);
//! let page = shell
//!     .page_from_markdown("# Guide\n\n## Install\n\nRun `make`.")
//!     .unwrap();
//!
//! let ui = UiState::default().apply(MenuEvent::Toggle);
//! let rendered = shell.render(&page, ui);
//! assert!(rendered.show_toc);
//! assert!(rendered.html.contains(r#"<aside class="sidebar open">"#));
//! ```

mod code;
mod front_matter;
mod layout;
mod nav;
mod page;
mod rules;
mod shell;
mod state;

pub use code::ThemeCodeBlocks;
pub use front_matter::{FrontMatter, FrontMatterError, extract_front_matter};
pub use layout::{TITLE_BREAKPOINT_PX, TOGGLE_ACTION};
pub use nav::NavItem;
pub use page::{Heading, PageRequest};
pub use rules::ThemeRules;
pub use shell::{PageShell, RenderedPage};
pub use state::{MenuEvent, UiState};
