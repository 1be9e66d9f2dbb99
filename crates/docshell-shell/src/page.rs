//! Per-page input.

use docshell_meta::SeoOverrides;
use docshell_renderer::TocEntry;
use serde::{Deserialize, Serialize};

/// A document section title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Nesting depth, 1 to 6.
    pub depth: u8,
    /// Heading text.
    pub value: String,
    /// Anchor id.
    pub slug: String,
}

impl From<TocEntry> for Heading {
    fn from(entry: TocEntry) -> Self {
        Self {
            depth: entry.level,
            value: entry.title,
            slug: entry.id,
        }
    }
}

/// Everything needed to render one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    /// Rendered body HTML.
    pub body: String,
    /// Page title shown above the content.
    pub title: Option<String>,
    /// Headings for the table of contents.
    pub headings: Option<Vec<Heading>>,
    /// Suppress the table of contents.
    pub disable_table_of_contents: bool,
    /// Metadata overrides.
    pub seo: SeoOverrides,
}

impl PageRequest {
    /// Whether the table of contents panel is rendered.
    ///
    /// An explicit opt-out and a missing or empty heading list are treated
    /// the same.
    #[must_use]
    pub fn show_toc(&self) -> bool {
        !self.disable_table_of_contents && self.headings.as_ref().is_some_and(|h| !h.is_empty())
    }

    /// Title if present and non-empty.
    pub(crate) fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
