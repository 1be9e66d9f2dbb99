//! Trait-based markdown renderer with pluggable content rules.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML
//! through the [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! Every markdown node kind that a theme may want to restyle (code fences,
//! inline code, tables, blockquotes, images) is a method on [`RenderBackend`].
//! A theme supplies its own backend type and the renderer dispatches to it
//! statically. [`HtmlBackend`] is the plain semantic HTML5 rule set.
//!
//! Code fences that carry a language or metadata are first offered to the
//! registered [`CodeBlockProcessor`]s; the first one returning
//! [`ProcessResult::Inline`] wins, otherwise the backend renders the fence.
//!
//! # Example
//!
//! ```
//! use docshell_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let result = MarkdownRenderer::<HtmlBackend>::new()
//!     .with_title_extraction()
//!     .render_markdown("# Hello\n\n**Bold** text");
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```

mod backend;
mod code_block;
mod html;
mod renderer;
mod state;
mod util;

pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, CodeFence, FenceInfo, ProcessResult};
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::TocEntry;
pub use util::{escape_html, slugify};
