//! Code block processors for fenced code.
//!
//! Fences that carry a language or metadata are handed to processors before
//! the backend sees them. A processor is the hook for an external code-block
//! renderer: it receives the fence and either returns finished markup or
//! passes the fence on.
//!
//! # Example
//!
//! ```
//! use docshell_renderer::{CodeBlockProcessor, CodeFence, ProcessResult};
//!
//! struct ShellSessions;
//!
//! impl CodeBlockProcessor for ShellSessions {
//!     fn process(&mut self, fence: &CodeFence<'_>) -> ProcessResult {
//!         if fence.language == Some("console") {
//!             ProcessResult::Inline(format!("<pre class=\"console\">{}</pre>", fence.source))
//!         } else {
//!             ProcessResult::PassThrough
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with this HTML.
    Inline(String),

    /// Not handled here; try the next processor, then the backend.
    PassThrough,
}

/// A fenced code block as seen by processors.
#[derive(Clone, Copy, Debug)]
pub struct CodeFence<'a> {
    /// Zero-based index of this code block in the document.
    pub index: usize,
    /// Language identifier from the fence, if any.
    pub language: Option<&'a str>,
    /// Everything after the language in the info string, trimmed.
    pub meta: &'a str,
    /// `key=value` pairs parsed from the metadata.
    pub attrs: &'a HashMap<String, String>,
    /// Raw source content of the code block.
    pub source: &'a str,
}

/// Trait for rendering special code blocks.
pub trait CodeBlockProcessor {
    /// Process a code block and return the result.
    fn process(&mut self, fence: &CodeFence<'_>) -> ProcessResult;

    /// Get warnings generated during processing.
    ///
    /// Default implementation returns empty slice.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Parsed fence info string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FenceInfo {
    /// Language identifier (first token unless it is an attribute).
    pub language: Option<String>,
    /// Raw metadata after the language.
    pub meta: String,
    /// `key=value` attributes with surrounding quotes stripped.
    pub attrs: HashMap<String, String>,
}

impl FenceInfo {
    /// Parse a fence info string of the form `language [meta ...]`.
    ///
    /// A first token that looks like metadata (`key=value` or `{...}`) is not
    /// treated as a language.
    #[must_use]
    pub fn parse(info: &str) -> Self {
        let info = info.trim();
        let (first, rest) = info
            .split_once(char::is_whitespace)
            .unwrap_or((info, ""));

        let (language, meta) = if first.is_empty() || first.contains('=') || first.starts_with('{')
        {
            (None, info)
        } else {
            (Some(first.to_owned()), rest.trim())
        };

        let attrs = meta
            .split_whitespace()
            .filter_map(|part| part.split_once('='))
            .map(|(key, value)| {
                let value = value.trim_matches('"').trim_matches('\'');
                (key.to_owned(), value.to_owned())
            })
            .collect();

        Self {
            language,
            meta: meta.to_owned(),
            attrs,
        }
    }

    /// Whether the fence carries a language or any metadata.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.language.is_some() || !self.meta.is_empty()
    }
}
