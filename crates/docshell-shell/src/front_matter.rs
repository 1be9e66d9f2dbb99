//! YAML front matter.

use serde::Deserialize;

use docshell_meta::SeoOverrides;

/// Errors from front-matter extraction.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Opening `---` without a closing one.
    #[error("Unterminated front matter: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Invalid front matter YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Top-level YAML node was not a mapping.
    #[error("Front matter must be a YAML mapping")]
    InvalidRootType,
}

/// Page fields recognised in front matter.
///
/// Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "disableTableOfContents")]
    pub disable_table_of_contents: bool,
}

impl FrontMatter {
    /// Metadata overrides carried by this front matter.
    #[must_use]
    pub fn seo(&self) -> SeoOverrides {
        SeoOverrides {
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            image: self.image.clone(),
        }
    }
}

/// Split a document into front matter and body.
///
/// Leading blank lines and a byte-order mark before the opening `---` are
/// skipped. A document without front matter yields the default fields and
/// the whole input as body.
pub fn extract_front_matter(input: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let Some((block, body_start)) = find_yaml_block(input)? else {
        return Ok((FrontMatter::default(), input));
    };
    Ok((parse_block(block)?, &input[body_start..]))
}

fn parse_block(block: &str) -> Result<FrontMatter, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str::<serde_yaml::Value>(block)? {
        serde_yaml::Value::Null => Ok(FrontMatter::default()),
        value @ serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        _ => Err(FrontMatterError::InvalidRootType),
    }
}

/// Locate the YAML block, returning it and the byte offset of the body.
fn find_yaml_block(input: &str) -> Result<Option<(&str, usize)>, FrontMatterError> {
    let bom_len = if input.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };

    let mut lines = LineCursor::new(input, bom_len);
    let opened = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => {}
            Some(line) => break is_fence(line),
            None => break false,
        }
    };
    if !opened {
        return Ok(None);
    }

    let block_start = lines.pos;
    loop {
        let line_start = lines.pos;
        match lines.next() {
            Some(line) if is_fence(line) => {
                let block = input[block_start..line_start].trim_end_matches(['\r', '\n']);
                return Ok(Some((block, lines.pos)));
            }
            Some(_) => {}
            None => return Err(FrontMatterError::Unterminated),
        }
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

/// Iterates lines while tracking the byte offset after each one.
struct LineCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.input.get(self.pos..).filter(|r| !r.is_empty())?;
        let (line, advance) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_front_matter() {
        let (fm, body) = extract_front_matter("# Title\n\nText").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "# Title\n\nText");
    }

    #[test]
    fn test_all_fields() {
        let input = "---\n\
                     title: Guide\n\
                     description: How it works\n\
                     slug: guide/intro\n\
                     image: /guide.png\n\
                     disable_table_of_contents: true\n\
                     ---\n\
                     Body";
        let (fm, body) = extract_front_matter(input).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Guide"));
        assert_eq!(fm.description.as_deref(), Some("How it works"));
        assert_eq!(fm.slug.as_deref(), Some("guide/intro"));
        assert_eq!(fm.image.as_deref(), Some("/guide.png"));
        assert!(fm.disable_table_of_contents);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_camel_case_alias() {
        let (fm, _) = extract_front_matter("---\ndisableTableOfContents: true\n---\n").unwrap();
        assert!(fm.disable_table_of_contents);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (fm, _) = extract_front_matter("---\ntitle: A\ntags: [x, y]\n---\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_leading_blank_lines_and_bom() {
        let input = "\u{feff}\n\n---\ntitle: A\n---\nBody";
        let (fm, body) = extract_front_matter(input).unwrap();
        assert_eq!(fm.title.as_deref(), Some("A"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (fm, body) = extract_front_matter("---\r\ntitle: A\r\n---\r\nBody").unwrap();
        assert_eq!(fm.title.as_deref(), Some("A"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = extract_front_matter("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unterminated() {
        let err = extract_front_matter("---\ntitle: A\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = extract_front_matter("---\ntitle: [oops\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Parse(_)));
    }

    #[test]
    fn test_non_mapping_root() {
        let err = extract_front_matter("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidRootType));
    }

    #[test]
    fn test_horizontal_rule_later_is_not_front_matter() {
        let input = "Intro\n\n---\n\nMore";
        let (fm, body) = extract_front_matter(input).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, input);
    }

    #[test]
    fn test_seo_overrides() {
        let (fm, _) = extract_front_matter("---\ntitle: A\nslug: a\n---\n").unwrap();
        let seo = fm.seo();
        assert_eq!(seo.title.as_deref(), Some("A"));
        assert_eq!(seo.slug.as_deref(), Some("a"));
        assert_eq!(seo.image, None);
    }
}
