//! `docshell meta` command implementation.

use clap::Args;
use docshell_meta::{SeoOverrides, compute_meta};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the meta command.
#[derive(Args)]
pub(crate) struct MetaArgs {
    /// Page title.
    #[arg(long)]
    title: Option<String>,

    /// Page description.
    #[arg(long)]
    description: Option<String>,

    /// Page path relative to the site URL.
    #[arg(long)]
    slug: Option<String>,

    /// Share image path or URL.
    #[arg(long)]
    image: Option<String>,

    /// Print `<head>` markup instead of JSON.
    #[arg(long)]
    html: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl MetaArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let rendered = self.render()?;
        Output::new().stdout(&rendered)?;
        Ok(())
    }

    fn render(&self) -> Result<String, CliError> {
        let config = self.config.load()?;
        let overrides = SeoOverrides {
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            image: self.image.clone(),
        };
        let meta = compute_meta(&config.site, &overrides);

        if self.html {
            Ok(meta.to_head_html())
        } else {
            Ok(serde_json::to_string_pretty(&meta)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn config_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("docshell.toml");
        fs::write(
            &path,
            "[site]\n\
             title = \"Docs\"\n\
             default_title = \"Docs Home\"\n\
             description = \"Default desc\"\n\
             url = \"https://x.io\"\n\
             image = \"/default.png\"\n",
        )
        .unwrap();
        path
    }

    fn args(config: PathBuf) -> MetaArgs {
        MetaArgs {
            title: None,
            description: None,
            slug: None,
            image: None,
            html: false,
            config: ConfigArgs {
                config: Some(config),
                site_url: None,
            },
        }
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let mut args = args(config_file(&dir));
        args.title = Some("Guide".to_owned());
        args.slug = Some("guide/intro".to_owned());

        let json: serde_json::Value = serde_json::from_str(&args.render().unwrap()).unwrap();
        assert_eq!(json["title"], "Guide | Docs");
        assert_eq!(json["url"], "https://x.io/guide/intro");
        assert_eq!(json["image"], "https://x.io/default.png");
        assert_eq!(json["description"], "Default desc");
    }

    #[test]
    fn test_html_output() {
        let dir = TempDir::new().unwrap();
        let mut args = args(config_file(&dir));
        args.html = true;

        let html = args.render().unwrap();
        assert!(html.starts_with("<title>Docs Home</title>\n"));
    }

    #[test]
    fn test_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = args(dir.path().join("absent.toml")).render().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
