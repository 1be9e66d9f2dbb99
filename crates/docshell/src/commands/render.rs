//! `docshell render` command implementation.

use std::path::PathBuf;

use clap::Args;
use docshell_shell::{PageShell, UiState};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render with the mobile menu open.
    #[arg(long)]
    menu_open: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let document = self.render()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, document)?;
                output.success(&format!(
                    "Rendered {} to {}",
                    self.file.display(),
                    path.display()
                ));
            }
            None => output.stdout(&document)?,
        }
        Ok(())
    }

    fn render(&self) -> Result<String, CliError> {
        let config = self.config.load()?;
        let shell = PageShell::from_config(&config);

        let source = std::fs::read_to_string(&self.file)?;
        let page = shell
            .page_from_markdown(&source)
            .map_err(|err| CliError::FrontMatter {
                path: self.file.display().to_string(),
                source: err,
            })?;

        if page.title.is_none() {
            Output::new().warning(&format!(
                "{} has no title; the page header is omitted",
                self.file.display()
            ));
        }

        let ui = UiState {
            menu_open: self.menu_open,
        };
        Ok(shell.render_document(&page, ui))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_project(dir: &TempDir, page: &str) -> (PathBuf, PathBuf) {
        let config = dir.path().join("docshell.toml");
        fs::write(
            &config,
            "[site]\ntitle = \"Docs\"\ndefault_title = \"Docs Home\"\nurl = \"https://x.io\"\n",
        )
        .unwrap();
        let file = dir.path().join("page.md");
        fs::write(&file, page).unwrap();
        (config, file)
    }

    fn args(config: PathBuf, file: PathBuf, output: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            file,
            output,
            menu_open: false,
            config: ConfigArgs {
                config: Some(config),
                site_url: None,
            },
        }
    }

    #[test]
    fn test_render_to_file() {
        let dir = TempDir::new().unwrap();
        let (config, file) = write_project(&dir, "---\ntitle: Guide\nslug: guide\n---\n## Intro\n");
        let out = dir.path().join("page.html");

        args(config, file, Some(out.clone())).execute().unwrap();

        let html = fs::read_to_string(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Guide | Docs</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://x.io/guide\">"));
        assert!(html.contains("data-toc"));
    }

    #[test]
    fn test_menu_open_flag() {
        let dir = TempDir::new().unwrap();
        let (config, file) = write_project(&dir, "# Guide\n");
        let mut args = args(config, file, None);
        args.menu_open = true;

        let html = args.render().unwrap();
        assert!(html.contains("<aside class=\"sidebar open\">"));
    }

    #[test]
    fn test_site_url_override() {
        let dir = TempDir::new().unwrap();
        let (config, file) = write_project(&dir, "# Guide\n");
        let mut args = args(config, file, None);
        args.config.site_url = Some("https://docs.example.com".to_owned());

        let html = args.render().unwrap();
        assert!(html.contains("href=\"https://docs.example.com\">"));
    }

    #[test]
    fn test_bad_front_matter_names_file() {
        let dir = TempDir::new().unwrap();
        let (config, file) = write_project(&dir, "---\ntitle: A\n");

        let err = args(config, file, None).render().unwrap_err();
        assert!(matches!(err, CliError::FrontMatter { .. }));
        assert!(err.to_string().contains("page.md"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let (config, _) = write_project(&dir, "");
        let missing = dir.path().join("missing.md");

        let err = args(config, missing, None).render().unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
