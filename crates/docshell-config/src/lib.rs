//! Configuration management for docshell.
//!
//! Parses `docshell.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The `[site]` section is mandatory: every page needs site-wide metadata,
//! so a configuration without it fails to load.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.image`
//! - `site.author`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the canonical site URL (e.g. for preview deployments).
    pub site_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docshell.toml";

/// Deepest heading level the table of contents may show.
const MAX_TOC_DEPTH: u8 = 6;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site-wide metadata.
    pub site: SiteConfig,
    /// Theme rendering options.
    pub theme: ThemeConfig,
    /// Sidebar navigation entries.
    pub sidebar: Vec<SidebarEntry>,
    /// Path to the config file (set after loading from disk).
    pub config_path: Option<PathBuf>,
}

/// Configuration as parsed from TOML, before the `[site]` check.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigRaw {
    site: Option<SiteConfig>,
    theme: ThemeConfig,
    sidebar: Vec<SidebarEntry>,
}

/// Site-wide metadata shared by every page.
///
/// Read-only after load; passed explicitly to the shell and meta publisher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, appended to page titles (`"Guide | {title}"`).
    pub title: String,
    /// Short site name (header logo, schema.org alternate name).
    pub title_short: String,
    /// Title used for pages without their own title.
    ///
    /// Defaults to `title` when left empty.
    pub default_title: String,
    /// Description used for pages without their own description.
    pub description: String,
    /// Canonical base URL, e.g. `https://docs.example.com`.
    pub url: String,
    /// Author handle, used by social tags.
    pub author: String,
    /// Default share image, relative to `url` or absolute.
    pub image: String,
    /// Document language.
    pub language: String,
    /// Emit Open Graph, Twitter card and JSON-LD tags.
    pub social_tags: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_short: String::new(),
            default_title: String::new(),
            description: String::new(),
            url: String::new(),
            author: String::new(),
            image: String::new(),
            language: "en".to_owned(),
            social_tags: false,
        }
    }
}

/// Theme rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Enable GitHub Flavored Markdown (tables, task lists, strikethrough).
    pub gfm: bool,
    /// Deepest heading level listed in the table of contents.
    pub toc_max_depth: u8,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            toc_max_depth: 3,
        }
    }
}

/// A sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidebarEntry {
    /// Link text.
    pub label: String,
    /// Target path; groups without a page leave this out.
    #[serde(default)]
    pub link: Option<String>,
    /// Nested entries.
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docshell.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no file exists, or an error if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                Self::discover_config(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let mut config = Self::load_from_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse, expand and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, `[site]` is missing, an
    /// environment variable is unset, or a value is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        let site = raw
            .site
            .ok_or_else(|| ConfigError::Validation("[site] section required in config".into()))?;

        let mut config = Self {
            site,
            theme: raw.theme,
            sidebar: raw.sidebar,
            config_path: None,
        };
        config.expand_env_vars()?;
        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(url) = &settings.site_url {
            self.site.url.clone_from(url);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Fill derived defaults.
    fn apply_defaults(&mut self) {
        if self.site.default_title.is_empty() {
            self.site.default_title.clone_from(&self.site.title);
        }
        if self.site.title_short.is_empty() {
            self.site.title_short.clone_from(&self.site.title);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.sidebar.iter().try_for_each(validate_sidebar_entry)
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.url, "site.url")?;
        require_http_url(&self.site.url, "site.url")?;
        require_non_empty(&self.site.language, "site.language")?;
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        let depth = self.theme.toc_max_depth;
        if depth == 0 || depth > MAX_TOC_DEPTH {
            return Err(ConfigError::Validation(format!(
                "theme.toc_max_depth must be between 1 and {MAX_TOC_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        self.site.image = expand::expand_env(&self.site.image, "site.image")?;
        self.site.author = expand::expand_env(&self.site.author, "site.author")?;
        Ok(())
    }
}

fn validate_sidebar_entry(entry: &SidebarEntry) -> Result<(), ConfigError> {
    require_non_empty(&entry.label, "sidebar.label")?;
    if entry.link.is_none() && entry.items.is_empty() {
        return Err(ConfigError::Validation(format!(
            "sidebar entry '{}' needs a link or nested items",
            entry.label
        )));
    }
    entry.items.iter().try_for_each(validate_sidebar_entry)
}
