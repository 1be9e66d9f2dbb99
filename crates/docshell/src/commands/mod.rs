//! CLI command implementations.

mod meta;
mod render;

use std::path::PathBuf;

use clap::Args;
use docshell_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use meta::MetaArgs;
pub(crate) use render::RenderArgs;

/// Configuration options shared by all commands.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docshell.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canonical site URL (overrides config).
    #[arg(long, env = "DOCSHELL_SITE_URL")]
    site_url: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            site_url: self.site_url.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}
