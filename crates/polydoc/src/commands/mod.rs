//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;

use std::path::PathBuf;

use clap::Args;
use polydoc_config::{CliSettings, Config};
use polydoc_data::DataVersion;
use polydoc_site::DeadLinkPolicy;

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by every command that composes the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover polydoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Public base path of the site (overrides config).
    #[arg(long, env = "POLYDOC_BASE")]
    base: Option<String>,

    /// Generator output directory (overrides config).
    #[arg(long)]
    out_dir: Option<String>,

    /// Dangling link handling: strict or ignore (overrides config).
    #[arg(long)]
    dead_links: Option<DeadLinkPolicy>,

    /// Builtin data version: current or legacy (overrides config).
    #[arg(long)]
    data_version: Option<DataVersion>,

    /// Enable verbose output (composition summaries).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load the configuration with CLI overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base: self.base.clone(),
            out_dir: self.out_dir.clone(),
            dead_links: self.dead_links,
            data_version: self.data_version,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        Ok(config)
    }
}
