//! `polydoc check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, theme, or link error found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config()?;
        if let Some(path) = &config.config_path {
            output.config_file(path);
        }
        let site = pipeline::compose(&config)?;

        output.site_summary(&site);
        output.checked(&site);

        Ok(())
    }
}
