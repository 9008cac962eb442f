//! `polydoc build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use polydoc_site::schema::{self, OutputFormat};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json or module.
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, composition, or writing fails.
    /// Nothing is written unless composition succeeds.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config()?;
        if let Some(path) = &config.config_path {
            output.config_file(path);
        }

        let site = pipeline::compose(&config)?;
        let rendered = schema::render(&site, self.format)?;

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, rendered)?;
                output.written(&site, path);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
