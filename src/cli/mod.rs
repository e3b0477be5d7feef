//! Command-line interface for terraconf.
//!
//! terraconf takes one argument, a legacy state file (or `-` for stdin), and
//! prints HCL `resource` blocks reconstructed from it:
//!
//! ```bash
//! # Print configuration for every managed resource
//! terraconf terraform.tfstate
//!
//! # Write it to a file instead
//! terraconf terraform.tfstate --output imported.tf
//!
//! # Skip formatting and emit the assembled text as-is
//! terraconf --raw terraform.tfstate
//!
//! # Read the state from a pipe
//! terraform state pull | terraconf -
//! ```
//!
//! Diagnostics go to stderr through `tracing`; only generated configuration
//! goes to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use crate::config::TerraconfConfig;
use crate::constants::STDIN_ARG;
use crate::core::TerraconfError;
use crate::generator::ConfigGenerator;
use crate::state::{State, parse_state};

/// Settings derived from the global flags before anything runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging.
    ///
    /// `RUST_LOG` takes precedence whenever it is set.
    pub log_level: Option<String>,

    /// Configuration file named with `--config`
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install the stderr log subscriber.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(level) = &self.log_level {
            EnvFilter::new(level)
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate Terraform configuration from a legacy state file.
#[derive(Parser, Debug)]
#[command(
    name = "terraconf",
    about = "Generate Terraform configuration from a state file",
    version,
    long_about = "terraconf reads a Terraform state file (format versions 1 to 3) and prints \
                  HCL resource blocks that reproduce the managed resources."
)]
pub struct Cli {
    /// State file to read, or `-` for stdin
    #[arg(value_name = "STATE_FILE")]
    state_file: String,

    /// Write configuration to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the assembled configuration without formatting it
    #[arg(long)]
    raw: bool,

    /// Use this configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run terraconf with the parsed arguments.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Map the global flags to a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Run with an already built [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let settings = TerraconfConfig::load(config.config_path.as_deref()).await?;
        let state = self.read_state().await?;

        let generator = ConfigGenerator::new(settings.format);
        let output = if self.raw {
            generator.assemble(&state)
        } else {
            generator.generate(&state)?
        };

        match &self.output {
            Some(path) => write_output(path, &output).await,
            None => {
                println!("{output}");
                Ok(())
            }
        }
    }

    async fn read_state(&self) -> Result<State> {
        if self.state_file == STDIN_ARG {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read state from stdin")?;
            return Ok(parse_state(&content, "<stdin>")?);
        }

        let path = Path::new(&self.state_file);
        if !path.exists() {
            return Err(TerraconfError::StateFileNotFound {
                path: self.state_file.clone(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read state file {}", path.display()))?;
        Ok(parse_state(&content, &self.state_file)?)
    }
}

async fn write_output(path: &Path, output: &str) -> Result<()> {
    tokio::fs::write(path, output)
        .await
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
    tracing::info!("Wrote configuration to {}", path.display());
    Ok(())
}
