//! User configuration for terraconf.
//!
//! Configuration is optional and only controls output layout. It is read
//! from the first of these that applies:
//!
//! 1. the path given with `--config` (must exist)
//! 2. the path in the `TERRACONF_CONFIG` environment variable (must exist)
//! 3. `terraconf.toml` in the current directory
//! 4. `~/.terraconf/config.toml`
//!
//! When neither of the last two files exists the defaults are used.
//!
//! # File Format
//!
//! ```toml
//! [format]
//! indent = 2          # spaces per nesting level, 1 to 8
//! align_equals = true # align `=` across adjacent single-line attributes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use terraconf::config::TerraconfConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TerraconfConfig::load(None).await?;
//! println!("indent: {}", config.format.indent);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE, MAX_INDENT};
use crate::core::TerraconfError;
use crate::format::FormatOptions;

/// Contents of a terraconf configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerraconfConfig {
    /// Output layout
    pub format: FormatOptions,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named explicitly; a missing file is an error
    Explicit(PathBuf),
    /// Found by convention; a missing file means defaults
    Discovered(PathBuf),
}

impl TerraconfConfig {
    /// Load configuration, honoring an explicit `--config` path first.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, if a file
    /// cannot be read or is not valid TOML, or if a value is out of range.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let candidates = Self::candidates(explicit, env_path, &cwd, Self::default_path());

        for candidate in candidates {
            match candidate {
                ConfigSource::Explicit(path) => {
                    if !path.exists() {
                        return Err(TerraconfError::ConfigError {
                            message: format!("Config file not found: {}", path.display()),
                        }
                        .into());
                    }
                    return Self::load_from(&path).await;
                }
                ConfigSource::Discovered(path) => {
                    if path.exists() {
                        return Self::load_from(&path).await;
                    }
                }
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds an out-of-range value.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), TerraconfError> {
        let indent = self.format.indent;
        if indent == 0 || indent > MAX_INDENT {
            return Err(TerraconfError::ConfigError {
                message: format!("format.indent must be between 1 and {MAX_INDENT}, got {indent}"),
            });
        }
        Ok(())
    }

    /// `~/.terraconf/config.toml`, when a home directory is known.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".terraconf").join("config.toml"))
    }

    /// Lookup order for configuration files, highest priority first.
    ///
    /// An explicit path or environment path short-circuits the rest.
    #[must_use]
    pub fn candidates(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        cwd: &Path,
        home_path: Option<PathBuf>,
    ) -> Vec<ConfigSource> {
        if let Some(path) = explicit {
            return vec![ConfigSource::Explicit(path.to_path_buf())];
        }
        if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            return vec![ConfigSource::Explicit(path)];
        }

        let mut candidates = vec![ConfigSource::Discovered(cwd.join(LOCAL_CONFIG_FILE))];
        candidates.extend(home_path.map(ConfigSource::Discovered));
        candidates
    }
}
