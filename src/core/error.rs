//! Error handling for terraconf
//!
//! This module provides the error types and user-facing error reporting for
//! terraconf. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`TerraconfError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//!
//! Only one error originates in configuration generation itself:
//! [`TerraconfError::FormattingError`], raised when the assembled text is
//! rejected by the formatter. Every other variant belongs to the CLI shell
//! (reading the state file, loading configuration, writing output).
//!
//! # Examples
//!
//! ```rust,no_run
//! use terraconf::core::{TerraconfError, user_friendly_error};
//!
//! let error = TerraconfError::StateFileNotFound {
//!     path: "terraform.tfstate".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::{CONFIG_ENV_VAR, MAX_STATE_VERSION, MIN_STATE_VERSION};

/// The main error type for terraconf operations
///
/// # Error Categories
///
/// ## Generation
/// - [`FormattingError`] - Assembled configuration is not valid HCL
///
/// ## State Input
/// - [`StateFileNotFound`] - State file path does not exist
/// - [`StateParseError`] - State file is not valid state JSON
/// - [`UnsupportedStateVersion`] - State uses a format version that cannot be read
///
/// ## Configuration and I/O
/// - [`ConfigError`] - Configuration file content is invalid
/// - [`IoError`] - Standard I/O errors from [`std::io::Error`]
///
/// [`FormattingError`]: TerraconfError::FormattingError
/// [`StateFileNotFound`]: TerraconfError::StateFileNotFound
/// [`StateParseError`]: TerraconfError::StateParseError
/// [`UnsupportedStateVersion`]: TerraconfError::UnsupportedStateVersion
/// [`ConfigError`]: TerraconfError::ConfigError
/// [`IoError`]: TerraconfError::IoError
#[derive(Error, Debug)]
pub enum TerraconfError {
    /// The formatter rejected the assembled configuration text
    ///
    /// Generated text is always expected to parse, so this indicates a bug
    /// in block assembly (or a state value the renderer cannot express).
    #[error("error formatting config string for state: {reason}")]
    FormattingError {
        /// The formatter's error, including the offending position
        reason: String,
    },

    /// State file does not exist
    #[error("State file not found: {path}")]
    StateFileNotFound {
        /// Path that was given on the command line
        path: String,
    },

    /// State file content could not be parsed
    #[error("Failed to read state file {file}: {reason}")]
    StateParseError {
        /// Path (or `<stdin>`) of the state input
        file: String,
        /// Parser error message
        reason: String,
    },

    /// State format version outside the supported range
    #[error("Unsupported state format version {version}")]
    UnsupportedStateVersion {
        /// Version found in the state document
        version: u64,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[source] std::io::Error),

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for TerraconfError {
    fn clone(&self) -> Self {
        match self {
            Self::FormattingError {
                reason,
            } => Self::FormattingError {
                reason: reason.clone(),
            },
            Self::StateFileNotFound {
                path,
            } => Self::StateFileNotFound {
                path: path.clone(),
            },
            Self::StateParseError {
                file,
                reason,
            } => Self::StateParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::UnsupportedStateVersion {
                version,
            } => Self::UnsupportedStateVersion {
                version: *version,
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error isn't Clone; keep its kind and message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error with user-facing details and a suggestion
///
/// Displayed on stderr by [`ErrorContext::display`]: the error in red, the
/// details in yellow, the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: TerraconfError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no details or suggestion.
    #[must_use]
    pub const fn new(error: TerraconfError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`TerraconfError`] anywhere in the error chain (so errors
/// wrapped with `anyhow::Context` keep their suggestions), then
/// [`std::io::Error`] and [`toml::de::Error`]. Anything else is reported
/// with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(terraconf_error) =
        error.chain().find_map(|cause| cause.downcast_ref::<TerraconfError>())
    {
        let context = create_error_context(terraconf_error.clone());
        // Keep the outer context messages as details when there are any.
        if context.details.is_none() && error.chain().count() > 1 {
            return context.with_details(error.to_string());
        }
        return context;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(TerraconfError::IoError(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion("Check the file permissions or run as a user that can read the file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(TerraconfError::IoError(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(TerraconfError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your terraconf configuration file");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(TerraconfError::Other {
        message,
    })
}

fn create_error_context(error: TerraconfError) -> ErrorContext {
    match &error {
        TerraconfError::FormattingError {
            ..
        } => ErrorContext::new(error)
            .with_details("The generated configuration could not be parsed back as HCL")
            .with_suggestion(
                "Re-run with --raw to inspect the unformatted output, and report the state \
                 attribute that produced it",
            ),
        TerraconfError::StateFileNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path, or pass '-' to read the state from stdin"),
        TerraconfError::StateParseError {
            ..
        } => ErrorContext::new(error)
            .with_details("The state file must be a JSON Terraform state document")
            .with_suggestion("Export the state with 'terraform state pull > terraform.tfstate'"),
        TerraconfError::UnsupportedStateVersion {
            ..
        } => ErrorContext::new(error)
            .with_details(format!(
                "Only legacy state format versions {MIN_STATE_VERSION} to {MAX_STATE_VERSION} \
                 store flattened attributes"
            ))
            .with_suggestion("Use a state file written by Terraform 0.11 or earlier"),
        TerraconfError::ConfigError {
            ..
        } => ErrorContext::new(error).with_suggestion(format!(
            "Check your terraconf.toml, or the file named by {CONFIG_ENV_VAR}"
        )),
        TerraconfError::IoError(_) => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and that you have permission to access it"),
        TerraconfError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_formatting_error_message() {
        let error = TerraconfError::FormattingError {
            reason: "At 1:24: expected '}', found end of input".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "error formatting config string for state: At 1:24: expected '}', found end of input"
        );
    }

    #[test]
    fn test_error_context_display() {
        let context = ErrorContext::new(TerraconfError::ConfigError {
            message: "indent must be between 1 and 8".to_string(),
        })
        .with_details("details here")
        .with_suggestion("fix it");

        assert_eq!(
            context.to_string(),
            "Configuration error: indent must be between 1 and 8\nDetails: details here\nSuggestion: fix it"
        );
    }

    #[test]
    fn test_user_friendly_error_recognizes_terraconf_error() {
        let error = anyhow::Error::from(TerraconfError::StateFileNotFound {
            path: "missing.tfstate".to_string(),
        });
        let context = user_friendly_error(error);

        assert!(matches!(context.error, TerraconfError::StateFileNotFound { .. }));
        assert!(context.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_finds_wrapped_error() {
        let result: anyhow::Result<()> =
            Err(TerraconfError::UnsupportedStateVersion { version: 4 }.into());
        let error = result.context("Failed to load state").unwrap_err();
        let context = user_friendly_error(error);

        assert!(matches!(context.error, TerraconfError::UnsupportedStateVersion { version: 4 }));
        assert!(context.details.is_some());
    }

    #[test]
    fn test_user_friendly_error_io_not_found() {
        let error = anyhow::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let context = user_friendly_error(error);

        assert!(matches!(context.error, TerraconfError::IoError(_)));
        assert!(context.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_toml_becomes_config_error() {
        let toml_error = toml::from_str::<toml::Table>("[format\nindent = 2").unwrap_err();
        let error = anyhow::Error::from(toml_error).context("Failed to parse terraconf.toml");
        let context = user_friendly_error(error);

        assert!(matches!(context.error, TerraconfError::ConfigError { .. }));
        assert!(context.suggestion.unwrap().contains("TOML syntax"));
    }

    #[test]
    fn test_user_friendly_error_generic_includes_chain() {
        let error = anyhow::anyhow!("root cause").context("outer");
        let context = user_friendly_error(error);

        let TerraconfError::Other { message } = &context.error else {
            panic!("expected a generic error");
        };
        assert!(message.contains("outer"));
        assert!(message.contains("Caused by:"));
        assert!(message.contains("root cause"));
    }

    #[test]
    fn test_clone_preserves_variant() {
        let error = TerraconfError::StateParseError {
            file: "a".to_string(),
            reason: "b".to_string(),
        };
        assert_eq!(error.clone().to_string(), error.to_string());
    }
}
