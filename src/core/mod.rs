//! Core types shared across terraconf.
//!
//! This module hosts the error system: the [`TerraconfError`] enum that
//! every layer reports failures with, and the [`ErrorContext`] wrapper the
//! CLI uses to present those failures with details and suggestions.

pub mod error;

pub use error::{ErrorContext, TerraconfError, user_friendly_error};
