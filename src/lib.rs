//! terraconf - Terraform configuration from legacy state
//!
//! Terraform 0.11 and earlier stored every resource attribute in state as a
//! flattened string map (`tags.%`, `tags.Name`, `ingress.0.from_port`, ...).
//! terraconf rebuilds the nested structure of those attributes and prints
//! one HCL `resource` block per managed resource, so existing infrastructure
//! can be brought under configuration without writing it by hand.
//!
//! # Pipeline
//!
//! 1. [`state`] reads the state JSON (format versions 1 to 3)
//! 2. [`flatmap`] expands each top-level attribute into a [`flatmap::Value`]
//! 3. [`render`] writes values as unindented HCL fragments
//! 4. [`generator`] assembles a `resource` block per eligible resource
//! 5. [`format`] parses the result and prints it in canonical layout
//!
//! Generation is deterministic: the same state always yields the same bytes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Optional `terraconf.toml` settings
//! - [`constants`] - Flattened-key conventions and defaults
//! - [`core`] - Error types and user-facing error display
//! - [`flatmap`] - Expansion of flattened attributes
//! - [`format`] - HCL formatter
//! - [`generator`] - Resource block assembly
//! - [`render`] - Value and name rendering
//! - [`state`] - State document model and reader
//!
//! # Example
//!
//! ```rust
//! use terraconf::generator::get_state_config_string;
//! use terraconf::state::parse_state;
//!
//! let json = r#"{
//!     "version": 3,
//!     "modules": [{
//!         "path": ["root"],
//!         "resources": {
//!             "aws_eip.lb": {
//!                 "type": "aws_eip",
//!                 "primary": {"id": "eipalloc-1", "attributes": {"vpc": "true"}}
//!             }
//!         }
//!     }]
//! }"#;
//!
//! let state = parse_state(json, "terraform.tfstate")?;
//! assert_eq!(
//!     get_state_config_string(&state)?,
//!     "resource \"aws_eip\" \"lb\" {\n  vpc = \"true\"\n}\n"
//! );
//! # Ok::<(), terraconf::core::TerraconfError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod flatmap;
pub mod format;
pub mod generator;
pub mod render;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
