//! Integration test suite for terraconf
//!
//! These tests run the built binary against state files in temporary
//! directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: configuration output for representative states
//! - **options**: `--raw`, `--output`, stdin, and configuration files
//! - **errors**: exit codes and messages for bad input

#[path = "../common/mod.rs"]
mod common;

mod errors;
mod generate;
mod options;
