//! Test utilities for terraconf
//!
//! Builders for state documents and a once-only logging setup for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use terraconf::test_utils::{ResourceFixture, StateFixture};
//!
//! let state = StateFixture::new()
//!     .resource("aws_instance.web", ResourceFixture::new("aws_instance").attribute("ami", "ami-1234"))
//!     .build();
//! assert_eq!(state.modules[0].resources.len(), 1);
//! ```

pub mod fixtures;

pub use fixtures::{ResourceFixture, StateFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
