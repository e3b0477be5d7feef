//! Parsing of state documents from JSON text.

use super::State;
use crate::constants::{MAX_STATE_VERSION, MIN_STATE_VERSION};
use crate::core::TerraconfError;

/// Parse a legacy state document.
///
/// `source` names the input (a path or `<stdin>`) in error messages. The
/// format version is checked before the body is decoded, so a version 4
/// document is reported as unsupported rather than as a shape mismatch.
pub fn parse_state(content: &str, source: &str) -> Result<State, TerraconfError> {
    let parse_error = |reason: String| TerraconfError::StateParseError {
        file: source.to_string(),
        reason,
    };

    let raw: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let version = raw
        .get("version")
        .ok_or_else(|| parse_error("missing \"version\" field".to_string()))?
        .as_u64()
        .ok_or_else(|| parse_error("\"version\" is not a non-negative integer".to_string()))?;

    if !(MIN_STATE_VERSION..=MAX_STATE_VERSION).contains(&version) {
        return Err(TerraconfError::UnsupportedStateVersion {
            version,
        });
    }

    let state: State = serde_json::from_value(raw).map_err(|e| parse_error(e.to_string()))?;
    tracing::debug!(
        "Read state {} (version {}, serial {}, {} module(s))",
        source,
        state.version,
        state.serial,
        state.modules.len()
    );
    Ok(state)
}
