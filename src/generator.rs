//! Configuration generation from state.
//!
//! [`ConfigGenerator`] walks every resource of a [`State`], writes one
//! `resource` block per eligible entry, and runs the assembled text through
//! the formatter. Generation is pure and deterministic: resources are
//! visited in module order then resource ID order, attributes in sorted
//! name order, and map entries in sorted key order, so the same state
//! always yields byte-identical configuration.
//!
//! Entries are skipped, without error, when
//! - their ID starts with `data.` (data sources have no reliable split
//!   between configurable inputs and computed outputs)
//! - their ID has no `.` (not a `<type>.<name>` resource ID)
//! - they have no primary instance
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use terraconf::generator::get_state_config_string;
//! use terraconf::state::{InstanceState, ModuleState, ResourceState, State};
//!
//! let resource = ResourceState {
//!     resource_type: "test_type".to_string(),
//!     primary: Some(InstanceState {
//!         id: "test_id".to_string(),
//!         attributes: HashMap::from([("one".to_string(), "1".to_string())]),
//!         ..InstanceState::default()
//!     }),
//!     ..ResourceState::default()
//! };
//! let state = State {
//!     version: 3,
//!     modules: vec![ModuleState {
//!         resources: [("test_type.test_id".to_string(), resource)].into(),
//!         ..ModuleState::default()
//!     }],
//!     ..State::default()
//! };
//!
//! assert_eq!(
//!     get_state_config_string(&state).unwrap(),
//!     "resource \"test_type\" \"test_id\" {\n  one = \"1\"\n}\n"
//! );
//! ```

use std::fmt::Write as _;

use crate::constants::{DATA_SOURCE_PREFIX, RESOURCE_NAME_DELIMITER};
use crate::core::TerraconfError;
use crate::flatmap::expand;
use crate::format::{FormatOptions, format_config};
use crate::render::value::write_value;
use crate::render::{attribute_names_sorted, string_value};
use crate::state::{ResourceState, State};

/// Generates HCL configuration from state documents.
#[derive(Debug, Clone, Default)]
pub struct ConfigGenerator {
    options: FormatOptions,
}

impl ConfigGenerator {
    /// Create a generator that formats with `options`.
    #[must_use]
    pub const fn new(options: FormatOptions) -> Self {
        Self {
            options,
        }
    }

    /// Generate formatted configuration for every eligible resource.
    ///
    /// Fails only when the formatter rejects the assembled text; nothing
    /// is returned for partially generated documents.
    pub fn generate(&self, state: &State) -> Result<String, TerraconfError> {
        let raw = self.assemble(state);
        format_config(&raw, &self.options).map_err(|e| {
            tracing::debug!("Formatter rejected assembled configuration:\n{}", raw);
            TerraconfError::FormattingError {
                reason: e.to_string(),
            }
        })
    }

    /// Assemble unformatted configuration text.
    ///
    /// The text is valid HCL with one item per line and no indentation.
    #[must_use]
    pub fn assemble(&self, state: &State) -> String {
        let mut buf = String::new();
        let mut generated = 0usize;

        for (id, resource) in state.resources() {
            if let Some(name) = eligible_resource_name(id, resource) {
                write_resource(&mut buf, name, resource);
                generated += 1;
            }
        }

        tracing::debug!("Generated {} resource block(s)", generated);
        buf
    }
}

/// Generate formatted configuration with default formatting options.
pub fn get_state_config_string(state: &State) -> Result<String, TerraconfError> {
    ConfigGenerator::default().generate(state)
}

/// Local resource name for an eligible entry, or `None` to skip it.
fn eligible_resource_name<'a>(id: &'a str, resource: &ResourceState) -> Option<&'a str> {
    if id.starts_with(DATA_SOURCE_PREFIX) {
        tracing::debug!("Skipping data source '{}'", id);
        return None;
    }

    let Some(name) = id.split(RESOURCE_NAME_DELIMITER).nth(1) else {
        tracing::debug!("Skipping invalid resource name '{}'", id);
        return None;
    };

    if resource.primary.is_none() {
        tracing::warn!("Skipping resource '{}': it has no primary instance", id);
        return None;
    }

    Some(name)
}

fn write_resource(buf: &mut String, name: &str, resource: &ResourceState) {
    let _ = writeln!(
        buf,
        "resource {} {} {{",
        string_value(&resource.resource_type),
        string_value(name)
    );

    if let Some(attributes) = resource.attributes() {
        for attribute in attribute_names_sorted(attributes) {
            if let Some(value) = expand(attributes, &attribute) {
                write_value(buf, Some(attribute.as_str()), &value);
            }
        }
    }

    if !resource.depends_on.is_empty() {
        buf.push_str("depends_on = [\n");
        for dependency in &resource.depends_on {
            let _ = writeln!(buf, "{},", string_value(dependency));
        }
        buf.push_str("]\n");
    }

    buf.push_str("}\n");
}
