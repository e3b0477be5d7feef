//! Legacy Terraform state documents.
//!
//! Terraform 0.11 and earlier persisted state as JSON with format versions
//! 1 to 3. Each module lists its resources keyed by resource ID, and each
//! resource's primary instance stores its attributes as a flattened,
//! single-level string map (see [`crate::flatmap`]):
//!
//! ```json
//! {
//!   "version": 3,
//!   "serial": 4,
//!   "lineage": "8a0e5c0e-3c5a-4bdc-9b5c-d27a0b0a0f55",
//!   "modules": [
//!     {
//!       "path": ["root"],
//!       "outputs": {},
//!       "resources": {
//!         "aws_instance.web": {
//!           "type": "aws_instance",
//!           "depends_on": ["aws_security_group.web"],
//!           "primary": {
//!             "id": "i-0abc",
//!             "attributes": { "ami": "ami-1234", "tags.%": "1", "tags.Name": "web" }
//!           },
//!           "provider": "provider.aws"
//!         }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! These types are read-only inputs to generation. Resources are held in a
//! [`BTreeMap`], so they are always visited in ascending resource ID order.

mod reader;

pub use reader::parse_state;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A whole state document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// State format version
    pub version: u64,

    /// Terraform version that wrote the state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,

    /// Incremented on every state write
    #[serde(default)]
    pub serial: u64,

    /// Unique ID of this state's history
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lineage: String,

    /// Modules in the order they were persisted
    #[serde(default)]
    pub modules: Vec<ModuleState>,
}

impl State {
    /// Every resource of every module, in module order then ID order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &ResourceState)> {
        self.modules
            .iter()
            .flat_map(|module| module.resources.iter().map(|(id, r)| (id.as_str(), r)))
    }
}

/// One module of a state document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    /// Module path from the root, e.g. `["root", "network"]`
    #[serde(default)]
    pub path: Vec<String>,

    /// Module outputs, kept as raw JSON
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, serde_json::Value>,

    /// Resources keyed by resource ID (`<type>.<name>`, `data.<type>.<name>`)
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceState>,

    /// Module-level dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// A resource entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource type, e.g. `aws_instance`
    #[serde(rename = "type", default)]
    pub resource_type: String,

    /// IDs of resources this one depends on, in declaration order
    #[serde(default, alias = "dependencies", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// The live instance; absent while a resource is being replaced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<InstanceState>,

    /// Instances awaiting destruction after create-before-destroy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deposed: Vec<InstanceState>,

    /// Provider that manages the resource
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
}

impl ResourceState {
    /// Flattened attributes of the primary instance.
    #[must_use]
    pub fn attributes(&self) -> Option<&HashMap<String, String>> {
        self.primary.as_ref().map(|primary| &primary.attributes)
    }
}

/// A single instance of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Provider-assigned ID
    #[serde(default)]
    pub id: String,

    /// Flattened attributes
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Provider metadata (schema version, timeouts), kept as raw JSON
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, serde_json::Value>,

    /// Marked for recreation on next apply
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub tainted: bool,
}
