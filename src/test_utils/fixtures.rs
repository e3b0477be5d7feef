//! Test fixtures for creating sample state documents
//!
//! [`StateFixture`] builds a [`State`] module by module; [`ResourceFixture`]
//! builds the resource entries that go into it. Both can also be written
//! to disk as state JSON for CLI tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{InstanceState, ModuleState, ResourceState, State};

/// Builder for a resource entry
#[derive(Clone, Debug)]
pub struct ResourceFixture {
    resource: ResourceState,
}

impl ResourceFixture {
    /// Resource of the given type with an empty primary instance
    pub fn new(resource_type: &str) -> Self {
        Self {
            resource: ResourceState {
                resource_type: resource_type.to_string(),
                primary: Some(InstanceState::default()),
                ..ResourceState::default()
            },
        }
    }

    /// Resource with no type and no primary instance
    pub fn empty() -> Self {
        Self {
            resource: ResourceState::default(),
        }
    }

    /// Set the primary instance ID
    pub fn id(mut self, id: &str) -> Self {
        self.resource.primary.get_or_insert_with(InstanceState::default).id = id.to_string();
        self
    }

    /// Add a flattened attribute to the primary instance
    pub fn attribute(mut self, key: &str, value: &str) -> Self {
        self.resource
            .primary
            .get_or_insert_with(InstanceState::default)
            .attributes
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Set the dependency list
    pub fn depends_on<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resource.depends_on = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Remove the primary instance
    pub fn without_primary(mut self) -> Self {
        self.resource.primary = None;
        self
    }

    /// The built resource
    pub fn build(self) -> ResourceState {
        self.resource
    }
}

/// Builder for a state document
#[derive(Clone, Debug)]
pub struct StateFixture {
    state: State,
}

impl Default for StateFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StateFixture {
    /// Version 3 state with an empty root module
    pub fn new() -> Self {
        Self {
            state: State {
                version: 3,
                terraform_version: Some("0.11.14".to_string()),
                serial: 1,
                lineage: "00000000-0000-0000-0000-000000000000".to_string(),
                modules: vec![ModuleState {
                    path: vec!["root".to_string()],
                    ..ModuleState::default()
                }],
            },
        }
    }

    /// Start a new module; later resources are added to it
    pub fn module<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.modules.push(ModuleState {
            path: path.into_iter().map(Into::into).collect(),
            ..ModuleState::default()
        });
        self
    }

    /// Add a resource to the current module
    pub fn resource(mut self, id: &str, resource: ResourceFixture) -> Self {
        if let Some(module) = self.state.modules.last_mut() {
            module.resources.insert(id.to_string(), resource.build());
        }
        self
    }

    /// Override the state format version
    pub fn version(mut self, version: u64) -> Self {
        self.state.version = version;
        self
    }

    /// The built state
    pub fn build(self) -> State {
        self.state
    }

    /// State serialized as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.state).context("Failed to serialize state fixture")
    }

    /// Write the state as `terraform.tfstate` into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let state_path = dir.join("terraform.tfstate");
        fs::write(&state_path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", state_path.display()))?;
        Ok(state_path)
    }
}
