//! Shared helpers for terraconf integration tests

#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use terraconf::test_utils::StateFixture;

/// Isolated working directory and home directory for running the binary
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&home_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            home_dir,
        })
    }

    /// Get the project directory path
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Get the fake home directory path
    pub fn home_path(&self) -> &Path {
        &self.home_dir
    }

    /// Write a state fixture as `terraform.tfstate` in the project
    pub fn write_state(&self, state: &StateFixture) -> Result<PathBuf> {
        state.write_to(&self.project_dir)
    }

    /// Write an arbitrary file relative to the project directory
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file relative to the project directory
    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.project_dir.join(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// A terraconf command running in the project directory
    ///
    /// The home directory is redirected and config or log variables from
    /// the calling environment are cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("terraconf").expect("terraconf binary should be built");
        cmd.current_dir(&self.project_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir)
            .env("NO_COLOR", "1")
            .env_remove("TERRACONF_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
