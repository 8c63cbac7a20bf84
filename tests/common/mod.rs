//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory holding a single `Project.toml`.
pub struct TestManifest {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestManifest {
    /// Create a manifest with the given raw content.
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("Project.toml");
        std::fs::write(&path, content).expect("Failed to write manifest");
        Self { dir, path }
    }

    /// Create a manifest from lines joined without separators.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::new(&lines.concat())
    }

    /// Mark the manifest read-only.
    pub fn set_readonly(&self) {
        let mut perms = std::fs::metadata(&self.path)
            .expect("Failed to stat manifest")
            .permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&self.path, perms).expect("Failed to set permissions");
    }

    /// Current file content.
    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read manifest {:?}: {}", self.path, e))
    }

    /// Current file content split into lines with terminators.
    pub fn lines(&self) -> Vec<String> {
        self.content()
            .split_inclusive('\n')
            .map(str::to_owned)
            .collect()
    }
}
