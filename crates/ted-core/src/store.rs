//! File-store collaborator.
//!
//! The session reads and writes whole files through this trait; the CLI backs
//! it with a directory on disk, tests with an in-memory map.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Whole-file persistence for the session.
pub trait FileStore {
    fn exists(&self, name: &str) -> bool;

    /// Reads the full content of `name`.
    fn read_all(&self, name: &str) -> Result<String>;

    /// Replaces the full content of `name`.
    fn write_all(&mut self, name: &str, content: &str) -> Result<()>;
}

/// File store rooted at a directory; names resolve relative to the root.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FileStore for DirStore {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_file()
    }

    fn read_all(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write_all(&mut self, name: &str, content: &str) -> Result<()> {
        let path = self.resolve(name);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// In-memory store for tests; records every write for skip-clean assertions.
#[cfg(test)]
pub(crate) struct MemStore {
    files: std::collections::HashMap<String, String>,
    pub writes: Vec<String>,
}

#[cfg(test)]
impl MemStore {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(n, c)| ((*n).to_string(), (*c).to_string()))
                .collect(),
            writes: Vec::new(),
        }
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

#[cfg(test)]
impl FileStore for MemStore {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read_all(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .with_context(|| format!("Failed to read {name}"))
    }

    fn write_all(&mut self, name: &str, content: &str) -> Result<()> {
        self.files.insert(name.to_string(), content.to_string());
        self.writes.push(name.to_string());
        Ok(())
    }
}
