use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store: one JSON file per key under a base
/// directory. Writes go through a temp file and a rename so a crashed
/// write never leaves a half-written entry behind.
#[derive(Debug, Clone)]
pub struct KvConnection {
    base_directory: PathBuf,
}

impl KvConnection {
    /// Create a connection rooted at the given directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)
            .with_context(|| format!("Failed to create data directory: {:?}", base_directory))?;
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read and deserialize the value stored under `key`.
    /// A missing file reads as `None`.
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No entry for key '{}'", key);
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read entry for key '{}'", key))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse entry for key '{}'", key))?;
        Ok(Some(value))
    }

    /// Serialize and write `value` under `key`, atomically.
    pub fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = self.base_directory.join(format!("{}.json.tmp", key));
        let contents = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize entry for key '{}'", key))?;
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write entry for key '{}'", key))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to commit entry for key '{}'", key))?;
        debug!("Wrote entry for key '{}'", key);
        Ok(())
    }

    /// Remove the entry stored under `key`. Removing a missing key is not an error.
    pub fn delete_value(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete entry for key '{}'", key))?;
            debug!("Deleted entry for key '{}'", key);
        }
        Ok(())
    }
}
