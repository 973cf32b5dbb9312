use super::{DocumentStore, Source};
use crate::error::{Result, VaultError};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed two-tier document store.
///
/// Bundled fixtures live under `<bundle_dir>/data/`, device overrides
/// directly in `<device_dir>`. The device directory is created lazily on
/// the first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    bundle_dir: PathBuf,
    device_dir: PathBuf,
}

impl FileStore {
    pub fn new(bundle_dir: PathBuf, device_dir: PathBuf) -> Self {
        Self {
            bundle_dir,
            device_dir,
        }
    }

    pub fn device_dir(&self) -> &Path {
        &self.device_dir
    }

    fn device_path(&self, name: &str) -> PathBuf {
        self.device_dir.join(format!("{}.json", name))
    }

    fn bundled_path(&self, name: &str) -> PathBuf {
        self.bundle_dir.join("data").join(format!("{}.json", name))
    }

    fn ensure_device_dir(&self) -> Result<()> {
        if !self.device_dir.exists() {
            fs::create_dir_all(&self.device_dir).map_err(VaultError::Io)?;
        }
        Ok(())
    }

    fn resolved_path(&self, name: &str) -> Result<PathBuf> {
        match self.resolve(name) {
            Source::Device => Ok(self.device_path(name)),
            Source::Bundled => {
                let bundled = self.bundled_path(name);
                if !bundled.exists() {
                    return Err(VaultError::MissingCollection(name.to_string()));
                }
                Ok(bundled)
            }
        }
    }
}

impl DocumentStore for FileStore {
    fn resolve(&self, name: &str) -> Source {
        if self.device_path(name).exists() {
            Source::Device
        } else {
            Source::Bundled
        }
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let content = fs::read_to_string(self.resolved_path(name)?).map_err(VaultError::Io)?;
        let records = serde_json::from_str(&content).map_err(VaultError::Serialization)?;
        Ok(records)
    }

    fn load_document<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let content = fs::read_to_string(self.resolved_path(name)?).map_err(VaultError::Io)?;
        serde_json::from_str(&content).map_err(VaultError::Serialization)
    }

    fn save<T: Serialize>(&mut self, name: &str, records: &[T]) -> Result<()> {
        self.ensure_device_dir()?;
        let content = serde_json::to_string(records).map_err(VaultError::Serialization)?;

        // Write-then-rename so a concurrent reader never observes a
        // half-written collection.
        let mut tmp = NamedTempFile::new_in(&self.device_dir).map_err(VaultError::Io)?;
        tmp.write_all(content.as_bytes()).map_err(VaultError::Io)?;
        tmp.persist(self.device_path(name))
            .map_err(|e| VaultError::Io(e.error))?;

        debug!("saved collection {} ({} bytes)", name, content.len());
        Ok(())
    }
}
