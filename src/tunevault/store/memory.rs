use super::{DocumentStore, Source};
use crate::error::{Result, VaultError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// In-memory two-tier store for testing and development.
/// Does NOT persist data. Collections are held as serialized JSON so load
/// and save exercise the same (de)serialization paths as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bundled: HashMap<String, String>,
    device: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a bundled fixture, as if it shipped under `data/`.
    pub fn with_bundled<T: Serialize>(mut self, name: &str, records: &[T]) -> Self {
        let json = serde_json::to_string(records).expect("fixture serializes");
        self.bundled.insert(name.to_string(), json);
        self
    }

    /// Seed raw bundled bytes, for malformed-fixture tests.
    pub fn with_bundled_raw(mut self, name: &str, json: &str) -> Self {
        self.bundled.insert(name.to_string(), json.to_string());
        self
    }

    /// Seed raw device bytes, for malformed-override tests.
    pub fn with_device_raw(mut self, name: &str, json: &str) -> Self {
        self.device.insert(name.to_string(), json.to_string());
        self
    }

    fn resolved_json(&self, name: &str) -> Result<&str> {
        match self.resolve(name) {
            Source::Device => Ok(&self.device[name]),
            Source::Bundled => self
                .bundled
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| VaultError::MissingCollection(name.to_string())),
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn resolve(&self, name: &str) -> Source {
        if self.device.contains_key(name) {
            Source::Device
        } else {
            Source::Bundled
        }
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        serde_json::from_str(self.resolved_json(name)?).map_err(VaultError::Serialization)
    }

    fn load_document<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        serde_json::from_str(self.resolved_json(name)?).map_err(VaultError::Serialization)
    }

    fn save<T: Serialize>(&mut self, name: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records).map_err(VaultError::Serialization)?;
        self.device.insert(name.to_string(), json);
        Ok(())
    }
}
