//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts how a named collection resolves to
//! bytes. Every collection is one JSON array on disk, and every collection
//! has exactly one canonical location at a time:
//!
//! - **Bundled fixture** (`<bundle>/data/<name>.json`): read-only seed data
//!   shipped with the app. Source of truth until the first write.
//! - **Device file** (`<device>/<name>.json`): the per-install mutable
//!   override, created on first save. Once it exists, reads always prefer
//!   it; the bundled fixture is never written to.
//!
//! [`FileStore`] is the production implementation; [`InMemoryStore`] backs
//! tests with the same two-tier semantics and no filesystem.
//!
//! Which tier a read would hit is a pure question answered by
//! [`DocumentStore::resolve`], separate from the fallible load/save calls.
//!
//! Saves rewrite the whole collection every time. There are no partial or
//! append writes, so a load that follows a successful save returns exactly
//! the saved collection.
//!
//! [`FileStore`]: fs::FileStore
//! [`InMemoryStore`]: memory::InMemoryStore

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// Which physical tier a collection read resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The per-install mutable file exists and wins.
    Device,
    /// No device file yet; the bundled fixture is authoritative.
    Bundled,
}

/// Abstract interface for collection storage.
///
/// Implementations must honor the two-tier contract: after `save(name, ..)`
/// succeeds, `load(name)` returns the saved records until the next save,
/// never the bundled fixture.
pub trait DocumentStore {
    /// Decide which tier `load` would read from, without doing I/O on the
    /// collection body.
    fn resolve(&self, name: &str) -> Source;

    /// Load and deserialize one named collection.
    ///
    /// Fails with `MissingCollection` when neither tier has the collection,
    /// and with `Serialization` when bytes are present but malformed. Both
    /// are hard errors here; softening them to an empty collection is a
    /// per-repository policy, not a store concern.
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>>;

    /// Load a document that is a single JSON object rather than an array
    /// (e.g. the listening-duration report). Same tier resolution and the
    /// same error contract as [`load`](DocumentStore::load).
    fn load_document<T: DeserializeOwned>(&self, name: &str) -> Result<T>;

    /// Serialize and persist the full collection to the device tier,
    /// creating it on first save.
    fn save<T: Serialize>(&mut self, name: &str, records: &[T]) -> Result<()>;
}
