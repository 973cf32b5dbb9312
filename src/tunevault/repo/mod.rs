//! # Typed Collection Repositories
//!
//! One repository per entity kind, each wrapping the document store with
//! entity-specific queries and mutations. All repositories are generic over
//! [`DocumentStore`], so the same code runs against [`FileStore`] in
//! production and [`InMemoryStore`] in tests.
//!
//! ## Cache contract
//!
//! Every repository owns an optional in-memory copy of its collection.
//! [`CollectionCore`] makes the two hazardous steps inseparable:
//!
//! - `records()` loads and caches in one operation,
//! - `replace()` persists and refreshes the cache in one operation, and the
//!   cache is only updated after the save succeeds.
//!
//! A mutation can therefore never leave the cache stale for the remainder
//! of the instance's lifetime. Reads after a successful write always see
//! the written collection (read-your-writes within one instance).
//!
//! ## Load policy
//!
//! Primary catalog collections (songs, playlists, albums, artists) cannot
//! be absent or malformed without the app being unusable, so their load
//! failures propagate. Secondary record collections (comments, download
//! history, follow records, ...) collapse to an empty collection instead,
//! which is the resilient behavior screens rely on.
//!
//! [`FileStore`]: crate::store::fs::FileStore
//! [`InMemoryStore`]: crate::store::memory::InMemoryStore

use crate::error::Result;
use crate::store::{DocumentStore, Source};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod albums;
pub mod artists;
pub mod collects;
pub mod comments;
pub mod downloads;
pub mod durations;
pub mod fans;
pub mod follow_items;
pub mod follows;
pub mod lyrics;
pub mod music_videos;
pub mod playlists;
pub mod ranks;
pub mod recognition;
pub mod shares;
pub mod songs;
pub mod sort_orders;
pub mod styles;

pub use albums::AlbumRepository;
pub use artists::ArtistRepository;
pub use collects::CollectRecordRepository;
pub use comments::CommentRepository;
pub use downloads::DownloadRecordRepository;
pub use durations::DurationRepository;
pub use fans::FanRepository;
pub use follow_items::FollowItemRepository;
pub use follows::ArtistFollowRepository;
pub use lyrics::LyricRepository;
pub use music_videos::MusicVideoRepository;
pub use playlists::PlaylistRepository;
pub use ranks::RankRepository;
pub use recognition::RecognitionRepository;
pub use shares::ShareRecordRepository;
pub use songs::SongRepository;
pub use sort_orders::SortOrderRepository;
pub use styles::{PlaybackStyleRecordRepository, PlayerStyleRepository};

/// How a repository treats a collection that fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// The app cannot function without this collection; failures propagate.
    Required,
    /// History/record data; failures collapse to an empty collection.
    Optional,
}

/// Shared load-and-cache / mutate-and-cache core under every typed
/// repository.
pub(crate) struct CollectionCore<T, S> {
    name: &'static str,
    policy: LoadPolicy,
    store: S,
    cache: Option<Vec<T>>,
}

impl<T, S> CollectionCore<T, S>
where
    T: Clone + Serialize + DeserializeOwned,
    S: DocumentStore,
{
    pub(crate) fn new(name: &'static str, policy: LoadPolicy, store: S) -> Self {
        Self {
            name,
            policy,
            store,
            cache: None,
        }
    }

    /// The current collection, loading and caching on first use.
    pub(crate) fn records(&mut self) -> Result<&[T]> {
        if self.cache.is_none() {
            let loaded = match (self.store.load(self.name), self.policy) {
                (Ok(records), _) => records,
                (Err(e), LoadPolicy::Required) => return Err(e),
                (Err(e), LoadPolicy::Optional) => {
                    warn!("collection {} unreadable, treating as empty: {}", self.name, e);
                    Vec::new()
                }
            };
            self.cache = Some(loaded);
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Persist the full collection and refresh the cache. On save failure
    /// the cache keeps its previous contents, which still match disk.
    pub(crate) fn replace(&mut self, records: Vec<T>) -> Result<()> {
        self.store.save(self.name, &records)?;
        self.cache = Some(records);
        Ok(())
    }

    /// Append one record and persist.
    pub(crate) fn push(&mut self, record: T) -> Result<()> {
        let mut records = self.records()?.to_vec();
        records.push(record);
        self.replace(records)
    }

    pub(crate) fn source(&self) -> Source {
        self.store.resolve(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_required_policy_propagates_missing() {
        let store = InMemoryStore::new();
        let mut core: CollectionCore<String, _> =
            CollectionCore::new("songs", LoadPolicy::Required, store);
        assert!(core.records().is_err());
    }

    #[test]
    fn test_optional_policy_absorbs_missing() {
        let store = InMemoryStore::new();
        let mut core: CollectionCore<String, _> =
            CollectionCore::new("download_records", LoadPolicy::Optional, store);
        assert_eq!(core.records().unwrap(), &[] as &[String]);
    }

    #[test]
    fn test_optional_policy_absorbs_malformed() {
        let store = InMemoryStore::new().with_device_raw("download_records", "{broken");
        let mut core: CollectionCore<String, _> =
            CollectionCore::new("download_records", LoadPolicy::Optional, store);
        assert_eq!(core.records().unwrap().len(), 0);
    }

    #[test]
    fn test_cache_stability_across_reads() {
        let store = InMemoryStore::new().with_bundled("songs", &["a", "b"]);
        let mut core: CollectionCore<String, _> =
            CollectionCore::new("songs", LoadPolicy::Required, store);
        let first = core.records().unwrap().to_vec();
        let second = core.records().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_push_is_read_your_writes() {
        let store = InMemoryStore::new().with_bundled("songs", &["a"]);
        let mut core: CollectionCore<String, _> =
            CollectionCore::new("songs", LoadPolicy::Required, store);
        core.push("b".to_string()).unwrap();
        assert_eq!(core.records().unwrap(), &["a", "b"]);
        assert_eq!(core.source(), Source::Device);
    }
}
