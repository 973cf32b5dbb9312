use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident;
use crate::model::ShareRecord;
use crate::store::DocumentStore;

/// Share action records. A bundled `share_records` fixture may seed the
/// history, and its hand-authored ids are not guaranteed to parse, so the
/// next id comes from a max-scan over every well-formed suffix instead of
/// trusting the last record.
pub struct ShareRecordRepository<S: DocumentStore> {
    core: CollectionCore<ShareRecord, S>,
}

impl<S: DocumentStore> ShareRecordRepository<S> {
    pub const COLLECTION: &'static str = "share_records";
    pub const ID_PREFIX: &'static str = "share_";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<ShareRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn records_for_song(&mut self, song_id: &str) -> Result<Vec<ShareRecord>> {
        Ok(self
            .core
            .records()?
            .iter()
            .filter(|r| r.song_id == song_id)
            .cloned()
            .collect())
    }

    pub fn add(&mut self, record: ShareRecord) -> Result<()> {
        self.core.push(record)
    }

    pub fn next_id(&mut self) -> Result<String> {
        let ids = self
            .core
            .records()?
            .iter()
            .map(|r| r.share_id.as_str());
        Ok(ident::max_scan_next(Self::ID_PREFIX, 3, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn record(id: &str) -> ShareRecord {
        ShareRecord {
            share_id: id.to_string(),
            song_id: "song_001".to_string(),
            song_name: "One".to_string(),
            share_time: 1700000000000,
            platform: "微信".to_string(),
            is_success: true,
        }
    }

    #[test]
    fn test_next_id_scans_max_and_skips_malformed() {
        let store = InMemoryStore::new().with_bundled(
            "share_records",
            &[record("share_002"), record("legacy"), record("share_004")],
        );
        let mut repo = ShareRecordRepository::new(store);
        assert_eq!(repo.next_id().unwrap(), "share_005");
    }

    #[test]
    fn test_empty_history_starts_at_001() {
        let mut repo = ShareRecordRepository::new(InMemoryStore::new());
        assert_eq!(repo.next_id().unwrap(), "share_001");
    }

    #[test]
    fn test_add_is_visible_same_instance() {
        let mut repo = ShareRecordRepository::new(InMemoryStore::new());
        repo.add(record("share_001")).unwrap();
        assert_eq!(repo.records_for_song("song_001").unwrap().len(), 1);
    }
}
