use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident::{IdPolicy, IdScheme};
use crate::model::CollectionRecord;
use crate::store::DocumentStore;

const ID_SCHEME: IdScheme = IdScheme::new("CR", 3, IdPolicy::LastIdIncrement);

/// Collect ("favorite") action records, device-only.
pub struct CollectRecordRepository<S: DocumentStore> {
    core: CollectionCore<CollectionRecord, S>,
}

impl<S: DocumentStore> CollectRecordRepository<S> {
    pub const COLLECTION: &'static str = "collection_records";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<CollectionRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn add(&mut self, record: CollectionRecord) -> Result<()> {
        self.core.push(record)
    }

    /// Next `CR`-prefixed id, derived from the last stored record.
    pub fn next_id(&mut self) -> Result<String> {
        let records = self.core.records()?;
        let last = records.last().map(|r| r.collection_id.as_str());
        ID_SCHEME.next(last, records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn record(id: &str) -> CollectionRecord {
        CollectionRecord {
            collection_id: id.to_string(),
            content_type: "song".to_string(),
            content_id: "song_001".to_string(),
            content_name: "One".to_string(),
            collection_time: 1700000000000,
            is_success: true,
        }
    }

    #[test]
    fn test_ids_are_monotonic_across_adds() {
        let mut repo = CollectRecordRepository::new(InMemoryStore::new());
        for expected in ["CR001", "CR002", "CR003"] {
            let id = repo.next_id().unwrap();
            assert_eq!(id, expected);
            repo.add(record(&id)).unwrap();
        }
    }

    #[test]
    fn test_malformed_stored_id_is_reported() {
        let mut repo = CollectRecordRepository::new(InMemoryStore::new());
        repo.add(record("not-a-cr-id")).unwrap();
        assert!(repo.next_id().is_err());
    }
}
