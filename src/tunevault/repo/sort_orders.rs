use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident;
use crate::model::SortOrderRecord;
use crate::store::DocumentStore;
use chrono::Utc;

/// Per-playlist sort preference. At most one record per playlist: setting a
/// new order replaces the playlist's previous record.
pub struct SortOrderRepository<S: DocumentStore> {
    core: CollectionCore<SortOrderRecord, S>,
}

impl<S: DocumentStore> SortOrderRepository<S> {
    pub const COLLECTION: &'static str = "sort_order_records";
    pub const ID_PREFIX: &'static str = "sort_";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<SortOrderRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    /// The stored sort type for a playlist, if the user ever picked one.
    pub fn sort_type_for(&mut self, playlist_id: &str) -> Result<Option<String>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|r| r.playlist_id == playlist_id)
            .map(|r| r.sort_type.clone()))
    }

    /// The stored sort type, or the newest-first default.
    pub fn sort_type_or_default(&mut self, playlist_id: &str) -> Result<String> {
        Ok(self
            .sort_type_for(playlist_id)?
            .unwrap_or_else(|| SortOrderRecord::SORT_TIME_DESC.to_string()))
    }

    pub fn set_sort_order(&mut self, playlist_id: &str, sort_type: &str) -> Result<SortOrderRecord> {
        let mut records: Vec<SortOrderRecord> = self
            .core
            .records()?
            .iter()
            .filter(|r| r.playlist_id != playlist_id)
            .cloned()
            .collect();

        let record = SortOrderRecord {
            record_id: ident::timestamp_id(Self::ID_PREFIX),
            playlist_id: playlist_id.to_string(),
            sort_type: sort_type.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
        records.push(record.clone());

        self.core.replace(records)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_default_when_unset() {
        let mut repo = SortOrderRepository::new(InMemoryStore::new());
        assert_eq!(
            repo.sort_type_or_default("p1").unwrap(),
            SortOrderRecord::SORT_TIME_DESC
        );
    }

    #[test]
    fn test_set_replaces_previous_record_for_playlist() {
        let mut repo = SortOrderRepository::new(InMemoryStore::new());
        repo.set_sort_order("p1", SortOrderRecord::SORT_BY_SONG_NAME).unwrap();
        repo.set_sort_order("p2", SortOrderRecord::SORT_MANUAL).unwrap();
        repo.set_sort_order("p1", SortOrderRecord::SORT_TIME_ASC).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(
            repo.sort_type_for("p1").unwrap().unwrap(),
            SortOrderRecord::SORT_TIME_ASC
        );
        assert_eq!(
            repo.sort_type_for("p2").unwrap().unwrap(),
            SortOrderRecord::SORT_MANUAL
        );
    }
}
