use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::ArtistFollowRecord;
use crate::store::DocumentStore;
use chrono::Utc;

/// Artist follow/unfollow action records, device-only.
pub struct ArtistFollowRepository<S: DocumentStore> {
    core: CollectionCore<ArtistFollowRecord, S>,
}

impl<S: DocumentStore> ArtistFollowRepository<S> {
    pub const COLLECTION: &'static str = "artist_follow_records";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<ArtistFollowRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn is_followed(&mut self, artist_id: &str) -> Result<bool> {
        Ok(self
            .core
            .records()?
            .iter()
            .any(|r| r.artist_id == artist_id))
    }

    /// Record a follow action for an artist.
    pub fn add_follow(&mut self, artist_id: &str, artist_name: &str) -> Result<ArtistFollowRecord> {
        let record = ArtistFollowRecord {
            artist_id: artist_id.to_string(),
            artist_name: artist_name.to_string(),
            operation_type: "follow".to_string(),
            operation_time: Utc::now().timestamp_millis(),
            is_success: true,
        };
        self.core.push(record.clone())?;
        Ok(record)
    }

    /// Drop every record for the artist, i.e. unfollow.
    pub fn remove_follow(&mut self, artist_id: &str) -> Result<()> {
        let records: Vec<ArtistFollowRecord> = self
            .core
            .records()?
            .iter()
            .filter(|r| r.artist_id != artist_id)
            .cloned()
            .collect();
        self.core.replace(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_follow_then_unfollow() {
        let mut repo = ArtistFollowRepository::new(InMemoryStore::new());
        repo.add_follow("a1", "Someone").unwrap();
        assert!(repo.is_followed("a1").unwrap());

        repo.remove_follow("a1").unwrap();
        assert!(!repo.is_followed("a1").unwrap());
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_unfollow_leaves_other_artists() {
        let mut repo = ArtistFollowRepository::new(InMemoryStore::new());
        repo.add_follow("a1", "One").unwrap();
        repo.add_follow("a2", "Two").unwrap();
        repo.remove_follow("a1").unwrap();
        assert!(repo.is_followed("a2").unwrap());
    }
}
