use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::RecognitionRecord;
use crate::store::DocumentStore;

/// Listen-and-recognize history, device-only, newest record first.
pub struct RecognitionRepository<S: DocumentStore> {
    core: CollectionCore<RecognitionRecord, S>,
}

impl<S: DocumentStore> RecognitionRepository<S> {
    pub const COLLECTION: &'static str = "recognition_records";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    /// History as stored: most recent recognition first.
    pub fn history(&mut self) -> Result<Vec<RecognitionRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn add(&mut self, record: RecognitionRecord) -> Result<()> {
        let mut records = self.core.records()?.to_vec();
        records.insert(0, record);
        self.core.replace(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn record(id: &str, song: &str) -> RecognitionRecord {
        RecognitionRecord {
            record_id: id.to_string(),
            song_name: song.to_string(),
            artist: "Artist".to_string(),
            cover_url: String::new(),
            recognition_time: 1700000000000,
        }
    }

    #[test]
    fn test_newest_first() {
        let mut repo = RecognitionRepository::new(InMemoryStore::new());
        repo.add(record("r1", "First")).unwrap();
        repo.add(record("r2", "Second")).unwrap();

        let history = repo.history().unwrap();
        assert_eq!(history[0].record_id, "r2");
        assert_eq!(history[1].record_id, "r1");
    }
}
