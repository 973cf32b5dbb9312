use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Song;
use crate::store::DocumentStore;

/// Read-only access to the song catalog. Songs ship as a bundled fixture
/// and are never mutated by the app.
pub struct SongRepository<S: DocumentStore> {
    core: CollectionCore<Song, S>,
}

impl<S: DocumentStore> SongRepository<S> {
    pub const COLLECTION: &'static str = "songs";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Required, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Song>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, song_id: &str) -> Result<Option<Song>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|s| s.song_id == song_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    pub(crate) fn song(id: &str, name: &str) -> Song {
        Song {
            song_id: id.to_string(),
            song_name: name.to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration: 240,
            cover_url: String::new(),
            lyrics: String::new(),
            release_year: 2001,
        }
    }

    #[test]
    fn test_get_by_id_hit_and_miss() {
        let store = InMemoryStore::new()
            .with_bundled("songs", &[song("song_001", "One"), song("song_002", "Two")]);
        let mut repo = SongRepository::new(store);

        let hit = repo.get_by_id("song_002").unwrap();
        assert_eq!(hit.unwrap().song_name, "Two");
        assert!(repo.get_by_id("song_999").unwrap().is_none());
    }

    #[test]
    fn test_missing_catalog_is_a_hard_error() {
        let mut repo = SongRepository::new(InMemoryStore::new());
        assert!(repo.get_all().is_err());
    }

    #[test]
    fn test_repeated_get_all_is_stable() {
        let store = InMemoryStore::new().with_bundled("songs", &[song("song_001", "One")]);
        let mut repo = SongRepository::new(store);
        assert_eq!(repo.get_all().unwrap(), repo.get_all().unwrap());
    }
}
