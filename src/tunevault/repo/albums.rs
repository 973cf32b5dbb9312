use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Album;
use crate::store::DocumentStore;

/// Read-only access to the album catalog.
pub struct AlbumRepository<S: DocumentStore> {
    core: CollectionCore<Album, S>,
}

impl<S: DocumentStore> AlbumRepository<S> {
    pub const COLLECTION: &'static str = "albums";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Required, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Album>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, album_id: &str) -> Result<Option<Album>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|a| a.album_id == album_id)
            .cloned())
    }

    pub fn get_by_artist(&mut self, artist_id: &str) -> Result<Vec<Album>> {
        Ok(self
            .core
            .records()?
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn album(id: &str, artist_id: &str) -> Album {
        Album {
            album_id: id.to_string(),
            album_name: format!("Album {}", id),
            artist: "Artist".to_string(),
            artist_id: artist_id.to_string(),
            cover_url: String::new(),
            release_date: "1999.3.10".to_string(),
            description: String::new(),
            song_ids: vec![],
            song_count: 0,
            collect_count: 0,
            comment_count: 0,
            share_count: 0,
        }
    }

    #[test]
    fn test_get_by_artist_filters() {
        let store = InMemoryStore::new().with_bundled(
            "albums",
            &[album("al1", "a1"), album("al2", "a2"), album("al3", "a1")],
        );
        let mut repo = AlbumRepository::new(store);
        let found = repo.get_by_artist("a1").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|a| a.artist_id == "a1"));
    }
}
