use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Playlist;
use crate::store::DocumentStore;

/// Playlists: the one primary collection the user also mutates. Song
/// membership changes replace a single record in place, leaving every other
/// playlist untouched.
pub struct PlaylistRepository<S: DocumentStore> {
    core: CollectionCore<Playlist, S>,
}

impl<S: DocumentStore> PlaylistRepository<S> {
    pub const COLLECTION: &'static str = "playlists";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Required, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Playlist>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, playlist_id: &str) -> Result<Option<Playlist>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|p| p.playlist_id == playlist_id)
            .cloned())
    }

    /// Append a song to one playlist. Returns `false` without touching
    /// storage when the playlist is unknown or already contains the song;
    /// the UI renders that as a non-fatal message.
    pub fn add_song(&mut self, playlist_id: &str, song_id: &str) -> Result<bool> {
        self.mutate_song_ids(playlist_id, |song_ids| {
            if song_ids.iter().any(|s| s == song_id) {
                return false;
            }
            song_ids.push(song_id.to_string());
            true
        })
    }

    /// Remove a song from one playlist. Returns `false` when the playlist
    /// is unknown or does not contain the song.
    pub fn remove_song(&mut self, playlist_id: &str, song_id: &str) -> Result<bool> {
        self.mutate_song_ids(playlist_id, |song_ids| {
            let before = song_ids.len();
            song_ids.retain(|s| s != song_id);
            song_ids.len() != before
        })
    }

    /// Replace the whole collection, e.g. after a reorder.
    pub fn save_all(&mut self, playlists: Vec<Playlist>) -> Result<()> {
        self.core.replace(playlists)
    }

    fn mutate_song_ids<F>(&mut self, playlist_id: &str, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut Vec<String>) -> bool,
    {
        let records = self.core.records()?;
        let Some(pos) = records.iter().position(|p| p.playlist_id == playlist_id) else {
            return Ok(false);
        };

        let mut updated = records.to_vec();
        if !mutate(&mut updated[pos].song_ids) {
            return Ok(false);
        }
        updated[pos].song_count = updated[pos].song_ids.len();

        self.core.replace(updated)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn playlist(id: &str, song_ids: &[&str]) -> Playlist {
        Playlist {
            playlist_id: id.to_string(),
            playlist_name: format!("Playlist {}", id),
            description: String::new(),
            cover_url: String::new(),
            song_ids: song_ids.iter().map(|s| s.to_string()).collect(),
            create_time: 1700000000000,
            song_count: song_ids.len(),
        }
    }

    fn seeded() -> PlaylistRepository<InMemoryStore> {
        let store = InMemoryStore::new().with_bundled(
            "playlists",
            &[
                playlist("p1", &["song_001"]),
                playlist("p2", &["song_002", "song_003"]),
            ],
        );
        PlaylistRepository::new(store)
    }

    #[test]
    fn test_add_song_appends_and_persists() {
        let mut repo = seeded();
        assert!(repo.add_song("p1", "song_005").unwrap());
        let p1 = repo.get_by_id("p1").unwrap().unwrap();
        assert_eq!(p1.song_ids, ["song_001", "song_005"]);
        assert_eq!(p1.song_count, 2);
    }

    #[test]
    fn test_add_duplicate_song_is_noop() {
        let mut repo = seeded();
        assert!(!repo.add_song("p1", "song_001").unwrap());
        assert_eq!(repo.get_by_id("p1").unwrap().unwrap().song_ids.len(), 1);
    }

    #[test]
    fn test_add_song_to_unknown_playlist_is_noop() {
        let mut repo = seeded();
        assert!(!repo.add_song("p99", "song_001").unwrap());
    }

    #[test]
    fn test_mutation_preserves_other_playlists() {
        let mut repo = seeded();
        let before: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .filter(|p| p.playlist_id != "p1")
            .collect();

        repo.add_song("p1", "song_009").unwrap();

        let after: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .filter(|p| p.playlist_id != "p1")
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_mutation_preserves_order() {
        let mut repo = seeded();
        repo.remove_song("p2", "song_002").unwrap();
        let ids: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|p| p.playlist_id.clone())
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_remove_missing_song_is_noop() {
        let mut repo = seeded();
        assert!(!repo.remove_song("p1", "song_404").unwrap());
    }
}
