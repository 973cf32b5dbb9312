use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Lyric;
use crate::store::DocumentStore;

/// Timed lyrics, read from the bundled fixture. A song without an entry
/// simply has no lyrics to scroll.
pub struct LyricRepository<S: DocumentStore> {
    core: CollectionCore<Lyric, S>,
}

impl<S: DocumentStore> LyricRepository<S> {
    pub const COLLECTION: &'static str = "lyrics";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_for_song(&mut self, song_id: &str) -> Result<Option<Lyric>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|l| l.song_id == song_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LyricLine;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_lookup_by_song() {
        let lyric = Lyric {
            song_id: "song_001".to_string(),
            lines: vec![LyricLine {
                time: "00:12".to_string(),
                text: "la la".to_string(),
            }],
        };
        let store = InMemoryStore::new().with_bundled("lyrics", &[lyric]);
        let mut repo = LyricRepository::new(store);

        assert_eq!(repo.get_for_song("song_001").unwrap().unwrap().lines.len(), 1);
        assert!(repo.get_for_song("song_002").unwrap().is_none());
    }

    #[test]
    fn test_missing_fixture_is_none_not_error() {
        let mut repo = LyricRepository::new(InMemoryStore::new());
        assert!(repo.get_for_song("song_001").unwrap().is_none());
    }
}
