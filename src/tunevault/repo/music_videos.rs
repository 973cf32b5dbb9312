use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::MusicVideo;
use crate::store::DocumentStore;

/// Read-only access to the MV catalog. Secondary data: a missing or
/// malformed fixture just means no MVs to show.
pub struct MusicVideoRepository<S: DocumentStore> {
    core: CollectionCore<MusicVideo, S>,
}

impl<S: DocumentStore> MusicVideoRepository<S> {
    pub const COLLECTION: &'static str = "music_videos";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<MusicVideo>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, mv_id: &str) -> Result<Option<MusicVideo>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|mv| mv.mv_id == mv_id)
            .cloned())
    }

    pub fn get_for_song(&mut self, song_id: &str) -> Result<Vec<MusicVideo>> {
        Ok(self
            .core
            .records()?
            .iter()
            .filter(|mv| mv.song_id == song_id)
            .cloned()
            .collect())
    }
}
