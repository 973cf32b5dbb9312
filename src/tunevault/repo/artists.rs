use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Artist;
use crate::store::DocumentStore;

/// Read-only access to the artist catalog.
pub struct ArtistRepository<S: DocumentStore> {
    core: CollectionCore<Artist, S>,
}

impl<S: DocumentStore> ArtistRepository<S> {
    pub const COLLECTION: &'static str = "artists";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Required, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Artist>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, artist_id: &str) -> Result<Option<Artist>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|a| a.artist_id == artist_id)
            .cloned())
    }
}
