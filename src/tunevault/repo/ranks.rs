use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::Rank;
use crate::store::DocumentStore;

/// Ranking charts, read from the bundled fixture. Absence just means no
/// charts to show.
pub struct RankRepository<S: DocumentStore> {
    core: CollectionCore<Rank, S>,
}

impl<S: DocumentStore> RankRepository<S> {
    pub const COLLECTION: &'static str = "ranks";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Rank>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_id(&mut self, rank_id: &str) -> Result<Option<Rank>> {
        Ok(self
            .core
            .records()?
            .iter()
            .find(|r| r.id == rank_id)
            .cloned())
    }
}
