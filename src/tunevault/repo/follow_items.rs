use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::FollowItem;
use crate::store::DocumentStore;

/// The subscribe tab's follow list, read from the bundled fixture.
pub struct FollowItemRepository<S: DocumentStore> {
    core: CollectionCore<FollowItem, S>,
}

impl<S: DocumentStore> FollowItemRepository<S> {
    pub const COLLECTION: &'static str = "follow_items";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<FollowItem>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn get_by_kind(&mut self, kind: &str) -> Result<Vec<FollowItem>> {
        Ok(self
            .core
            .records()?
            .iter()
            .filter(|f| f.kind == kind)
            .cloned()
            .collect())
    }
}
