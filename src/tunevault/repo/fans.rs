use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::model::FanRecord;
use crate::store::DocumentStore;

/// The profile page's fan list, seeded from the bundled fixture and
/// overridable on device like any other collection.
pub struct FanRepository<S: DocumentStore> {
    core: CollectionCore<FanRecord, S>,
}

impl<S: DocumentStore> FanRepository<S> {
    pub const COLLECTION: &'static str = "fan_items";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<FanRecord>> {
        Ok(self.core.records()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn fan(id: &str, vip: Option<&str>) -> FanRecord {
        FanRecord {
            id: id.to_string(),
            name: format!("Fan {}", id),
            avatar_url: String::new(),
            subtitle: None,
            vip_type: vip.map(str::to_string),
            fan_time: 1700000000000,
        }
    }

    #[test]
    fn test_reads_seeded_fans() {
        let store = InMemoryStore::new()
            .with_bundled("fan_items", &[fan("f1", Some("svip")), fan("f2", None)]);
        let mut repo = FanRepository::new(store);
        let fans = repo.get_all().unwrap();
        assert_eq!(fans.len(), 2);
        assert_eq!(fans[0].vip_type.as_deref(), Some("svip"));
    }

    #[test]
    fn test_missing_fixture_is_empty() {
        let mut repo = FanRepository::new(InMemoryStore::new());
        assert!(repo.get_all().unwrap().is_empty());
    }
}
