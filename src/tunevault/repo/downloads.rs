use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident::{IdPolicy, IdScheme};
use crate::model::DownloadRecord;
use crate::store::DocumentStore;

const ID_SCHEME: IdScheme = IdScheme::new("DR", 3, IdPolicy::LastIdIncrement);

/// Download action records, device-only.
pub struct DownloadRecordRepository<S: DocumentStore> {
    core: CollectionCore<DownloadRecord, S>,
}

impl<S: DocumentStore> DownloadRecordRepository<S> {
    pub const COLLECTION: &'static str = "download_records";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<DownloadRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn add(&mut self, record: DownloadRecord) -> Result<()> {
        self.core.push(record)
    }

    pub fn next_id(&mut self) -> Result<String> {
        let records = self.core.records()?;
        let last = records.last().map(|r| r.download_id.as_str());
        ID_SCHEME.next(last, records.len())
    }
}
