use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident::{IdPolicy, IdScheme};
use crate::model::{PlaybackStyleRecord, PlayerStyle};
use crate::store::DocumentStore;
use log::warn;

/// Selectable player skins. Falls back to the built-in preset table when
/// the `player_styles` fixture is missing or malformed, so the style picker
/// always has something to show.
pub struct PlayerStyleRepository<S: DocumentStore> {
    store: S,
    cache: Option<Vec<PlayerStyle>>,
}

impl<S: DocumentStore> PlayerStyleRepository<S> {
    pub const COLLECTION: &'static str = "player_styles";

    pub fn new(store: S) -> Self {
        Self { store, cache: None }
    }

    pub fn get_styles(&mut self) -> Vec<PlayerStyle> {
        if self.cache.is_none() {
            let styles = match self.store.load(Self::COLLECTION) {
                Ok(styles) => styles,
                Err(e) => {
                    warn!("player_styles fixture unreadable, using presets: {}", e);
                    PlayerStyle::presets().to_vec()
                }
            };
            self.cache = Some(styles);
        }
        self.cache.clone().unwrap_or_default()
    }

    pub fn styles_by_category(&mut self, category: &str) -> Vec<PlayerStyle> {
        self.get_styles()
            .into_iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

const PSR_SCHEME: IdScheme = IdScheme::new("PSR", 3, IdPolicy::CountBased);

/// Player-skin change records, device-only. The one collection whose ids
/// come from the record count rather than the last stored id.
pub struct PlaybackStyleRecordRepository<S: DocumentStore> {
    core: CollectionCore<PlaybackStyleRecord, S>,
}

impl<S: DocumentStore> PlaybackStyleRecordRepository<S> {
    pub const COLLECTION: &'static str = "playback_style_records";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<PlaybackStyleRecord>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn add(&mut self, record: PlaybackStyleRecord) -> Result<()> {
        self.core.push(record)
    }

    pub fn next_id(&mut self) -> Result<String> {
        let records = self.core.records()?;
        let last = records.last().map(|r| r.record_id.as_str());
        PSR_SCHEME.next(last, records.len())
    }
}
