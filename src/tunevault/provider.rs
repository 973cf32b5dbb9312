//! Explicit construction of the storage layer.
//!
//! The context is built once at process start and handed down; every
//! repository and the state mirror come out of [`Repositories::new`]. There
//! is no global registry, so two contexts over different directories can
//! coexist (tests do exactly that) and nothing can observe a half-bound
//! singleton.

use crate::config::VaultConfig;
use crate::error::{Result, VaultError};
use crate::mirror::StateMirror;
use crate::repo::{
    AlbumRepository, ArtistFollowRepository, ArtistRepository, CollectRecordRepository,
    CommentRepository, DownloadRecordRepository, DurationRepository, FanRepository,
    FollowItemRepository, LyricRepository, MusicVideoRepository, PlaybackStyleRecordRepository,
    PlayerStyleRepository, PlaylistRepository, RankRepository, RecognitionRepository,
    ShareRecordRepository, SongRepository, SortOrderRepository,
};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Where the storage layer lives: the read-only bundle and the writable
/// device directory, plus the loaded config.
#[derive(Debug, Clone)]
pub struct StorageContext {
    pub bundle_dir: PathBuf,
    pub device_dir: PathBuf,
    pub config: VaultConfig,
}

impl StorageContext {
    /// Context over explicit directories. Config is read from the device
    /// directory; an absent config file means defaults.
    pub fn new(bundle_dir: PathBuf, device_dir: PathBuf) -> Result<Self> {
        let config = VaultConfig::load(&device_dir)?;
        Ok(Self {
            bundle_dir,
            device_dir,
            config,
        })
    }

    /// Context with the device directory in the platform data dir.
    pub fn discover(bundle_dir: PathBuf) -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "tunevault", "tunevault")
            .ok_or_else(|| VaultError::Store("could not determine data directory".to_string()))?;
        Self::new(bundle_dir, proj_dirs.data_dir().to_path_buf())
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.bundle_dir.clone(), self.device_dir.clone())
    }

    /// The state mirror lives in a `state/` subdirectory so mirror
    /// documents never collide with collection files.
    pub fn mirror(&self) -> StateMirror {
        StateMirror::new(self.device_dir.join("state"))
            .with_history_limit(self.config.history_limit)
            .with_pretty(self.config.pretty_state_json)
    }
}

/// Every typed repository plus the state mirror, constructed eagerly from
/// one context. Each repository owns its own store handle and cache.
pub struct Repositories {
    pub songs: SongRepository<FileStore>,
    pub playlists: PlaylistRepository<FileStore>,
    pub albums: AlbumRepository<FileStore>,
    pub artists: ArtistRepository<FileStore>,
    pub music_videos: MusicVideoRepository<FileStore>,
    pub ranks: RankRepository<FileStore>,
    pub lyrics: LyricRepository<FileStore>,
    pub fans: FanRepository<FileStore>,
    pub durations: DurationRepository<FileStore>,
    pub comments: CommentRepository<FileStore>,
    pub collects: CollectRecordRepository<FileStore>,
    pub downloads: DownloadRecordRepository<FileStore>,
    pub shares: ShareRecordRepository<FileStore>,
    pub sort_orders: SortOrderRepository<FileStore>,
    pub artist_follows: ArtistFollowRepository<FileStore>,
    pub follow_items: FollowItemRepository<FileStore>,
    pub player_styles: PlayerStyleRepository<FileStore>,
    pub playback_styles: PlaybackStyleRecordRepository<FileStore>,
    pub recognition: RecognitionRepository<FileStore>,
    pub mirror: StateMirror,
}

impl Repositories {
    pub fn new(context: &StorageContext) -> Self {
        Self {
            songs: SongRepository::new(context.store()),
            playlists: PlaylistRepository::new(context.store()),
            albums: AlbumRepository::new(context.store()),
            artists: ArtistRepository::new(context.store()),
            music_videos: MusicVideoRepository::new(context.store()),
            ranks: RankRepository::new(context.store()),
            lyrics: LyricRepository::new(context.store()),
            fans: FanRepository::new(context.store()),
            durations: DurationRepository::new(context.store()),
            comments: CommentRepository::new(context.store()),
            collects: CollectRecordRepository::new(context.store()),
            downloads: DownloadRecordRepository::new(context.store()),
            shares: ShareRecordRepository::new(context.store()),
            sort_orders: SortOrderRepository::new(context.store()),
            artist_follows: ArtistFollowRepository::new(context.store()),
            follow_items: FollowItemRepository::new(context.store()),
            player_styles: PlayerStyleRepository::new(context.store()),
            playback_styles: PlaybackStyleRecordRepository::new(context.store()),
            recognition: RecognitionRepository::new(context.store()),
            mirror: context.mirror(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;
    use std::fs;
    use tempfile::TempDir;

    fn seeded_context(temp: &TempDir) -> StorageContext {
        let bundle = temp.path().join("bundle");
        let device = temp.path().join("device");
        fs::create_dir_all(bundle.join("data")).unwrap();
        let songs = vec![Song {
            song_id: "song_001".to_string(),
            song_name: "One".to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration: 180,
            cover_url: String::new(),
            lyrics: String::new(),
            release_year: 2020,
        }];
        fs::write(
            bundle.join("data").join("songs.json"),
            serde_json::to_string(&songs).unwrap(),
        )
        .unwrap();
        StorageContext::new(bundle, device).unwrap()
    }

    #[test]
    fn test_repositories_share_one_context() {
        let temp = TempDir::new().unwrap();
        let context = seeded_context(&temp);
        let mut repos = Repositories::new(&context);

        assert_eq!(repos.songs.get_all().unwrap().len(), 1);
        assert!(repos.mirror.dir().starts_with(&context.device_dir));
    }

    #[test]
    fn test_two_contexts_are_independent() {
        let temp_a = TempDir::new().unwrap();
        let temp_b = TempDir::new().unwrap();
        let mut repos_a = Repositories::new(&seeded_context(&temp_a));
        let repos_b_context = StorageContext::new(
            temp_b.path().join("bundle"),
            temp_b.path().join("device"),
        )
        .unwrap();
        let mut repos_b = Repositories::new(&repos_b_context);

        assert_eq!(repos_a.songs.get_all().unwrap().len(), 1);
        assert!(repos_b.songs.get_all().is_err());
    }

    #[test]
    fn test_context_picks_up_config() {
        let temp = TempDir::new().unwrap();
        let device = temp.path().join("device");
        VaultConfig {
            history_limit: Some(10),
            pretty_state_json: false,
        }
        .save(&device)
        .unwrap();

        let context = StorageContext::new(temp.path().join("bundle"), device).unwrap();
        assert_eq!(context.config.history_limit, Some(10));
    }
}
