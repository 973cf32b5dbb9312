//! # State Mirror
//!
//! A side-channel store that snapshots observable application state into a
//! fixed set of JSON documents, independent of the domain collections, so
//! an external process can verify what the app believes is happening.
//!
//! Presenters call the typed `update_*` methods opportunistically whenever
//! a user-visible state change occurs. The mirror and the domain
//! repositories are two independently-consistent stores: a domain mutation
//! without the matching mirror update is semantically incomplete but not a
//! storage-layer error.
//!
//! Every update is a read-modify-write of the whole document with a fresh
//! `lastUpdated` stamp. Three mutation shapes exist and must not be mixed
//! up per document:
//!
//! - **append** (navigation, playback history, searches, comments, task
//!   log): every call adds one entry, duplicates included;
//! - **single-slot** (current song, player style, stroll mode, current MV):
//!   every call overwrites the slot;
//! - **membership** (favorites, collected items, followed artists): adding
//!   an existing member is a no-op, so the set stays duplicate-free.
//!
//! Reads substitute a typed default for an absent or malformed file, never
//! an error. Only writes can fail.

use crate::error::{Result, VaultError};
use chrono::Local;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod model;

use model::*;

const APP_STATE_FILE: &str = "app_state.json";
const PLAYBACK_STATE_FILE: &str = "playback_state.json";
const USER_FAVORITES_FILE: &str = "user_favorites.json";
const USER_PLAYLISTS_FILE: &str = "user_playlists.json";
const COLLECTED_ITEMS_FILE: &str = "collected_items.json";
const FOLLOWED_ARTISTS_FILE: &str = "followed_artists.json";
const SEARCH_HISTORY_FILE: &str = "search_history.json";
const COMMENTS_FILE: &str = "comments.json";
const PLAYER_SETTINGS_FILE: &str = "player_settings.json";
const LISTENING_STATS_FILE: &str = "listening_stats.json";
const MV_PLAYBACK_FILE: &str = "mv_playback.json";
const TASK_LOGS_FILE: &str = "task_logs.json";

/// Partial change to the playback document. Unset fields keep their
/// current values.
#[derive(Debug, Clone, Default)]
pub struct PlaybackChange {
    pub song: Option<CurrentSongInfo>,
    pub is_playing: Option<bool>,
    pub playback_mode: Option<String>,
    pub volume: Option<u32>,
}

/// The mirror itself: one directory, twelve documents.
#[derive(Debug, Clone)]
pub struct StateMirror {
    dir: PathBuf,
    history_limit: Option<usize>,
    pretty: bool,
}

impl StateMirror {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            history_limit: None,
            pretty: true,
        }
    }

    /// Cap append-style histories at the newest `limit` entries.
    /// `None` leaves them unbounded.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the mirror directory and seed every absent document with its
    /// default value. Idempotent: already-populated documents are left
    /// alone, so this is safe to call from every entry point.
    pub fn init(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(VaultError::Io)?;
            debug!("created state mirror directory {}", self.dir.display());
        }

        let now = Self::now();
        self.seed(APP_STATE_FILE, &AppState {
            current_page: "unknown".to_string(),
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(PLAYBACK_STATE_FILE, &PlaybackState {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(USER_FAVORITES_FILE, &UserFavorites {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(USER_PLAYLISTS_FILE, &UserPlaylists {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(COLLECTED_ITEMS_FILE, &CollectedItems {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(FOLLOWED_ARTISTS_FILE, &FollowedArtists {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(SEARCH_HISTORY_FILE, &SearchHistory {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(COMMENTS_FILE, &UserComments {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(PLAYER_SETTINGS_FILE, &PlayerSettings {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(LISTENING_STATS_FILE, &ListeningStats {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(MV_PLAYBACK_FILE, &MvPlayback {
            last_updated: now.clone(),
            ..Default::default()
        })?;
        self.seed(TASK_LOGS_FILE, &TaskLogs {
            last_updated: now,
            ..Default::default()
        })?;
        Ok(())
    }

    // ---- app state ----

    pub fn app_state(&self) -> AppState {
        self.read(APP_STATE_FILE).unwrap_or_else(|| AppState {
            current_page: "unknown".to_string(),
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    /// Append one navigation record and move `currentPage`.
    pub fn update_current_page(&self, page: &str) -> Result<()> {
        let mut state = self.app_state();
        state.navigation_history.push(NavigationRecord {
            page: page.to_string(),
            timestamp: Self::now(),
        });
        self.trim(&mut state.navigation_history);
        state.current_page = page.to_string();
        self.stamp_and_write(APP_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    pub fn update_show_lyrics(&self, show: bool) -> Result<()> {
        let mut state = self.app_state();
        state.show_lyrics = show;
        self.stamp_and_write(APP_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    pub fn update_current_song_id(&self, song_id: Option<&str>) -> Result<()> {
        let mut state = self.app_state();
        state.current_song_id = song_id.map(str::to_string);
        self.stamp_and_write(APP_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    pub fn update_current_playlist_id(&self, playlist_id: Option<&str>) -> Result<()> {
        let mut state = self.app_state();
        state.current_playlist_id = playlist_id.map(str::to_string);
        self.stamp_and_write(APP_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    pub fn update_current_album_id(&self, album_id: Option<&str>) -> Result<()> {
        let mut state = self.app_state();
        state.current_album_id = album_id.map(str::to_string);
        self.stamp_and_write(APP_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    // ---- playback ----

    pub fn playback_state(&self) -> PlaybackState {
        self.read(PLAYBACK_STATE_FILE).unwrap_or_else(|| PlaybackState {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    /// Single-slot update of current song / play state / mode / volume.
    pub fn update_playback(&self, change: PlaybackChange) -> Result<()> {
        let mut state = self.playback_state();
        if let Some(song) = change.song {
            state.current_song = Some(song);
        }
        if let Some(is_playing) = change.is_playing {
            state.is_playing = is_playing;
        }
        if let Some(mode) = change.playback_mode {
            state.playback_mode = mode;
        }
        if let Some(volume) = change.volume {
            state.volume = volume;
        }
        self.stamp_and_write(PLAYBACK_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    /// Progress tick from the playback clock.
    pub fn update_progress(&self, progress: u32, duration: u32) -> Result<()> {
        let mut state = self.playback_state();
        state.progress = progress;
        state.duration = duration;
        self.stamp_and_write(PLAYBACK_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    /// Append one play/pause/stop action.
    pub fn add_playback_history(&self, song_id: &str, action: &str) -> Result<()> {
        let mut state = self.playback_state();
        state.playback_history.push(PlaybackHistoryRecord {
            song_id: song_id.to_string(),
            timestamp: Self::now(),
            action: action.to_string(),
        });
        self.trim(&mut state.playback_history);
        self.stamp_and_write(PLAYBACK_STATE_FILE, state, |s, now| s.last_updated = now)
    }

    // ---- favorites ----

    pub fn user_favorites(&self) -> UserFavorites {
        self.read(USER_FAVORITES_FILE).unwrap_or_else(|| UserFavorites {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    /// Membership add: favoriting an already-favorited song is a no-op.
    pub fn add_favorite_song(&self, song_id: &str, song_name: &str, artist: &str) -> Result<()> {
        let mut favorites = self.user_favorites();
        if favorites.favorite_songs.iter().any(|s| s.song_id == song_id) {
            return Ok(());
        }
        favorites.favorite_songs.push(FavoriteSongRecord {
            song_id: song_id.to_string(),
            song_name: song_name.to_string(),
            artist: artist.to_string(),
            added_time: Self::now(),
        });
        self.stamp_and_write(USER_FAVORITES_FILE, favorites, |f, now| f.last_updated = now)
    }

    pub fn remove_favorite_song(&self, song_id: &str) -> Result<()> {
        let mut favorites = self.user_favorites();
        favorites.favorite_songs.retain(|s| s.song_id != song_id);
        favorites.recent_unfavorited = Some(song_id.to_string());
        self.stamp_and_write(USER_FAVORITES_FILE, favorites, |f, now| f.last_updated = now)
    }

    // ---- playlists ----

    pub fn user_playlists(&self) -> UserPlaylists {
        self.read(USER_PLAYLISTS_FILE).unwrap_or_else(|| UserPlaylists {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn add_playlist(&self, playlist_id: &str, playlist_name: &str, song_ids: &[String]) -> Result<()> {
        let mut playlists = self.user_playlists();
        playlists.playlists.push(PlaylistStateRecord {
            playlist_id: playlist_id.to_string(),
            playlist_name: playlist_name.to_string(),
            song_ids: song_ids.to_vec(),
            song_count: song_ids.len(),
            create_time: chrono::Utc::now().timestamp_millis(),
            sort_order: "default".to_string(),
        });
        self.stamp_and_write(USER_PLAYLISTS_FILE, playlists, |p, now| p.last_updated = now)
    }

    pub fn update_current_viewing_playlist(&self, playlist_id: Option<&str>) -> Result<()> {
        let mut playlists = self.user_playlists();
        playlists.current_viewing_playlist = playlist_id.map(str::to_string);
        self.stamp_and_write(USER_PLAYLISTS_FILE, playlists, |p, now| p.last_updated = now)
    }

    pub fn update_playlist_sort_order(&self, playlist_id: &str, sort_order: &str) -> Result<()> {
        let mut playlists = self.user_playlists();
        for record in &mut playlists.playlists {
            if record.playlist_id == playlist_id {
                record.sort_order = sort_order.to_string();
            }
        }
        self.stamp_and_write(USER_PLAYLISTS_FILE, playlists, |p, now| p.last_updated = now)
    }

    // ---- collected items ----

    pub fn collected_items(&self) -> CollectedItems {
        self.read(COLLECTED_ITEMS_FILE).unwrap_or_else(|| CollectedItems {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn add_collected_playlist(&self, playlist_id: &str, playlist_name: &str) -> Result<()> {
        let mut items = self.collected_items();
        if items
            .collected_playlists
            .iter()
            .any(|p| p.playlist_id == playlist_id)
        {
            return Ok(());
        }
        items.collected_playlists.push(CollectedPlaylistRecord {
            playlist_id: playlist_id.to_string(),
            playlist_name: playlist_name.to_string(),
            collected_time: Self::now(),
        });
        self.stamp_and_write(COLLECTED_ITEMS_FILE, items, |i, now| i.last_updated = now)
    }

    pub fn add_collected_album(
        &self,
        album_id: &str,
        album_name: &str,
        artist: &str,
        artist_id: &str,
    ) -> Result<()> {
        let mut items = self.collected_items();
        if items.collected_albums.iter().any(|a| a.album_id == album_id) {
            return Ok(());
        }
        items.collected_albums.push(CollectedAlbumRecord {
            album_id: album_id.to_string(),
            album_name: album_name.to_string(),
            artist: artist.to_string(),
            artist_id: artist_id.to_string(),
            collected_time: Self::now(),
        });
        self.stamp_and_write(COLLECTED_ITEMS_FILE, items, |i, now| i.last_updated = now)
    }

    // ---- followed artists ----

    pub fn followed_artists(&self) -> FollowedArtists {
        self.read(FOLLOWED_ARTISTS_FILE).unwrap_or_else(|| FollowedArtists {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn add_followed_artist(&self, artist_id: &str, artist_name: &str) -> Result<()> {
        let mut followed = self.followed_artists();
        if followed
            .followed_artists
            .iter()
            .any(|a| a.artist_id == artist_id)
        {
            return Ok(());
        }
        followed.followed_artists.push(FollowedArtistRecord {
            artist_id: artist_id.to_string(),
            artist_name: artist_name.to_string(),
            followed_time: Self::now(),
        });
        self.stamp_and_write(FOLLOWED_ARTISTS_FILE, followed, |f, now| f.last_updated = now)
    }

    pub fn remove_followed_artist(&self, artist_id: &str) -> Result<()> {
        let mut followed = self.followed_artists();
        followed.followed_artists.retain(|a| a.artist_id != artist_id);
        followed.recently_unfollowed = Some(artist_id.to_string());
        self.stamp_and_write(FOLLOWED_ARTISTS_FILE, followed, |f, now| f.last_updated = now)
    }

    // ---- search history ----

    pub fn search_history(&self) -> SearchHistory {
        self.read(SEARCH_HISTORY_FILE).unwrap_or_else(|| SearchHistory {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn add_search_record(
        &self,
        query: &str,
        result_type: &str,
        result_id: &str,
        action: &str,
    ) -> Result<()> {
        let mut history = self.search_history();
        history.searches.push(SearchEntry {
            search_id: crate::ident::timestamp_id("search_"),
            query: query.to_string(),
            timestamp: Self::now(),
            result_type: result_type.to_string(),
            result_id: result_id.to_string(),
            action: action.to_string(),
        });
        self.trim(&mut history.searches);
        self.stamp_and_write(SEARCH_HISTORY_FILE, history, |h, now| h.last_updated = now)
    }

    // ---- comments ----

    pub fn comments(&self) -> UserComments {
        self.read(COMMENTS_FILE).unwrap_or_else(|| UserComments {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn add_comment(&self, song_id: &str, content: &str) -> Result<()> {
        let mut comments = self.comments();
        comments.user_comments.push(UserCommentRecord {
            comment_id: crate::ident::timestamp_id("comment_"),
            song_id: song_id.to_string(),
            content: content.to_string(),
            timestamp: Self::now(),
        });
        self.stamp_and_write(COMMENTS_FILE, comments, |c, now| c.last_updated = now)
    }

    // ---- player settings ----

    pub fn player_settings(&self) -> PlayerSettings {
        self.read(PLAYER_SETTINGS_FILE).unwrap_or_else(|| PlayerSettings {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn update_player_style(&self, style_id: &str, style_name: &str) -> Result<()> {
        let mut settings = self.player_settings();
        settings.player_style = Some(StyleSelection {
            style_id: style_id.to_string(),
            style_name: style_name.to_string(),
            changed_time: Self::now(),
        });
        self.stamp_and_write(PLAYER_SETTINGS_FILE, settings, |s, now| s.last_updated = now)
    }

    pub fn update_stroll_mode(&self, scene: &str, is_active: bool) -> Result<()> {
        let mut settings = self.player_settings();
        settings.stroll_mode = Some(StrollModeRecord {
            is_active,
            scene: scene.to_string(),
            activated_time: Self::now(),
        });
        self.stamp_and_write(PLAYER_SETTINGS_FILE, settings, |s, now| s.last_updated = now)
    }

    // ---- listening stats ----

    pub fn listening_stats(&self) -> ListeningStats {
        self.read(LISTENING_STATS_FILE).unwrap_or_else(|| ListeningStats {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    /// Mark the weekly or monthly report as viewed. Unknown values are
    /// logged and ignored.
    pub fn update_viewed_stats(&self, stats_type: &str) -> Result<()> {
        let mut stats = self.listening_stats();
        match stats_type {
            "weekly" => stats.viewed_stats.weekly = true,
            "monthly" => stats.viewed_stats.monthly = true,
            other => warn!("unknown stats type {:?}, ignoring", other),
        }
        self.stamp_and_write(LISTENING_STATS_FILE, stats, |s, now| s.last_updated = now)
    }

    // ---- MV playback ----

    pub fn mv_playback(&self) -> MvPlayback {
        self.read(MV_PLAYBACK_FILE).unwrap_or_else(|| MvPlayback {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    /// Single-slot current MV plus one appended history entry per call.
    pub fn update_mv_playback(
        &self,
        mv_id: &str,
        song_id: &str,
        song_name: &str,
        artist: &str,
        is_playing: bool,
    ) -> Result<()> {
        let mut playback = self.mv_playback();
        playback.current_mv = Some(CurrentMvInfo {
            mv_id: mv_id.to_string(),
            song_id: song_id.to_string(),
            song_name: song_name.to_string(),
            artist: artist.to_string(),
            is_playing,
        });
        playback.mv_history.push(MvHistoryRecord {
            mv_id: mv_id.to_string(),
            timestamp: Self::now(),
            action: if is_playing { "play" } else { "pause" }.to_string(),
        });
        self.trim(&mut playback.mv_history);
        self.stamp_and_write(MV_PLAYBACK_FILE, playback, |p, now| p.last_updated = now)
    }

    // ---- task log ----

    pub fn task_logs(&self) -> TaskLogs {
        self.read(TASK_LOGS_FILE).unwrap_or_else(|| TaskLogs {
            last_updated: Self::now(),
            ..Default::default()
        })
    }

    pub fn log_task_completed(
        &self,
        task_id: &str,
        task_name: &str,
        detail: Option<TaskDetail>,
    ) -> Result<()> {
        let mut logs = self.task_logs();
        logs.tasks.push(TaskRecord {
            task_id: task_id.to_string(),
            task_name: task_name.to_string(),
            status: "TASK_COMPLETED".to_string(),
            completed_time: Self::now(),
            detail,
        });
        self.trim(&mut logs.tasks);
        self.stamp_and_write(TASK_LOGS_FILE, logs, |l, now| l.last_updated = now)
    }

    // ---- plumbing ----

    fn now() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn seed<T: Serialize>(&self, file: &str, default: &T) -> Result<()> {
        if self.path(file).exists() {
            return Ok(());
        }
        self.write(file, default)
    }

    /// Absent or malformed file reads as `None`; the caller substitutes the
    /// typed default.
    fn read<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.path(file);
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to read {}: {}", file, e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("malformed state document {}: {}", file, e);
                None
            }
        }
    }

    fn write<T: Serialize>(&self, file: &str, doc: &T) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(VaultError::Io)?;
        }
        let content = if self.pretty {
            serde_json::to_string_pretty(doc).map_err(VaultError::Serialization)?
        } else {
            serde_json::to_string(doc).map_err(VaultError::Serialization)?
        };
        fs::write(self.path(file), content).map_err(VaultError::Io)?;
        Ok(())
    }

    fn stamp_and_write<T, F>(&self, file: &str, mut doc: T, stamp: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&mut T, String),
    {
        stamp(&mut doc, Self::now());
        self.write(file, &doc)
    }

    fn trim<T>(&self, history: &mut Vec<T>) {
        if let Some(limit) = self.history_limit {
            if history.len() > limit {
                let excess = history.len() - limit;
                history.drain(..excess);
            }
        }
    }
}
