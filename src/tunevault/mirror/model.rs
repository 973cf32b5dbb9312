//! State-mirror document types.
//!
//! These shapes are the external verification contract: field names are
//! camelCase on disk and every document carries a `lastUpdated` stamp in
//! `YYYY-MM-DD HH:MM:SS` local time. Keep them in sync with whatever reads
//! the mirror directory.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRecord {
    pub page: String,
    pub timestamp: String,
}

/// Where the user is in the app, plus the full navigation trail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_page: String,
    #[serde(default)]
    pub navigation_history: Vec<NavigationRecord>,
    #[serde(default)]
    pub current_song_id: Option<String>,
    #[serde(default)]
    pub current_playlist_id: Option<String>,
    #[serde(default)]
    pub current_album_id: Option<String>,
    #[serde(default)]
    pub show_lyrics: bool,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSongInfo {
    pub song_id: String,
    pub song_name: String,
    pub artist: String,
    /// Where playback started from, e.g. `daily_recommend`, `rank`.
    #[serde(default)]
    pub source: String,
    /// Finer detail, e.g. "track 3".
    #[serde(default)]
    pub source_detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackHistoryRecord {
    pub song_id: String,
    pub timestamp: String,
    /// `play`, `pause` or `stop`.
    pub action: String,
}

/// Single-slot current playback plus the append-style action history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub current_song: Option<CurrentSongInfo>,
    pub is_playing: bool,
    /// `sequential`, `single_loop` or `shuffle`.
    pub playback_mode: String,
    pub volume: u32,
    /// Elapsed seconds into the current song.
    #[serde(default)]
    pub progress: u32,
    /// Current song length in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub playback_history: Vec<PlaybackHistoryRecord>,
    pub last_updated: String,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_song: None,
            is_playing: false,
            playback_mode: "sequential".to_string(),
            volume: 50,
            progress: 0,
            duration: 0,
            playback_history: Vec::new(),
            last_updated: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSongRecord {
    pub song_id: String,
    pub song_name: String,
    pub artist: String,
    pub added_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFavorites {
    #[serde(default)]
    pub favorite_songs: Vec<FavoriteSongRecord>,
    #[serde(default)]
    pub recent_unfavorited: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStateRecord {
    pub playlist_id: String,
    pub playlist_name: String,
    pub song_ids: Vec<String>,
    pub song_count: usize,
    pub create_time: i64,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

fn default_sort_order() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPlaylists {
    #[serde(default)]
    pub playlists: Vec<PlaylistStateRecord>,
    #[serde(default)]
    pub current_viewing_playlist: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedPlaylistRecord {
    pub playlist_id: String,
    pub playlist_name: String,
    pub collected_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedAlbumRecord {
    pub album_id: String,
    pub album_name: String,
    pub artist: String,
    pub artist_id: String,
    pub collected_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedItems {
    #[serde(default)]
    pub collected_playlists: Vec<CollectedPlaylistRecord>,
    #[serde(default)]
    pub collected_albums: Vec<CollectedAlbumRecord>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedArtistRecord {
    pub artist_id: String,
    pub artist_name: String,
    pub followed_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedArtists {
    #[serde(default)]
    pub followed_artists: Vec<FollowedArtistRecord>,
    #[serde(default)]
    pub recently_unfollowed: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub search_id: String,
    pub query: String,
    pub timestamp: String,
    /// `song`, `artist`, `album` or `playlist`.
    pub result_type: String,
    pub result_id: String,
    /// `view` or `play`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistory {
    #[serde(default)]
    pub searches: Vec<SearchEntry>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentRecord {
    pub comment_id: String,
    pub song_id: String,
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComments {
    #[serde(default)]
    pub user_comments: Vec<UserCommentRecord>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSelection {
    pub style_id: String,
    pub style_name: String,
    pub changed_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrollModeRecord {
    pub is_active: bool,
    pub scene: String,
    pub activated_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    #[serde(default)]
    pub player_style: Option<StyleSelection>,
    #[serde(default)]
    pub stroll_mode: Option<StrollModeRecord>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStatsRecord {
    pub total_minutes: u32,
    pub week_start_date: String,
    pub week_end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatsRecord {
    pub total_minutes: u32,
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewedStatsRecord {
    #[serde(default)]
    pub weekly: bool,
    #[serde(default)]
    pub monthly: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningStats {
    #[serde(default)]
    pub weekly_stats: Option<WeeklyStatsRecord>,
    #[serde(default)]
    pub monthly_stats: Option<MonthlyStatsRecord>,
    #[serde(default)]
    pub viewed_stats: ViewedStatsRecord,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMvInfo {
    pub mv_id: String,
    pub song_id: String,
    pub song_name: String,
    pub artist: String,
    pub is_playing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvHistoryRecord {
    pub mv_id: String,
    pub timestamp: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvPlayback {
    #[serde(default)]
    pub current_mv: Option<CurrentMvInfo>,
    #[serde(default)]
    pub mv_history: Vec<MvHistoryRecord>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(default)]
    pub current_page: Option<String>,
    #[serde(default)]
    pub song_id: Option<String>,
    #[serde(default)]
    pub playlist_id: Option<String>,
    #[serde(default)]
    pub album_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: String,
    pub task_name: String,
    /// `TASK_PENDING`, `TASK_COMPLETED` or `TASK_FAILED`.
    pub status: String,
    pub completed_time: String,
    #[serde(default)]
    pub detail: Option<TaskDetail>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLogs {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    pub last_updated: String,
}
