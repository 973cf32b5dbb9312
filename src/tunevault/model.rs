//! Domain record types, one per catalog collection.
//!
//! Field names are camelCase on disk so the bundled fixture files under
//! `data/` keep working unchanged. Timestamps are epoch milliseconds unless
//! a field says otherwise.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A song in the catalog. Fixture: `data/songs.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: String,
    pub song_name: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
    pub cover_url: String,
    pub lyrics: String,
    pub release_year: i32,
}

/// A playlist and the ordered song ids it contains. Fixture: `data/playlists.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub playlist_id: String,
    pub playlist_name: String,
    pub description: String,
    pub cover_url: String,
    pub song_ids: Vec<String>,
    pub create_time: i64,
    pub song_count: usize,
}

/// Fixture: `data/albums.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: String,
    pub album_name: String,
    pub artist: String,
    pub artist_id: String,
    pub cover_url: String,
    /// Display format `YYYY.M.DD`, e.g. `1999.3.10`.
    pub release_date: String,
    pub description: String,
    pub song_ids: Vec<String>,
    pub song_count: usize,
    pub collect_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
}

/// Fixture: `data/artists.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: String,
    pub artist_name: String,
    pub avatar_url: String,
    pub description: String,
    pub song_count: usize,
    pub album_count: usize,
    pub fans: u64,
}

/// Fixture: `data/music_videos.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicVideo {
    pub mv_id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub play_count: u64,
    pub cover_url: String,
    pub song_id: String,
}

/// A user comment on a song. Seeded from `data/comments.json`, extended on
/// device once the user comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: String,
    pub song_id: String,
    pub user_id: String,
    pub username: String,
    pub avatar_url: String,
    pub content: String,
    pub timestamp: i64,
    pub like_count: u64,
    pub reply_count: u64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default = "default_user_level")]
    pub user_level: u32,
    #[serde(default)]
    pub is_long_comment: bool,
    #[serde(default)]
    pub is_collapsed: bool,
}

fn default_user_level() -> u32 {
    1
}

/// A followed artist or user in the subscribe list. Fixture: `data/follow_items.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowItem {
    pub id: String,
    pub name: String,
    /// `"artist"` or `"user"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub avatar_url: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub vip_type: Option<String>,
    #[serde(default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub activity_text: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub follow_time: i64,
}

/// A selectable player skin. Fixture: `data/player_styles.json`, with a
/// built-in preset table as fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStyle {
    pub style_id: String,
    pub style_name: String,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_in_use: bool,
}

impl PlayerStyle {
    pub const CATEGORY_CLASSIC: &'static str = "经典";
    pub const CATEGORY_RETRO: &'static str = "复古";
    pub const CATEGORY_CREATIVE: &'static str = "创意";
    pub const CATEGORY_ARTIST: &'static str = "艺术家";
    pub const CATEGORY_COLLAB: &'static str = "联名";

    /// The preset styles used when no `player_styles` fixture ships.
    pub fn presets() -> &'static [PlayerStyle] {
        &PRESET_STYLES
    }

    pub fn presets_by_category(category: &str) -> Vec<PlayerStyle> {
        PRESET_STYLES
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }
}

static PRESET_STYLES: Lazy<Vec<PlayerStyle>> = Lazy::new(|| {
    let style = |id: &str, name: &str, category: &str, image: &str, desc: &str, in_use: bool| {
        PlayerStyle {
            style_id: id.to_string(),
            style_name: name.to_string(),
            category: category.to_string(),
            image_url: image.to_string(),
            description: desc.to_string(),
            is_in_use: in_use,
        }
    };
    vec![
        style(
            "classic_vinyl",
            "经典黑胶",
            PlayerStyle::CATEGORY_CLASSIC,
            "player/1.jpg",
            "默认模式，支持横屏",
            false,
        ),
        style(
            "fullscreen_cover",
            "全屏封面",
            PlayerStyle::CATEGORY_CLASSIC,
            "player/2.jpg",
            "全屏展示歌曲封面",
            false,
        ),
        style(
            "album_cover",
            "唱片封面",
            PlayerStyle::CATEGORY_CLASSIC,
            "player/3.jpg",
            "黑胶封套的艺术",
            false,
        ),
        style(
            "retro_pod",
            "复刻·千禧Pod",
            PlayerStyle::CATEGORY_RETRO,
            "player/4.jpg",
            "流行于2000年前后",
            false,
        ),
        style(
            "retro_cd",
            "复刻·镭射CD",
            PlayerStyle::CATEGORY_RETRO,
            "player/5.jpg",
            "繁盛于80年代 - 00年代",
            true,
        ),
        style(
            "retro_light",
            "复刻·琉光",
            PlayerStyle::CATEGORY_RETRO,
            "player/6.jpg",
            "70年代 - 00年代",
            false,
        ),
    ]
});

/// One collect ("favorite this playlist/song/artist") action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub collection_id: String,
    /// `song`, `playlist` or `artist`.
    pub content_type: String,
    pub content_id: String,
    pub content_name: String,
    pub collection_time: i64,
    #[serde(default)]
    pub is_success: bool,
}

/// One song download action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRecord {
    pub download_id: String,
    pub song_id: String,
    pub song_name: String,
    pub download_time: i64,
    pub quality: String,
    #[serde(default)]
    pub is_success: bool,
}

/// One song share action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    pub share_id: String,
    pub song_id: String,
    pub song_name: String,
    pub share_time: i64,
    pub platform: String,
    #[serde(default)]
    pub is_success: bool,
}

/// The sort preference a user picked for one playlist. At most one record
/// per playlist is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderRecord {
    pub record_id: String,
    pub playlist_id: String,
    pub sort_type: String,
    pub timestamp: i64,
}

impl SortOrderRecord {
    pub const SORT_MANUAL: &'static str = "手动排序";
    pub const SORT_TIME_DESC: &'static str = "按收藏时间从新到旧排序";
    pub const SORT_TIME_ASC: &'static str = "按收藏时间从旧到新排序";
    pub const SORT_BY_SONG_NAME: &'static str = "按歌曲名排序";
    pub const SORT_BY_ALBUM_NAME: &'static str = "按专辑名排序";
    pub const SORT_BY_ARTIST_NAME: &'static str = "按歌手名排序";
    pub const SORT_NO_SOURCE_BOTTOM: &'static str = "无音源歌曲置底";
}

/// One follow/unfollow action against an artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFollowRecord {
    pub artist_id: String,
    pub artist_name: String,
    /// `follow` or `unfollow`.
    pub operation_type: String,
    pub operation_time: i64,
    #[serde(default)]
    pub is_success: bool,
}

/// One player-skin change action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStyleRecord {
    pub record_id: String,
    pub style_type: String,
    pub change_time: i64,
    #[serde(default)]
    pub is_success: bool,
}

/// A ranking chart and the songs on it. Fixture: `data/ranks.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub id: String,
    pub name: String,
    pub cover_url: String,
    pub songs: Vec<SongBrief>,
}

/// A chart entry: just enough of a song to render a rank row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongBrief {
    pub id: String,
    pub name: String,
    pub artist: String,
}

/// Timed lyrics for one song. Fixture: `data/lyrics.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lyric {
    pub song_id: String,
    pub lines: Vec<LyricLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    /// `mm:ss` offset into the song.
    pub time: String,
    pub text: String,
}

/// One fan in the fan list. Fixture: `data/fan_items.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanRecord {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// `vip` or `svip`.
    #[serde(default)]
    pub vip_type: Option<String>,
    pub fan_time: i64,
}

/// Listening-duration report across three time scales. A single-object
/// document: `data/duration_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningDuration {
    pub weekly: WeeklyData,
    pub monthly: MonthlyData,
    pub yearly: YearlyData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyData {
    /// Display format `M.DD`, e.g. `10.19`.
    pub start_date: String,
    pub end_date: String,
    pub badge_title: String,
    pub badge_description: String,
    pub total_hours: u32,
    pub total_minutes: u32,
    pub listened_days: u32,
    pub total_days: u32,
    pub daily_durations: Vec<DailyDuration>,
    pub top_date: String,
    pub top_hours: u32,
    pub top_minutes: u32,
    pub latest_time: String,
    /// Versus last week; negative means listened less.
    pub comparison_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDuration {
    pub day_label: String,
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    pub start_date: String,
    pub end_date: String,
    pub badge_title: String,
    pub badge_description: String,
    pub total_hours: u32,
    pub total_minutes: u32,
    pub listened_days: u32,
    pub total_days: u32,
    pub daily_checkins: Vec<DayCheckin>,
    pub latest_time: String,
    pub comparison_hours: i32,
    pub comparison_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCheckin {
    pub day: u32,
    pub has_listened: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyData {
    pub years: Vec<YearData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    pub year: i32,
    pub total_hours: u32,
    pub total_songs: u32,
    #[serde(default)]
    pub report_title: Option<String>,
    #[serde(default)]
    pub report_subtitle: Option<String>,
}

/// One song-recognition result, newest first in its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRecord {
    pub record_id: String,
    pub song_name: String,
    pub artist: String,
    pub cover_url: String,
    pub recognition_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_camel_case_on_disk() {
        let song = Song {
            song_id: "song_001".to_string(),
            song_name: "Test".to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration: 215,
            cover_url: "covers/1.jpg".to_string(),
            lyrics: "la la".to_string(),
            release_year: 1999,
        };
        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"songId\""));
        assert!(json.contains("\"coverUrl\""));
        assert!(json.contains("\"releaseYear\""));
    }

    #[test]
    fn test_comment_optional_fields_default() {
        let json = r#"{
            "commentId": "comment_1",
            "songId": "song_001",
            "userId": "u1",
            "username": "user",
            "avatarUrl": "",
            "content": "nice",
            "timestamp": 1700000000000,
            "likeCount": 3,
            "replyCount": 0
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert!(!comment.is_liked);
        assert_eq!(comment.user_level, 1);
        assert!(!comment.is_collapsed);
    }

    #[test]
    fn test_follow_item_type_field_name() {
        let json = r#"{"id":"a1","name":"N","type":"artist","avatarUrl":""}"#;
        let item: FollowItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "artist");
        let back = serde_json::to_string(&item).unwrap();
        assert!(back.contains("\"type\":\"artist\""));
    }

    #[test]
    fn test_preset_styles_have_one_in_use() {
        let in_use: Vec<_> = PlayerStyle::presets().iter().filter(|s| s.is_in_use).collect();
        assert_eq!(in_use.len(), 1);
        assert_eq!(in_use[0].style_id, "retro_cd");
    }

    #[test]
    fn test_presets_by_category() {
        let retro = PlayerStyle::presets_by_category(PlayerStyle::CATEGORY_RETRO);
        assert_eq!(retro.len(), 3);
        assert!(retro.iter().all(|s| s.category == PlayerStyle::CATEGORY_RETRO));
    }
}
