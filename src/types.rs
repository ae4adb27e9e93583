use serde::Serialize;

/// Raw upstream payload as decoded from the provider
pub type RawPayload = serde_json::Value;

/// Normalized TikTok user profile returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub avatar: String,
    pub verified: bool,
    pub bio: String,
    pub stats: UserStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub following: u64,
    pub followers: u64,
    pub likes: u64,
    pub videos: u64,
}

/// Normalized video entry for list endpoints (user posts, search)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_dynamic_cover: Option<String>,
    pub play: String,
    pub music: String,
    pub music_info: MusicInfo,
    pub stats: VideoStats,
    #[serde(rename = "createTime")]
    pub create_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicInfo {
    pub id: String,
    pub title: String,
    pub play: String,
    pub cover: String,
    pub author: String,
}

/// Engagement counters. The save counter is serialized under whichever name
/// the upstream variant supplied; the other is omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoStats {
    #[serde(rename = "playCount")]
    pub play_count: u64,
    #[serde(rename = "diggCount")]
    pub digg_count: u64,
    #[serde(rename = "commentCount")]
    pub comment_count: u64,
    #[serde(rename = "shareCount")]
    pub share_count: u64,
    #[serde(rename = "downloadCount", skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
    #[serde(rename = "collectCount", skip_serializing_if = "Option::is_none")]
    pub collect_count: Option<u64>,
}

/// Ordered list of videos, upstream order preserved
pub type VideoList = Vec<VideoSummary>;

/// Which save counter the upstream payload carries. tikwm has shipped both
/// names; callers state which one they expect instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveCountVariant {
    Download,
    Collect,
}

impl SaveCountVariant {
    /// Upstream field name this variant reads
    pub fn upstream_field(self) -> &'static str {
        match self {
            SaveCountVariant::Download => "download_count",
            SaveCountVariant::Collect => "collect_count",
        }
    }
}
