//! Response normalization: translates raw tikwm payloads into the stable
//! output schema. Pure functions over `serde_json::Value`; nothing here
//! performs I/O or retries.

use crate::error::{GatewayError, Result};
use crate::types::{
    MusicInfo, RawPayload, SaveCountVariant, UserProfile, UserStats, VideoList, VideoStats,
    VideoSummary,
};
use serde_json::Value;
use tracing::warn;

/// Fallback message when the upstream reports failure without a `msg`
const GENERIC_UPSTREAM_FAILURE: &str = "upstream call failed";

fn require_str(value: &Value, path: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GatewayError::MissingField(path.to_string()))
}

fn require_u64(value: &Value, path: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| GatewayError::MissingField(path.to_string()))
}

fn require_i64(value: &Value, path: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| GatewayError::MissingField(path.to_string()))
}

fn require_bool(value: &Value, path: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| GatewayError::MissingField(path.to_string()))
}

/// Checks the upstream success sentinel (`code == 0`). A non-zero code is a
/// provider-reported failure carrying `msg`; a missing code is a malformed
/// response.
fn check_success(raw: &RawPayload) -> Result<()> {
    let code = require_i64(&raw["code"], "code")?;
    if code != 0 {
        let message = raw["msg"]
            .as_str()
            .unwrap_or(GENERIC_UPSTREAM_FAILURE)
            .to_string();
        warn!("Upstream reported failure: code={} msg={}", code, message);
        return Err(GatewayError::Upstream { message });
    }
    Ok(())
}

/// Normalizes a `/api/user/info` payload into a [`UserProfile`].
///
/// Every output field is sourced from a fixed upstream path; any absent or
/// mistyped path fails the call rather than defaulting.
pub fn normalize_user(raw: &RawPayload) -> Result<UserProfile> {
    check_success(raw)?;

    let user = &raw["data"]["user"];
    let stats = &raw["data"]["stats"];

    Ok(UserProfile {
        id: require_str(&user["id"], "data.user.id")?,
        username: require_str(&user["uniqueId"], "data.user.uniqueId")?,
        nickname: require_str(&user["nickname"], "data.user.nickname")?,
        avatar: require_str(&user["avatarLarger"], "data.user.avatarLarger")?,
        verified: require_bool(&user["verified"], "data.user.verified")?,
        bio: require_str(&user["signature"], "data.user.signature")?,
        stats: UserStats {
            following: require_u64(&stats["followingCount"], "data.stats.followingCount")?,
            followers: require_u64(&stats["followerCount"], "data.stats.followerCount")?,
            likes: require_u64(&stats["heartCount"], "data.stats.heartCount")?,
            videos: require_u64(&stats["videoCount"], "data.stats.videoCount")?,
        },
    })
}

/// Normalizes a `/api/user/posts` or `/api/feed/search` payload into a
/// [`VideoList`], preserving upstream order.
///
/// Entries are mapped independently and the whole call fails if any single
/// entry does not conform; callers never see a partial list.
pub fn normalize_video_list(raw: &RawPayload, variant: SaveCountVariant) -> Result<VideoList> {
    check_success(raw)?;

    let videos = raw["data"]["videos"]
        .as_array()
        .ok_or_else(|| GatewayError::MissingField("data.videos".to_string()))?;

    videos
        .iter()
        .map(|video| normalize_video(video, variant))
        .collect()
}

fn normalize_video(video: &Value, variant: SaveCountVariant) -> Result<VideoSummary> {
    let music_info = &video["music_info"];

    let save_field = variant.upstream_field();
    let save_count = require_u64(&video[save_field], &format!("videos[].{save_field}"))?;
    let (download_count, collect_count) = match variant {
        SaveCountVariant::Download => (Some(save_count), None),
        SaveCountVariant::Collect => (None, Some(save_count)),
    };

    Ok(VideoSummary {
        id: require_str(&video["video_id"], "videos[].video_id")?,
        title: require_str(&video["title"], "videos[].title")?,
        duration: require_u64(&video["duration"], "videos[].duration")?,
        // Cover URLs vary by upstream variant; absent ones are omitted
        cover: video["cover"].as_str().map(str::to_string),
        origin_cover: video["origin_cover"].as_str().map(str::to_string),
        ai_dynamic_cover: video["ai_dynamic_cover"].as_str().map(str::to_string),
        play: require_str(&video["play"], "videos[].play")?,
        music: require_str(&video["music"], "videos[].music")?,
        music_info: MusicInfo {
            id: require_str(&music_info["id"], "videos[].music_info.id")?,
            title: require_str(&music_info["title"], "videos[].music_info.title")?,
            play: require_str(&music_info["play"], "videos[].music_info.play")?,
            cover: require_str(&music_info["cover"], "videos[].music_info.cover")?,
            author: require_str(&music_info["author"], "videos[].music_info.author")?,
        },
        stats: VideoStats {
            play_count: require_u64(&video["play_count"], "videos[].play_count")?,
            digg_count: require_u64(&video["digg_count"], "videos[].digg_count")?,
            comment_count: require_u64(&video["comment_count"], "videos[].comment_count")?,
            share_count: require_u64(&video["share_count"], "videos[].share_count")?,
            download_count,
            collect_count,
        },
        create_time: require_i64(&video["create_time"], "videos[].create_time")?,
    })
}
