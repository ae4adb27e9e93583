// Upstream provider clients

pub mod tikwm;

use crate::error::Result;
use crate::types::RawPayload;

/// Seam to the upstream TikTok data provider. Handlers depend on this trait
/// so tests can substitute a stub for the real client.
#[async_trait::async_trait]
pub trait TikTokApi: Send + Sync {
    /// Display name of the backing provider
    fn api_name(&self) -> &'static str;

    /// Fetch raw user profile data for a username
    async fn user_info(&self, unique_id: &str) -> Result<RawPayload>;

    /// Fetch raw posted-video data for a username
    async fn user_posts(&self, unique_id: &str) -> Result<RawPayload>;

    /// Search raw video data by keyword
    async fn search(&self, keywords: &str) -> Result<RawPayload>;
}
