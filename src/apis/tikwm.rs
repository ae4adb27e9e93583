use crate::apis::TikTokApi;
use crate::config::TikwmConfig;
use crate::constants::{SEARCH_PATH, TIKWM_API_NAME, USER_INFO_PATH, USER_POSTS_PATH};
use crate::error::{GatewayError, Result};
use crate::types::RawPayload;
use std::time::Duration;
use tracing::{debug, instrument};

/// Builds an upstream URL by appending each pair in `params` as a query
/// parameter to `host + endpoint`. Values are percent-encoded; no validation
/// of the values themselves happens here.
pub fn build_url(host: &str, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
    let url = reqwest::Url::parse_with_params(&format!("{host}{endpoint}"), params)
        .map_err(|e| GatewayError::Config(format!("Invalid upstream URL: {e}")))?;
    Ok(url.to_string())
}

/// HTTP client for the tikwm.com API
pub struct TikwmClient {
    client: reqwest::Client,
    host: String,
}

impl TikwmClient {
    /// Creates a client with the configured host and a bounded request
    /// timeout so a stalled upstream cannot stall callers.
    pub fn new(config: &TikwmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            host: config.host.clone(),
        })
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<RawPayload> {
        let url = build_url(&self.host, endpoint, params)?;
        debug!("Fetching upstream URL: {}", url);
        let response = self.client.get(&url).send().await?;
        let payload = response.json::<RawPayload>().await?;
        Ok(payload)
    }
}

#[async_trait::async_trait]
impl TikTokApi for TikwmClient {
    fn api_name(&self) -> &'static str {
        TIKWM_API_NAME
    }

    #[instrument(skip(self))]
    async fn user_info(&self, unique_id: &str) -> Result<RawPayload> {
        self.get_json(USER_INFO_PATH, &[("unique_id", unique_id)])
            .await
    }

    #[instrument(skip(self))]
    async fn user_posts(&self, unique_id: &str) -> Result<RawPayload> {
        self.get_json(USER_POSTS_PATH, &[("unique_id", unique_id)])
            .await
    }

    #[instrument(skip(self))]
    async fn search(&self, keywords: &str) -> Result<RawPayload> {
        self.get_json(SEARCH_PATH, &[("keywords", keywords)]).await
    }
}
