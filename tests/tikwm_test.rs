#[cfg(test)]
mod tests {
    use tiktok_gateway::apis::tikwm::{build_url, TikwmClient};
    use tiktok_gateway::apis::TikTokApi;
    use tiktok_gateway::config::TikwmConfig;

    #[test]
    fn test_build_url_single_param() {
        let url = build_url(
            "https://www.tikwm.com",
            "/api/user/info",
            &[("unique_id", "abc")],
        )
        .unwrap();

        assert_eq!(url, "https://www.tikwm.com/api/user/info?unique_id=abc");
    }

    #[test]
    fn test_build_url_multiple_params_preserve_order() {
        let url = build_url(
            "https://www.tikwm.com",
            "/api/feed/search",
            &[("keywords", "cats"), ("count", "10")],
        )
        .unwrap();

        assert_eq!(
            url,
            "https://www.tikwm.com/api/feed/search?keywords=cats&count=10"
        );
    }

    #[test]
    fn test_build_url_encodes_param_values() {
        let url = build_url(
            "https://www.tikwm.com",
            "/api/feed/search",
            &[("keywords", "a&b")],
        )
        .unwrap();

        assert_eq!(url, "https://www.tikwm.com/api/feed/search?keywords=a%26b");
    }

    #[test]
    fn test_build_url_rejects_invalid_host() {
        assert!(build_url("not a url", "/api/user/info", &[]).is_err());
    }

    #[test]
    fn test_tikwm_client_api_name() {
        let client = TikwmClient::new(&TikwmConfig::default()).unwrap();
        assert_eq!(client.api_name(), "tikwm.com");
    }
}
