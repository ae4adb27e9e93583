/// Upstream provider constants shared across the gateway.
// tikwm.com is the single upstream this service fronts.
pub const TIKWM_HOST: &str = "https://www.tikwm.com";
pub const TIKWM_API_NAME: &str = "tikwm.com";

// Upstream endpoint paths
pub const USER_INFO_PATH: &str = "/api/user/info";
pub const USER_POSTS_PATH: &str = "/api/user/posts";
pub const SEARCH_PATH: &str = "/api/feed/search";

// Defaults used when the environment/config file provides nothing
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
