use serde::Deserialize;

/// Main configuration structure for TxtRipper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_timeout")]
    pub connect_timeout_secs: u64,

    /// Response read timeout (seconds)
    #[serde(rename = "read-timeout-secs", default = "default_timeout")]
    pub read_timeout_secs: u64,

    /// Maximum number of redirect hops followed per scheme attempt
    #[serde(rename = "redirect-limit", default = "default_redirect_limit")]
    pub redirect_limit: u32,

    /// Identifying client token sent as the User-Agent header
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_timeout(),
            read_timeout_secs: default_timeout(),
            redirect_limit: default_redirect_limit(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

fn default_redirect_limit() -> u32 {
    5
}

fn default_user_agent() -> String {
    format!("txtripper/{}", env!("CARGO_PKG_VERSION"))
}
