//! HTTP client construction
//!
//! Builds the reqwest client used for every robots.txt request. Redirects
//! are handled manually by the fetcher so the client's own policy is `none`.

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client configured for robots.txt recon fetches
///
/// The client sends a fixed identifying User-Agent, bounds both connection
/// establishment and response reads with the configured timeouts, and leaves
/// redirect handling to the fetcher's own bounded loop.
///
/// TLS certificate verification is intentionally disabled: recon targets
/// routinely serve invalid or self-signed certificates and this tool must
/// still retrieve their robots.txt. Do not change this to strict
/// verification without an explicit design change.
///
/// # Arguments
///
/// * `config` - The fetch configuration (timeouts, user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.read_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::none()) // Handle redirects manually
        .danger_accept_invalid_certs(true)
        .gzip(true)
        .brotli(true)
        .build()
}
