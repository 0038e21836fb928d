//! Fetch session state
//!
//! [`FetchSession`] owns everything that is mutable across domains in one
//! run: the single-slot result cache and the most recent successful final
//! URL. Keeping this state in an explicit struct (rather than process-wide
//! globals) makes repeated and isolated use safe to test; a concurrent
//! caller simply gives each in-flight domain its own session.

use crate::config::FetchConfig;
use crate::fetch::fetcher::RobotsFetcher;
use crate::fetch::outcome::FetchOutcome;
use crate::url::{normalize_host, BaseUrl};
use url::Url;

/// Memo of the most recently processed domain
///
/// At most one entry is alive at a time; processing a different domain
/// overwrites it. The stored outcome is only ever read, never mutated.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Normalized host the outcome belongs to
    domain: String,
    /// The outcome produced for that host
    outcome: FetchOutcome,
}

/// Per-run fetch state: fetcher, single-entry result cache, last success
#[derive(Debug)]
pub struct FetchSession {
    fetcher: RobotsFetcher,
    cache: Option<CacheEntry>,
    last_success: Option<Url>,
}

impl FetchSession {
    /// Creates a session from the fetch configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Timeouts, redirect limit, and user-agent token
    ///
    /// # Returns
    ///
    /// * `Ok(FetchSession)` - Ready-to-use session
    /// * `Err(RipperError)` - HTTP client construction failed
    pub fn new(config: &FetchConfig) -> crate::Result<Self> {
        Ok(Self {
            fetcher: RobotsFetcher::new(config)?,
            cache: None,
            last_success: None,
        })
    }

    /// Fetches robots.txt for the input, consulting the cache first
    ///
    /// Processing the same domain twice in a row replays the memoized
    /// outcome with no network round-trip; a different domain evicts the
    /// slot and fetches fresh. Failures are memoized too, so a dead host in
    /// a repeated list entry is not re-probed within the run.
    pub async fn fetch(&mut self, input: &str) -> FetchOutcome {
        let host = normalize_host(input);

        if let Some(entry) = &self.cache {
            if entry.domain == host {
                tracing::debug!("cache hit for {}", host);
                let outcome = entry.outcome.clone();
                self.record_success(&outcome);
                return outcome;
            }
        }

        let outcome = self.fetcher.fetch(input).await;
        self.record_success(&outcome);
        self.cache = Some(CacheEntry {
            domain: host,
            outcome: outcome.clone(),
        });
        outcome
    }

    /// Resolves the base URL for rendering bruteforce targets
    ///
    /// Prefers scheme, host, and nonstandard port of the last successful
    /// final URL; falls back to HTTPS on the normalized input host.
    pub fn base_url(&self, input: &str) -> BaseUrl {
        self.last_success
            .as_ref()
            .and_then(BaseUrl::from_final_url)
            .unwrap_or_else(|| BaseUrl::from_host(&normalize_host(input)))
    }

    fn record_success(&mut self, outcome: &FetchOutcome) {
        if let FetchOutcome::Fetched(file) = outcome {
            self.last_success = Some(file.final_url.clone());
        }
    }
}
