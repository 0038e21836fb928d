//! Robots.txt fetcher
//!
//! This module implements the bounded, redirect-following retrieval loop:
//! - HTTPS first, plain HTTP only if HTTPS produced no usable document
//! - manual redirect following with relative Location resolution
//! - a redirect-count bound per scheme attempt
//! - classification of every terminal outcome
//!
//! The first 2xx response wins and short-circuits the remaining candidates.

use crate::config::FetchConfig;
use crate::fetch::client::build_http_client;
use crate::fetch::outcome::{
    AttemptOutcome, FetchFailure, FetchOutcome, RobotsFile, Scheme, SchemeAttempt, TransportKind,
};
use crate::url::normalize_host;
use reqwest::Client;
use url::Url;

/// States of a single scheme's retrieval attempt
///
/// The attempt starts in `Requesting` at the scheme's base URL, loops back
/// into `Requesting` once per followed redirect, and ends in `Terminal`.
enum AttemptState {
    /// About to issue a GET against `url`, having already followed
    /// `redirects` redirect hops
    Requesting { url: String, redirects: u32 },
    /// Attempt finished with a terminal outcome
    Terminal(AttemptOutcome),
}

/// Fetches robots.txt for a host with scheme fallback and bounded redirects
#[derive(Debug, Clone)]
pub struct RobotsFetcher {
    client: Client,
    redirect_limit: u32,
}

impl RobotsFetcher {
    /// Creates a fetcher from the fetch configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Timeouts, redirect limit, and user-agent token
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsFetcher)` - Ready-to-use fetcher
    /// * `Err(RipperError)` - HTTP client construction failed
    pub fn new(config: &FetchConfig) -> crate::Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            redirect_limit: config.redirect_limit,
        })
    }

    /// Fetches robots.txt for the given domain or URL input
    ///
    /// The input is normalized to a bare host, then
    /// `https://<host>/robots.txt` and `http://<host>/robots.txt` are tried
    /// in that order. The first 2xx terminates the whole call; the second
    /// scheme is attempted only when the first reached a terminal
    /// non-success outcome.
    ///
    /// # Arguments
    ///
    /// * `input` - A domain or URL string as typed by the operator
    ///
    /// # Returns
    ///
    /// The overall [`FetchOutcome`]; when both schemes fail, the failure
    /// carries the original un-normalized input plus every attempt's
    /// terminal outcome.
    pub async fn fetch(&self, input: &str) -> FetchOutcome {
        let host = normalize_host(input);
        let candidates = [
            (Scheme::Https, format!("https://{}/robots.txt", host)),
            (Scheme::Http, format!("http://{}/robots.txt", host)),
        ];
        self.fetch_candidates(input, &candidates).await
    }

    /// Fetches robots.txt from an explicit list of candidate start URLs
    ///
    /// This is the same candidate loop [`fetch`](Self::fetch) runs after
    /// building the two scheme URLs; taking the candidates directly lets
    /// tests drive both "schemes" at mock servers.
    pub async fn fetch_candidates(
        &self,
        input: &str,
        candidates: &[(Scheme, String)],
    ) -> FetchOutcome {
        let mut attempts = Vec::with_capacity(candidates.len());

        for (scheme, start_url) in candidates {
            tracing::debug!("attempting to fetch from: {}", start_url);

            match self.try_candidate(start_url).await {
                AttemptOutcome::Success { body, final_url } => {
                    tracing::info!("fetched robots.txt from final URL: {}", final_url);
                    return FetchOutcome::Fetched(RobotsFile { body, final_url });
                }
                outcome => {
                    tracing::debug!("{} attempt failed: {}", scheme, outcome);
                    attempts.push(SchemeAttempt {
                        scheme: *scheme,
                        start_url: start_url.clone(),
                        outcome,
                    });
                }
            }
        }

        FetchOutcome::CouldNotFetch(FetchFailure {
            input: input.to_string(),
            attempts,
        })
    }

    /// Runs the bounded redirect loop for one candidate start URL
    async fn try_candidate(&self, start_url: &str) -> AttemptOutcome {
        let mut state = AttemptState::Requesting {
            url: start_url.to_string(),
            redirects: 0,
        };

        loop {
            state = match state {
                AttemptState::Terminal(outcome) => return outcome,
                AttemptState::Requesting { url, redirects } => {
                    if redirects >= self.redirect_limit {
                        AttemptState::Terminal(AttemptOutcome::RedirectLimitExceeded)
                    } else {
                        self.request(&url, redirects).await
                    }
                }
            };
        }
    }

    /// Issues one GET and classifies the response into the next state
    async fn request(&self, url: &str, redirects: u32) -> AttemptState {
        // Re-parse each hop: a Location header can produce any shape of URL
        let current = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => return AttemptState::Terminal(AttemptOutcome::InvalidUrl(e.to_string())),
        };
        if current.host_str().is_none() {
            return AttemptState::Terminal(AttemptOutcome::InvalidUrl(format!(
                "no host in '{}'",
                current
            )));
        }

        let response = match self.client.get(current.clone()).send().await {
            Ok(response) => response,
            Err(e) => return AttemptState::Terminal(classify_transport(&e)),
        };

        let status = response.status();
        tracing::debug!("{} -> status {}", current, status.as_u16());

        if status.is_success() {
            return match response.text().await {
                Ok(body) => AttemptState::Terminal(AttemptOutcome::Success {
                    body,
                    final_url: current,
                }),
                Err(e) => AttemptState::Terminal(classify_transport(&e)),
            };
        }

        if status.is_redirection() {
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            return match location {
                Some(location) => {
                    // Resolve relative references against the current URL
                    match current.join(&location) {
                        Ok(next) => {
                            tracing::debug!("redirected to: {}", next);
                            AttemptState::Requesting {
                                url: next.to_string(),
                                redirects: redirects + 1,
                            }
                        }
                        Err(e) => AttemptState::Terminal(AttemptOutcome::InvalidUrl(format!(
                            "bad Location '{}': {}",
                            location, e
                        ))),
                    }
                }
                // A redirect with nowhere to go is an HTTP-level failure
                None => AttemptState::Terminal(AttemptOutcome::HttpError(status.as_u16())),
            };
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return AttemptState::Terminal(AttemptOutcome::NotFound);
        }

        AttemptState::Terminal(AttemptOutcome::HttpError(status.as_u16()))
    }
}

/// Classifies a reqwest error into a transport outcome
fn classify_transport(e: &reqwest::Error) -> AttemptOutcome {
    let message = e.to_string();
    let kind = if e.is_timeout() {
        TransportKind::Timeout
    } else if is_tls_message(&message) {
        TransportKind::Tls
    } else if e.is_connect() {
        TransportKind::Connect
    } else {
        TransportKind::Other
    };
    AttemptOutcome::Transport { kind, message }
}

/// Best-effort TLS detection: reqwest does not expose a TLS error kind
fn is_tls_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate")
}
