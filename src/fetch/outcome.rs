//! Fetch outcome model
//!
//! Every terminal result of a robots.txt retrieval is a value of one of
//! these types. Outcomes are immutable once produced and cheap to clone so
//! that the session cache can replay them without re-fetching.

use url::Url;

/// URL scheme tried during a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    /// Returns the scheme as it appears in a URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a transport-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or read timed out
    Timeout,
    /// Connection could not be established (DNS failure, refused, ...)
    Connect,
    /// TLS handshake or certificate failure
    Tls,
    /// Anything else the HTTP client reported
    Other,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connection",
            Self::Tls => "TLS",
            Self::Other => "transport",
        };
        write!(f, "{}", label)
    }
}

/// Terminal result of a single scheme's fetch attempt
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    /// Got a 2xx response
    Success {
        /// Response body text
        body: String,
        /// URL the attempt landed on after redirects
        final_url: Url,
    },

    /// Explicit 404 at the final URL
    NotFound,

    /// Any other non-2xx/3xx status, or a 3xx without a Location header
    HttpError(u16),

    /// DNS/connect/timeout/TLS or other transport fault
    Transport {
        kind: TransportKind,
        message: String,
    },

    /// Redirect count reached the configured limit (possible loop)
    RedirectLimitExceeded,

    /// Current URL could not be parsed or has no host
    InvalidUrl(String),
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { final_url, .. } => write!(f, "success at {}", final_url),
            Self::NotFound => write!(f, "no robots.txt found (404 Not Found)"),
            Self::HttpError(status) => write!(f, "HTTP status {}", status),
            Self::Transport { kind, message } => write!(f, "{} error: {}", kind, message),
            Self::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            Self::InvalidUrl(message) => write!(f, "invalid URL: {}", message),
        }
    }
}

/// One scheme attempt and how it ended, kept for failure diagnostics
#[derive(Debug, Clone)]
pub struct SchemeAttempt {
    /// Scheme this attempt started on
    pub scheme: Scheme,
    /// URL the attempt started from
    pub start_url: String,
    /// How the attempt terminated
    pub outcome: AttemptOutcome,
}

/// A successfully fetched robots.txt document
#[derive(Debug, Clone)]
pub struct RobotsFile {
    /// Raw robots.txt body
    pub body: String,
    /// URL the body was actually served from (after redirects)
    pub final_url: Url,
}

/// Why no scheme produced a usable document
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// The original, un-normalized operator input
    pub input: String,
    /// Terminal outcome of each scheme attempt, in the order tried
    pub attempts: Vec<SchemeAttempt>,
}

impl FetchFailure {
    /// Returns true if every attempt ended in an explicit 404
    ///
    /// Distinguishes "the site says there is no robots.txt" from "the site
    /// could not be reached at all".
    pub fn is_not_found(&self) -> bool {
        !self.attempts.is_empty()
            && self
                .attempts
                .iter()
                .all(|a| matches!(a.outcome, AttemptOutcome::NotFound))
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_not_found() {
            writeln!(f, "No robots.txt found for '{}' (404 Not Found).", self.input)?;
        } else {
            writeln!(
                f,
                "Could not fetch robots.txt for '{}' after trying all schemes and redirects.",
                self.input
            )?;
        }
        for attempt in &self.attempts {
            writeln!(f, "  {} -> {}", attempt.start_url, attempt.outcome)?;
        }
        Ok(())
    }
}

/// Overall result of fetching robots.txt for one domain
///
/// Exactly one outcome is produced per domain per invocation; it is never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// A scheme produced a 2xx document
    Fetched(RobotsFile),
    /// Every scheme terminated without a usable document
    CouldNotFetch(FetchFailure),
}

impl FetchOutcome {
    /// Returns the fetched document, if any
    pub fn robots_file(&self) -> Option<&RobotsFile> {
        match self {
            Self::Fetched(file) => Some(file),
            Self::CouldNotFetch(_) => None,
        }
    }
}
