//! TxtRipper: a robots.txt ripper for recon work
//!
//! This crate fetches a site's robots.txt over HTTPS with HTTP fallback,
//! follows redirects within a bound, extracts Disallow directives, and turns
//! each denied path into candidate base URLs for directory bruteforce tools.

pub mod config;
pub mod fetch;
pub mod robots;
pub mod targets;
pub mod url;

use thiserror::Error;

/// Main error type for TxtRipper operations
///
/// Per-domain fetch failures are *not* errors: they are modeled as
/// [`fetch::FetchOutcome`] values so that one unreachable host never aborts
/// processing of the rest of a domain list.
#[derive(Debug, Error)]
pub enum RipperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for TxtRipper operations
pub type Result<T> = std::result::Result<T, RipperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, FetchConfig};
pub use fetch::{FetchOutcome, FetchSession, RobotsFetcher, RobotsFile};
pub use robots::{extract_directives, DisallowDirective};
pub use targets::{generate_targets, BruteforceTarget};
pub use crate::url::{normalize_host, BaseUrl};
