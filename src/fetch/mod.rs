//! Fetch module for robots.txt retrieval
//!
//! This module contains the core retrieval logic, including:
//! - HTTP client construction (identifying token, timeouts, lax TLS)
//! - the two-scheme, bounded-redirect fetch state machine
//! - outcome classification for every way a fetch can terminate
//! - per-run session state (single-slot result cache, last successful URL)

mod client;
mod fetcher;
mod outcome;
mod session;

pub use client::build_http_client;
pub use fetcher::RobotsFetcher;
pub use outcome::{
    AttemptOutcome, FetchFailure, FetchOutcome, RobotsFile, Scheme, SchemeAttempt, TransportKind,
};
pub use session::FetchSession;
