//! Configuration module for TxtRipper
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings are optional; [`Config::default`] matches the behavior
//! of running with no config file at all.
//!
//! # Example
//!
//! ```no_run
//! use txtripper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("txtripper.toml")).unwrap();
//! println!("Redirect limit: {}", config.fetch.redirect_limit);
//! ```

mod parser;
mod types;

// Re-export types
pub use types::{Config, FetchConfig};

// Re-export parser functions
pub use parser::{load_config, validate};
