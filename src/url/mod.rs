//! URL handling module for TxtRipper
//!
//! This module provides host normalization of raw user input and base-URL
//! resolution for bruteforce target rendering.

mod base;
mod host;

// Re-export main functions
pub use base::BaseUrl;
pub use host::normalize_host;
