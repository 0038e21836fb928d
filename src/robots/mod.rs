//! Robots.txt directive handling
//!
//! This module extracts Disallow directives from fetched robots.txt text.
//! It deliberately does not *obey* the rules the way a polite crawler would:
//! the directives are the recon output, not a crawl policy.

mod extractor;

pub use extractor::{extract_directives, DisallowDirective};
