//! Bruteforce target generation
//!
//! This module turns extracted Disallow directives into concrete base URLs
//! for directory-discovery tooling.

mod rules;

pub use rules::{classify, parent_dir};

use crate::robots::DisallowDirective;
use crate::url::BaseUrl;

/// A candidate base URL for directory bruteforcing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteforceTarget {
    /// Fully rendered target URL
    pub url: String,
    /// Raw text of the directive this target was derived from
    pub directive: String,
}

/// Generates bruteforce targets for one Disallow directive
///
/// The directive's path is classified by the ordered rules in
/// [`rules::classify`] and each resulting relative root is joined onto the
/// base URL. Output order follows rule order; duplicate URLs within the call
/// are dropped. An empty path yields no targets. A path without a leading
/// `/` is given one before classification.
///
/// # Arguments
///
/// * `directive` - The extracted Disallow directive
/// * `base` - Base URL to render targets against
///
/// # Returns
///
/// Zero or more deduplicated targets, in rule order.
///
/// # Examples
///
/// ```
/// use txtripper::robots::DisallowDirective;
/// use txtripper::targets::generate_targets;
/// use txtripper::url::BaseUrl;
///
/// let directive = DisallowDirective {
///     raw: "Disallow: /api/*".to_string(),
///     path: "/api/*".to_string(),
/// };
/// let targets = generate_targets(&directive, &BaseUrl::from_host("h"));
/// assert_eq!(targets[0].url, "https://h/api");
/// ```
pub fn generate_targets(directive: &DisallowDirective, base: &BaseUrl) -> Vec<BruteforceTarget> {
    let path = directive.path.trim();
    if path.is_empty() {
        return Vec::new();
    }

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let mut targets: Vec<BruteforceTarget> = Vec::new();
    for root in rules::classify(&path) {
        let url = base.join(&root);
        if targets.iter().any(|t| t.url == url) {
            continue;
        }
        targets.push(BruteforceTarget {
            url,
            directive: directive.raw.clone(),
        });
    }
    targets
}
