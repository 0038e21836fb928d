//! Path classification rules
//!
//! A Disallow path is mapped to zero or more bruteforce roots by an ordered
//! set of pattern rules, evaluated top to bottom with the first match
//! winning:
//!
//! 1. wildcard, path ends with `/*` — the directory before the wildcard is
//!    itself the bruteforce root
//! 2. wildcard, path ends with `*` — bruteforce the parent of the prefix
//!    before the final star
//! 3. wildcard mid-path — bruteforce the parent of the prefix before the
//!    first star, plus the prefix itself when the two differ
//! 4. no wildcard, file-like final segment or documentation endpoint —
//!    bruteforce the containing directory, not the literal file
//! 5. no wildcard otherwise — the path is already a directory root
//!
//! Disallow entries are the site operator's own map of interesting paths;
//! collapsing wildcard and file-like entries to their directory explores the
//! surrounding namespace instead of hammering one known file.

/// Extensions that mark a final segment as a file rather than a directory
const FILE_EXTENSIONS: &[&str] = &["html", "php", "asp", "jsp", "xml", "json", "txt", "pdf"];

/// Substrings that mark a path as a known documentation endpoint
const DOC_ENDPOINT_MARKERS: &[&str] = &["/complete", "/api-docs"];

/// Classifies a Disallow path into relative bruteforce root paths
///
/// The input must already carry a leading `/`. The returned paths are
/// relative (each starting with `/`, where `/` alone means the site root)
/// and may contain duplicates; the caller deduplicates after joining onto
/// the base URL.
pub fn classify(path: &str) -> Vec<String> {
    if let Some(stripped) = path.strip_suffix("/*") {
        // Rule 1: /dir/* — the directory itself
        return vec![root_or(stripped)];
    }

    if let Some(prefix) = path.strip_suffix('*') {
        // Rule 2: /foo* — parent of the text before the star
        return vec![parent_dir(prefix)];
    }

    if let Some(star) = path.find('*') {
        // Rule 3: mid-path wildcard
        let prefix = &path[..star];
        let parent = parent_dir(prefix);
        let mut roots = vec![parent.clone()];
        if prefix != parent {
            roots.push(prefix.to_string());
        }
        return roots;
    }

    if is_file_like(path) {
        // Rule 4: known file or documentation endpoint
        return vec![parent_dir(path)];
    }

    // Rule 5: plain directory path, unchanged
    vec![path.to_string()]
}

/// Returns the path with its final `/`-delimited segment removed
///
/// An empty result maps to the site root `/`.
pub fn parent_dir(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Checks whether the final segment looks like a file or doc endpoint
fn is_file_like(path: &str) -> bool {
    if DOC_ENDPOINT_MARKERS.iter().any(|m| path.contains(m)) {
        return true;
    }

    let last_segment = path.rsplit('/').next().unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((_, ext)) => FILE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Maps an empty remainder (from a stripped `/*`) to the site root
fn root_or(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
