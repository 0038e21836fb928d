/// One matched Disallow line from a robots.txt body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisallowDirective {
    /// The original line, untouched
    pub raw: String,
    /// Text after the first colon, trimmed
    pub path: String,
}

/// Extracts Disallow directives from robots.txt text
///
/// A line matches if, after stripping leading whitespace, it begins with the
/// literal token `disallow` in any letter case, followed by optional
/// whitespace and a colon. Matching is purely positional: a commented-out
/// line like `# Disallow: /x` does NOT match, because `#` is not whitespace
/// and the matcher only inspects the trimmed line's start. This is
/// intentional; comment handling is not part of this extractor.
///
/// Original line order is preserved and duplicates are kept.
///
/// # Arguments
///
/// * `body` - Raw robots.txt text
///
/// # Returns
///
/// All matched directives, in order; empty when nothing matches.
///
/// # Examples
///
/// ```
/// use txtripper::robots::extract_directives;
///
/// let directives = extract_directives("User-agent: *\nDisallow: /admin\n");
/// assert_eq!(directives.len(), 1);
/// assert_eq!(directives[0].path, "/admin");
/// ```
pub fn extract_directives(body: &str) -> Vec<DisallowDirective> {
    body.lines()
        .filter(|line| is_disallow_line(line))
        .map(|line| DisallowDirective {
            raw: line.to_string(),
            path: path_of(line),
        })
        .collect()
}

/// Checks whether a trimmed line has the shape `disallow [ws] :`
fn is_disallow_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    let token_len = "disallow".len();

    // get() refuses a split inside a multi-byte character, so arbitrary
    // UTF-8 bodies cannot panic here; a non-boundary at token_len cannot
    // be the ASCII token anyway.
    match trimmed.get(..token_len) {
        Some(token) if token.eq_ignore_ascii_case("disallow") => {
            trimmed[token_len..].trim_start().starts_with(':')
        }
        _ => false,
    }
}

/// Extracts the path component: text after the first colon, trimmed
fn path_of(line: &str) -> String {
    line.split_once(':')
        .map(|(_, after)| after.trim().to_string())
        .unwrap_or_default()
}
