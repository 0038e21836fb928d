/// Normalizes raw user input into a bare host for fetch attempts
///
/// Strips a literal leading `http://` or `https://` (case-sensitive match on
/// the scheme prefixes) and then takes everything before the first `/` of
/// what remains. No host syntax validation happens here; garbage input
/// surfaces later as an invalid-URL or transport outcome from the fetcher.
///
/// This function is pure and total: worst case it returns the input
/// unchanged.
///
/// # Arguments
///
/// * `input` - A domain or URL string as typed by the operator
///
/// # Returns
///
/// The bare host portion of the input
///
/// # Examples
///
/// ```
/// use txtripper::url::normalize_host;
///
/// assert_eq!(normalize_host("https://example.com/path"), "example.com");
/// assert_eq!(normalize_host("example.com"), "example.com");
/// ```
pub fn normalize_host(input: &str) -> String {
    let remainder = input
        .strip_prefix("http://")
        .or_else(|| input.strip_prefix("https://"))
        .unwrap_or(input);

    match remainder.find('/') {
        Some(idx) => remainder[..idx].to_string(),
        None => remainder.to_string(),
    }
}
