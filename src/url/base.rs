use url::Url;

/// Base URL against which bruteforce target paths are rendered
///
/// A base URL is just `scheme://host` with a port appended only when it is
/// nonstandard for the scheme. It is derived from the final URL of a
/// successful robots.txt fetch when one exists, and otherwise defaults to
/// HTTPS on the normalized host.
///
/// The root path renders as the base itself: joining `/` onto
/// `https://example.com` yields exactly `https://example.com`, with no
/// trailing slash. This is the canonical root form used everywhere in this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Derives a base URL from the final URL of a successful fetch
    ///
    /// Keeps the scheme, host, and any nonstandard port; the path and query
    /// of the final URL are discarded.
    ///
    /// # Arguments
    ///
    /// * `url` - The final URL the fetcher landed on (after redirects)
    ///
    /// # Returns
    ///
    /// * `Some(BaseUrl)` - Base URL derived from the final URL
    /// * `None` - If the URL has no host
    pub fn from_final_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        // Url::port() is None when the port is the scheme default
        let base = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Some(Self(base))
    }

    /// Builds the default base URL for a normalized host
    ///
    /// Used when no successful fetch has recorded a final URL for the domain.
    pub fn from_host(host: &str) -> Self {
        Self(format!("https://{}", host))
    }

    /// Joins a `/`-prefixed path onto the base
    ///
    /// The root path `/` maps to the base itself (canonical root form, no
    /// trailing slash); every other path is appended verbatim.
    pub fn join(&self, path: &str) -> String {
        if path == "/" {
            return self.0.clone();
        }
        format!("{}{}", self.0, path)
    }

    /// Returns the base URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
