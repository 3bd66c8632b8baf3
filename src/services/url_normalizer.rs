//! URL scheme normalization for web app shortcuts.
//!
//! Applied when a saved URL is shown for editing and before it is handed to the browser
//! surface. It is never applied on the storage path.

use url::Url;

use crate::types::errors::BrowserError;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Upgrades `http://` to `https://` and prepends `https://` to anything else that does not
/// already start with it. Empty input is returned unchanged.
///
/// ```
/// use smartweb::services::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("http://x.com"), "https://x.com");
/// assert_eq!(normalize_url("x.com"), "https://x.com");
/// assert_eq!(normalize_url("https://x.com"), "https://x.com");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() || has_prefix_ignore_case(url, HTTPS_PREFIX) {
        return url.to_string();
    }
    if has_prefix_ignore_case(url, HTTP_PREFIX) {
        return format!("{}{}", HTTPS_PREFIX, &url[HTTP_PREFIX.len()..]);
    }
    format!("{}{}", HTTPS_PREFIX, url)
}

/// Normalizes `raw` and parses it into a URL the browser surface can load.
pub fn to_loadable_url(raw: &str) -> Result<Url, BrowserError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BrowserError::InvalidUrl(raw.to_string()));
    }
    let normalized = normalize_url(trimmed);
    let parsed = Url::parse(&normalized).map_err(|_| BrowserError::InvalidUrl(raw.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(BrowserError::InvalidUrl(raw.to_string()));
    }
    Ok(parsed)
}
