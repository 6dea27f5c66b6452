//! Helpers shared by the sitemap and feed renderers.

/// Escape the five XML metacharacters. `&` is replaced first so entities
/// introduced by the later replacements are not escaped again.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Join a site-relative path onto the base URL.
///
/// `/` (or an empty path) gives the base with a trailing slash, a leading
/// slash is concatenated as is, anything else gets a separating slash.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');

    if path.is_empty() || path == "/" {
        format!("{}/", base)
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
