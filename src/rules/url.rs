// src/rules/url.rs
// =============================================================================
// Absolute/relative classification and resolution against the base site URL.
//
// Resolution is plain string concatenation. No slash fixing, no encoding,
// no query handling: `https://ex.com/` + `/new` gives `https://ex.com//new`.
// Callers supply a base URL and paths that fit together.
// =============================================================================

/// Returns true if `url` starts with an HTTP or HTTPS scheme prefix.
pub fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Returns `path` unchanged when absolute, otherwise `base_url` followed by `path`.
pub fn resolve(path: &str, base_url: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
