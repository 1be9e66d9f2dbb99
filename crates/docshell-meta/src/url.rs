//! URL joining for canonical and image URLs.

/// Join a base URL and a path with exactly one `/` between them.
///
/// Slashes at the seam are collapsed regardless of which side carries them.
/// An empty path yields the base without its trailing slash, and a path that
/// is already an absolute URL is returned unchanged.
///
/// ```
/// use docshell_meta::url_join;
///
/// assert_eq!(url_join("https://x.io/", "/guide"), "https://x.io/guide");
/// assert_eq!(url_join("https://x.io", "guide"), "https://x.io/guide");
/// assert_eq!(url_join("https://x.io/", ""), "https://x.io");
/// ```
#[must_use]
pub fn url_join(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_owned();
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    match (base.is_empty(), path.is_empty()) {
        (_, true) => base.to_owned(),
        (true, false) => format!("/{path}"),
        (false, false) => format!("{base}/{path}"),
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
