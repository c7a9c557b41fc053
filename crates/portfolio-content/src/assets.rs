//! Asset URL helpers

/// Turn a backend-supplied asset path into something an `<img>` can load.
///
/// Absolute `http(s)` URLs pass through; anything else is treated as a path on
/// the page's own origin.
pub fn resolve_asset_url(path: &str, origin: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_untouched() {
        assert_eq!(
            resolve_asset_url("https://cdn.example/logo.png", "http://localhost:5173"),
            "https://cdn.example/logo.png"
        );
    }

    #[test]
    fn test_relative_path_gets_origin() {
        assert_eq!(
            resolve_asset_url("/logos/acme.png", "http://localhost:5173/"),
            "http://localhost:5173/logos/acme.png"
        );
        assert_eq!(
            resolve_asset_url("logos/acme.png", "http://localhost:5173"),
            "http://localhost:5173/logos/acme.png"
        );
    }
}
