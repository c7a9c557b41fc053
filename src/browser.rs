//! Browser Helpers

/// Open `url` in a new tab without giving it a handle back to this page
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(_) => log::debug!("Opened {}", url),
        Err(err) => log::error!("Failed to open {}: {:?}", url, err),
    }
}

/// `location.origin` of the current page, empty if unavailable
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
