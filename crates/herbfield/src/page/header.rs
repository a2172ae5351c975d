//! Navigation highlighting and header scroll state.

/// Indices of the navigation links that belong to `page`.
///
/// A link matches when its `href` contains the page name, so `herbs`
/// highlights both `herbs.html` and `/herbs/`. An empty page name falls back
/// to `default_page`.
pub fn active_links<S: AsRef<str>>(page: &str, default_page: &str, hrefs: &[S]) -> Vec<usize> {
    let page = if page.is_empty() { default_page } else { page };
    hrefs
        .iter()
        .enumerate()
        .filter(|(_, href)| href.as_ref().contains(page))
        .map(|(i, _)| i)
        .collect()
}

/// Whether the header should carry its `scrolled` style.
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
