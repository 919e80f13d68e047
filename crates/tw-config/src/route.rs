//! Route path helpers.
//!
//! Routes are site paths as the engine sees them, without the base path:
//! `/`, `/back-end/`, `/back-end/os/basic`.

/// Whether a target points outside the site.
#[must_use]
pub fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Whether a target is an absolute site path.
#[must_use]
pub fn is_site_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

/// Normalize a route for lookups.
///
/// Examples:
/// - `back-end/os` -> `/back-end/os`
/// - `/back-end/os.html` -> `/back-end/os`
/// - `/back-end/os.md#memory` -> `/back-end/os`
#[must_use]
pub fn normalize_route(route: &str) -> String {
    let route = route.split(['#', '?']).next().unwrap_or_default();
    let route = route
        .strip_suffix(".html")
        .or_else(|| route.strip_suffix(".md"))
        .unwrap_or(route);
    if route.starts_with('/') {
        route.to_owned()
    } else {
        format!("/{route}")
    }
}

/// Remove the base path from a request path, if it carries one.
///
/// `/TimegeekerWiki/back-end/os` with base `/TimegeekerWiki/` becomes
/// `/back-end/os`. Paths outside the base are returned unchanged.
#[must_use]
pub fn strip_base<'a>(route: &'a str, base_path: &str) -> &'a str {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        return route;
    }
    match route.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => route,
    }
}

/// Prefix an asset or page path with the base path.
///
/// External URLs are returned unchanged.
#[must_use]
pub fn join_base(base_path: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_owned();
    }
    let base = base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Directory root a landing link stands for.
///
/// `/back-end/java/`, `/back-end/java` and `/back-end/java/index` all stand
/// for `/back-end/java`; `/` stands for the empty root.
pub(crate) fn section_root(link: &str) -> String {
    let link = normalize_route(link);
    let link = link.strip_suffix("/index").unwrap_or(&link);
    link.trim_end_matches('/').to_owned()
}

/// Whether `route` lies at or below the directory a landing link stands for.
pub(crate) fn covers(root_link: &str, route: &str) -> bool {
    let root = section_root(root_link);
    if root.is_empty() {
        return true;
    }
    route == root
        || route
            .strip_prefix(root.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/vuejs/vitepress"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("/back-end/"));
        assert!(!is_external("ftp://example.com"));
    }

    #[test]
    fn test_is_site_path() {
        assert!(is_site_path("/"));
        assert!(is_site_path("/back-end/index"));
        assert!(!is_site_path("back-end"));
        assert!(!is_site_path("//cdn.example.com/x.js"));
    }

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("back-end/os"), "/back-end/os");
        assert_eq!(normalize_route("/back-end/os.html"), "/back-end/os");
        assert_eq!(normalize_route("/back-end/os.md#memory"), "/back-end/os");
        assert_eq!(normalize_route("/back-end/?tab=1"), "/back-end/");
        assert_eq!(normalize_route(""), "/");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(
            strip_base("/TimegeekerWiki/back-end/os", "/TimegeekerWiki/"),
            "/back-end/os"
        );
        assert_eq!(strip_base("/TimegeekerWiki/", "/TimegeekerWiki/"), "/");
        assert_eq!(strip_base("/TimegeekerWiki", "/TimegeekerWiki/"), "/");
        assert_eq!(
            strip_base("/TimegeekerWikiX/page", "/TimegeekerWiki/"),
            "/TimegeekerWikiX/page"
        );
        assert_eq!(strip_base("/back-end/", ""), "/back-end/");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(
            join_base("/TimegeekerWiki/", "/favicon.ico"),
            "/TimegeekerWiki/favicon.ico"
        );
        assert_eq!(join_base("", "/favicon.ico"), "/favicon.ico");
        assert_eq!(join_base("", "favicon.ico"), "/favicon.ico");
        assert_eq!(
            join_base("/wiki/", "https://cdn.example.com/icon.png"),
            "https://cdn.example.com/icon.png"
        );
    }

    #[test]
    fn test_covers() {
        assert!(covers("/back-end/java/", "/back-end/java/basic/Generics"));
        assert!(covers("/back-end/java/", "/back-end/java"));
        assert!(covers("/back-end/java/index", "/back-end/java/"));
        assert!(!covers("/back-end/java/", "/back-end/javascript/intro"));
        assert!(!covers("/back-end/java/", "/back-end/os/basic"));
        assert!(covers("/", "/anything"));
    }
}
