//! Route table and path resolution.

use crate::config::HOME_PATH;
use crate::core::outcome::RouteOutcome;
use crate::models::{CaughtRouteFailure, Page};
use crate::pages;

/// Pages served by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::About];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::About => "/about",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn page(self) -> Page {
        match self {
            Self::Home => pages::home(),
            Self::About => pages::about(),
        }
    }
}

/// Resolve a location into a route outcome. Unknown paths are 404s.
pub fn resolve(path: &str) -> RouteOutcome {
    match Route::from_path(path) {
        Some(route) => RouteOutcome::Success(route.page()),
        None => CaughtRouteFailure::not_found().into(),
    }
}

/// Canonical form of a path: query and fragment dropped, leading slash
/// ensured, trailing slashes removed (except for the root).
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Whether an href stays on this site and is routed client-side.
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("/about?tab=1#top"), "/about");
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/about/"), Some(Route::About));
        assert_eq!(Route::from_path("/about/whoa"), None);
    }

    #[test]
    fn test_resolve() {
        assert!(matches!(resolve("/about"), RouteOutcome::Success(page) if page.meta.title.as_deref() == Some("About tubone24")));
        assert_eq!(
            resolve("/missing"),
            RouteOutcome::from(CaughtRouteFailure::not_found())
        );
    }

    #[test]
    fn test_is_internal_href() {
        assert!(is_internal_href("/"));
        assert!(is_internal_href("/about"));
        assert!(!is_internal_href("//cdn.example.com/x.js"));
        assert!(!is_internal_href("https://blog.tubone-project24.xyz"));
    }
}
