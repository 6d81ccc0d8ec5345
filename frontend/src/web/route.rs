//! Route table
//!
//! Pure path <-> view mapping, no DOM access.

use std::fmt::Display;

/// Views the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Vehicles (default view)
    #[default]
    Coches,
    Choferes,
    Recaudaciones,
    NotFound,
}

/// One registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub route: AppRoute,
}

/// Registered routes, in navigation order.
pub static ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        path: "/coches",
        name: "coches",
        title: "Coches",
        route: AppRoute::Coches,
    },
    RouteEntry {
        path: "/choferes",
        name: "choferes",
        title: "Choferes",
        route: AppRoute::Choferes,
    },
    RouteEntry {
        path: "/recaudaciones",
        name: "recaudaciones",
        title: "Recaudaciones",
        route: AppRoute::Recaudaciones,
    },
];

/// Paths that redirect to another route instead of rendering.
const REDIRECTS: [(&str, AppRoute); 1] = [("/", AppRoute::Coches)];

impl AppRoute {
    /// Parses a URL path. A single trailing `/` and ASCII case are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = normalize(path);
        if let Some(target) = Self::redirect_target(path) {
            return target;
        }
        ROUTES
            .iter()
            .find(|entry| entry.path.eq_ignore_ascii_case(path))
            .map(|entry| entry.route)
            .unwrap_or(Self::NotFound)
    }

    /// Where `path` redirects to, if it is a redirect.
    pub fn redirect_target(path: &str) -> Option<Self> {
        let path = normalize(path);
        REDIRECTS
            .iter()
            .find(|(from, _)| *from == path)
            .map(|(_, to)| *to)
    }

    /// Canonical path of the route. `NotFound` has none.
    pub fn to_path(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.path)
    }

    pub fn entry(&self) -> Option<&'static RouteEntry> {
        ROUTES.iter().find(|entry| entry.route == *self)
    }

    pub fn title(&self) -> &'static str {
        self.entry()
            .map(|entry| entry.title)
            .unwrap_or("Página no encontrada")
    }
}

/// Drops the query/fragment and one trailing `/` (except on the root).
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path().unwrap_or("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_coches() {
        assert_eq!(AppRoute::redirect_target("/"), Some(AppRoute::Coches));
        assert_eq!(AppRoute::from_path("/"), AppRoute::from_path("/coches"));
        assert_eq!(AppRoute::from_path(""), AppRoute::Coches);
    }

    #[test]
    fn test_registered_paths() {
        assert_eq!(AppRoute::from_path("/coches"), AppRoute::Coches);
        assert_eq!(AppRoute::from_path("/choferes"), AppRoute::Choferes);
        assert_eq!(AppRoute::from_path("/recaudaciones"), AppRoute::Recaudaciones);
    }

    #[test]
    fn test_non_strict_matching() {
        assert_eq!(AppRoute::from_path("/choferes/"), AppRoute::Choferes);
        assert_eq!(AppRoute::from_path("/Coches"), AppRoute::Coches);
        assert_eq!(AppRoute::from_path("/recaudaciones?page=2"), AppRoute::Recaudaciones);
        assert_eq!(AppRoute::redirect_target("/coches"), None);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/coches/12"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
        assert_eq!(AppRoute::NotFound.to_path(), None);
    }

    #[test]
    fn test_paths_are_unique_and_round_trip() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
            assert_eq!(AppRoute::from_path(a.path), a.route);
            assert_eq!(a.route.to_path(), Some(a.path));
        }
    }
}
