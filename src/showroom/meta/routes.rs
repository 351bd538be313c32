use crate::error::{Result, ShowroomError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
}

/// How a route entry recognises a path.
///
/// A prefix is a plain string prefix test, so `/admin` also matches
/// `/admin/login` and `/administration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatcher {
    #[serde(rename = "match")]
    pub kind: MatchKind,
    pub path: String,
}

impl RouteMatcher {
    pub fn exact(path: impl Into<String>) -> Self {
        Self {
            kind: MatchKind::Exact,
            path: path.into(),
        }
    }

    pub fn prefix(path: impl Into<String>) -> Self {
        Self {
            kind: MatchKind::Prefix,
            path: path.into(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self.kind {
            MatchKind::Exact => path == self.path,
            MatchKind::Prefix => path.starts_with(self.path.as_str()),
        }
    }

    /// True when every path matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &RouteMatcher) -> bool {
        match (self.kind, other.kind) {
            (MatchKind::Exact, MatchKind::Exact) => self.path == other.path,
            (MatchKind::Exact, MatchKind::Prefix) => false,
            (MatchKind::Prefix, _) => other.path.starts_with(self.path.as_str()),
        }
    }
}

impl fmt::Display for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Exact => write!(f, "={}", self.path),
            MatchKind::Prefix => write!(f, "{}*", self.path),
        }
    }
}

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

impl fmt::Display for OgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SEO fields for one page or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub content_type: OgType,
    #[serde(default = "default_indexable")]
    pub indexable: bool,
    /// Site-relative path or absolute URL.
    pub image: String,
}

fn default_indexable() -> bool {
    true
}

impl MetaRecord {
    fn new(title: &str, description: &str, content_type: OgType, indexable: bool) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            content_type,
            indexable,
            image: "/logo.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(flatten)]
    pub matcher: RouteMatcher,
    #[serde(flatten)]
    pub meta: MetaRecord,
}

/// Ordered route-to-metadata table with a fallback record.
///
/// Lookup is first-match in declaration order, so a broad prefix placed
/// before a narrower route would swallow it. [`RouteTable::validate`] rejects
/// such tables instead of leaving the outcome to declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub routes: Vec<Route>,
    pub fallback: MetaRecord,
}

impl RouteTable {
    pub fn resolve(&self, path: &str) -> &MetaRecord {
        match self.routes.iter().find(|route| route.matcher.matches(path)) {
            Some(route) => {
                debug!(path, matcher = %route.matcher, "route matched");
                &route.meta
            }
            None => {
                debug!(path, "no route matched, using fallback");
                &self.fallback
            }
        }
    }

    /// Fails on the first route that can never match because an earlier
    /// route already covers every path it would.
    pub fn validate(&self) -> Result<()> {
        for (i, later) in self.routes.iter().enumerate() {
            if let Some(earlier) = self.routes[..i]
                .iter()
                .find(|earlier| earlier.matcher.covers(&later.matcher))
            {
                warn!(earlier = %earlier.matcher, later = %later.matcher, "shadowed route");
                return Err(ShowroomError::ShadowedRoute {
                    earlier: earlier.matcher.to_string(),
                    later: later.matcher.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        let route = |matcher: RouteMatcher, meta: MetaRecord| Route { matcher, meta };
        Self {
            routes: vec![
                route(
                    RouteMatcher::exact("/"),
                    MetaRecord::new(
                        "Danvion Ltd. | Home",
                        "Danvion Ltd. builds intelligent products with hardware design, firmware, and edge AI engineering.",
                        OgType::Website,
                        true,
                    ),
                ),
                route(
                    RouteMatcher::prefix("/products"),
                    MetaRecord::new(
                        "Danvion Ltd. | Products",
                        "Explore Danvion products and engineering capabilities across embedded systems and edge AI.",
                        OgType::Website,
                        true,
                    ),
                ),
                route(
                    RouteMatcher::prefix("/blogs"),
                    MetaRecord::new(
                        "Danvion Ltd. | Blogs",
                        "Read Danvion insights on hardware, firmware, product engineering, and AI deployment.",
                        OgType::Article,
                        true,
                    ),
                ),
                // Before the /admin catch-all
                route(
                    RouteMatcher::prefix("/admin/login"),
                    MetaRecord::new(
                        "Danvion Ltd. | Admin Login",
                        "Secure login for Danvion admin dashboard.",
                        OgType::Website,
                        false,
                    ),
                ),
                route(
                    RouteMatcher::prefix("/admin"),
                    MetaRecord::new(
                        "Danvion Ltd. | Admin Dashboard",
                        "Content management dashboard for Danvion website administrators.",
                        OgType::Website,
                        false,
                    ),
                ),
            ],
            fallback: MetaRecord::new(
                "Danvion Ltd.",
                "Danvion Ltd. delivers hardware design, embedded systems, and edge AI engineering solutions.",
                OgType::Website,
                true,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> MetaRecord {
        MetaRecord::new(title, "d", OgType::Website, true)
    }

    #[test]
    fn default_table_is_valid() {
        RouteTable::default().validate().unwrap();
    }

    #[test]
    fn section_prefix_wins_over_fallback() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/products/42").title, "Danvion Ltd. | Products");
        assert_eq!(table.resolve("/blogs").content_type, OgType::Article);
        assert_eq!(table.resolve("/").title, "Danvion Ltd. | Home");
        assert_eq!(table.resolve("/contact").title, "Danvion Ltd.");
    }

    #[test]
    fn specific_admin_route_is_declared_first() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/admin/login").title, "Danvion Ltd. | Admin Login");
        assert_eq!(table.resolve("/admin/posts").title, "Danvion Ltd. | Admin Dashboard");
        assert!(!table.resolve("/admin").indexable);
    }

    #[test]
    fn first_match_wins_in_declared_order() {
        let table = RouteTable {
            routes: vec![
                Route {
                    matcher: RouteMatcher::prefix("/products"),
                    meta: record("Site | Products"),
                },
                Route {
                    matcher: RouteMatcher::prefix("/"),
                    meta: record("Site | Anything"),
                },
            ],
            fallback: record("Site"),
        };
        assert_eq!(table.resolve("/products/42").title, "Site | Products");
        assert_eq!(table.resolve("/about").title, "Site | Anything");
        table.validate().unwrap();
    }

    #[test]
    fn catch_all_before_specific_route_is_rejected() {
        let table = RouteTable {
            routes: vec![
                Route {
                    matcher: RouteMatcher::prefix("/admin"),
                    meta: record("Dashboard"),
                },
                Route {
                    matcher: RouteMatcher::prefix("/admin/login"),
                    meta: record("Login"),
                },
            ],
            fallback: record("Site"),
        };
        // Lookup still follows declaration order...
        assert_eq!(table.resolve("/admin/login").title, "Dashboard");
        // ...which validation reports.
        match table.validate() {
            Err(ShowroomError::ShadowedRoute { earlier, later }) => {
                assert_eq!(earlier, "/admin*");
                assert_eq!(later, "/admin/login*");
            }
            other => panic!("expected shadowed route, got {:?}", other),
        }
    }

    #[test]
    fn exact_routes_only_shadow_duplicates() {
        let exact = RouteMatcher::exact("/");
        assert!(!exact.covers(&RouteMatcher::prefix("/")));
        assert!(exact.covers(&RouteMatcher::exact("/")));
        assert!(RouteMatcher::prefix("/").covers(&exact));
    }

    #[test]
    fn table_round_trips_through_json_shape() {
        let json = r#"{
            "routes": [
                {"match": "exact", "path": "/", "title": "Home", "description": "d", "image": "/i.png"}
            ],
            "fallback": {"title": "Site", "description": "d", "type": "article", "indexable": false, "image": "https://cdn.example.com/i.png"}
        }"#;
        let table: RouteTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.routes[0].matcher, RouteMatcher::exact("/"));
        assert!(table.routes[0].meta.indexable);
        assert_eq!(table.routes[0].meta.content_type, OgType::Website);
        assert_eq!(table.fallback.content_type, OgType::Article);
        assert!(!table.fallback.indexable);
    }
}
