use super::head::{HeadWriter, Selector};
use super::routes::{OgType, RouteTable};
use crate::nav::Location;
use tracing::{debug, info};

const TWITTER_CARD: &str = "summary_large_image";

/// Metadata for one location, with every URL made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub content_type: OgType,
    pub robots: &'static str,
    pub site_name: String,
    /// Origin + path, query stripped.
    pub canonical_url: String,
    /// Canonical URL + query string.
    pub page_url: String,
    pub image_url: String,
}

impl ResolvedMeta {
    pub fn resolve(table: &RouteTable, origin: &str, site_name: &str, location: &Location) -> Self {
        let record = table.resolve(location.path());
        let origin = origin.trim_end_matches('/');
        let canonical_url = format!("{}{}", origin, location.path());
        let page_url = format!("{}{}", canonical_url, location.search());

        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            content_type: record.content_type,
            robots: if record.indexable {
                "index,follow"
            } else {
                "noindex,nofollow"
            },
            site_name: site_name.to_string(),
            canonical_url,
            page_url,
            image_url: absolute_url(origin, &record.image),
        }
    }

    /// Writes every field into `head`. Safe to repeat: each tag is located by
    /// its selector and replaced.
    pub fn apply<H: HeadWriter + ?Sized>(&self, head: &mut H) {
        head.set_title(&self.title);

        head.upsert(Selector::meta_name("description"), &self.description);
        head.upsert(Selector::meta_name("robots"), self.robots);

        head.upsert(Selector::meta_property("og:title"), &self.title);
        head.upsert(Selector::meta_property("og:description"), &self.description);
        head.upsert(Selector::meta_property("og:type"), self.content_type.as_str());
        head.upsert(Selector::meta_property("og:url"), &self.page_url);
        head.upsert(Selector::meta_property("og:site_name"), &self.site_name);
        head.upsert(Selector::meta_property("og:image"), &self.image_url);

        head.upsert(Selector::meta_name("twitter:card"), TWITTER_CARD);
        head.upsert(Selector::meta_name("twitter:title"), &self.title);
        head.upsert(Selector::meta_name("twitter:description"), &self.description);
        head.upsert(Selector::meta_name("twitter:image"), &self.image_url);

        head.upsert(Selector::link_rel("canonical"), &self.canonical_url);
    }
}

/// `image` unchanged when it already carries a scheme, else prefixed with
/// `origin`.
pub fn absolute_url(origin: &str, image: &str) -> String {
    if has_scheme(image) {
        image.to_string()
    } else if image.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), image)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), image)
    }
}

fn has_scheme(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Synced(Location),
}

/// Keeps a document head in step with navigation.
///
/// Runs once per change of path or query string; navigating to the location
/// that was synced last is a no-op.
#[derive(Debug, Clone)]
pub struct MetadataSync {
    table: RouteTable,
    origin: String,
    site_name: String,
    state: SyncState,
}

impl MetadataSync {
    pub fn new(table: RouteTable, origin: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            table,
            origin: origin.into(),
            site_name: site_name.into(),
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn resolve(&self, location: &Location) -> ResolvedMeta {
        ResolvedMeta::resolve(&self.table, &self.origin, &self.site_name, location)
    }

    /// Applies metadata for `location` if it differs from the last synced one.
    /// Returns whether the head was written.
    pub fn on_navigate<H: HeadWriter + ?Sized>(&mut self, head: &mut H, location: &Location) -> bool {
        if matches!(&self.state, SyncState::Synced(current) if current == location) {
            debug!(%location, "location unchanged, skipping head sync");
            return false;
        }
        let meta = self.resolve(location);
        meta.apply(head);
        info!(%location, title = %meta.title, "head synced");
        self.state = SyncState::Synced(location.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::head::DocumentHead;
    use crate::meta::routes::{MetaRecord, Route, RouteMatcher};

    const ORIGIN: &str = "https://example.com";

    fn record(title: &str, indexable: bool, image: &str) -> MetaRecord {
        MetaRecord {
            title: title.to_string(),
            description: format!("{} description", title),
            content_type: OgType::Website,
            indexable,
            image: image.to_string(),
        }
    }

    fn table() -> RouteTable {
        RouteTable {
            routes: vec![
                Route {
                    matcher: RouteMatcher::prefix("/products"),
                    meta: record("Site | Products", true, "/logo.png"),
                },
                Route {
                    matcher: RouteMatcher::prefix("/private"),
                    meta: record("Site | Private", false, "https://cdn.example.org/p.png"),
                },
                Route {
                    matcher: RouteMatcher::prefix("/"),
                    meta: record("Site | Page", true, "/logo.png"),
                },
            ],
            fallback: record("Site", true, "/logo.png"),
        }
    }

    fn all_selectors() -> Vec<Selector> {
        let mut selectors: Vec<Selector> = ["description", "robots"]
            .into_iter()
            .map(Selector::meta_name)
            .collect();
        selectors.extend(
            ["og:title", "og:description", "og:type", "og:url", "og:site_name", "og:image"]
                .into_iter()
                .map(Selector::meta_property),
        );
        selectors.extend(
            ["twitter:card", "twitter:title", "twitter:description", "twitter:image"]
                .into_iter()
                .map(Selector::meta_name),
        );
        selectors.push(Selector::link_rel("canonical"));
        selectors
    }

    #[test]
    fn products_prefix_beats_catch_all() {
        let sync = MetadataSync::new(table(), ORIGIN, "Site");
        let meta = sync.resolve(&Location::parse("/products/42"));
        assert_eq!(meta.title, "Site | Products");
    }

    #[test]
    fn canonical_drops_query_and_page_url_keeps_it() {
        let sync = MetadataSync::new(table(), ORIGIN, "Site");
        let meta = sync.resolve(&Location::parse("/products?productId=5"));
        assert_eq!(meta.canonical_url, "https://example.com/products");
        assert_eq!(meta.page_url, "https://example.com/products?productId=5");
    }

    #[test]
    fn trailing_slash_on_origin_is_ignored() {
        let sync = MetadataSync::new(table(), "https://example.com/", "Site");
        let meta = sync.resolve(&Location::parse("/products"));
        assert_eq!(meta.canonical_url, "https://example.com/products");
        assert_eq!(meta.image_url, "https://example.com/logo.png");
    }

    #[test]
    fn image_urls_resolve_against_origin() {
        assert_eq!(absolute_url(ORIGIN, "/logo.png"), "https://example.com/logo.png");
        assert_eq!(
            absolute_url(ORIGIN, "https://cdn.example.org/x.png"),
            "https://cdn.example.org/x.png"
        );
        assert_eq!(absolute_url(ORIGIN, "img/x.png"), "https://example.com/img/x.png");
    }

    #[test]
    fn robots_follows_indexable_flag() {
        let sync = MetadataSync::new(table(), ORIGIN, "Site");
        assert_eq!(sync.resolve(&Location::parse("/private/x")).robots, "noindex,nofollow");
        assert_eq!(sync.resolve(&Location::parse("/about")).robots, "index,follow");
    }

    #[test]
    fn writes_every_tag_once() {
        let mut head = DocumentHead::new();
        let mut sync = MetadataSync::new(table(), ORIGIN, "Site");
        assert!(sync.on_navigate(&mut head, &Location::parse("/products?productId=5")));

        assert_eq!(head.title(), Some("Site | Products"));
        assert_eq!(head.tags().len(), 13);
        for selector in all_selectors() {
            assert_eq!(head.count(&selector), 1, "{}", selector);
        }
        assert_eq!(
            head.get(&Selector::meta_name("twitter:card")),
            Some("summary_large_image")
        );
        assert_eq!(
            head.get(&Selector::meta_property("og:url")),
            Some("https://example.com/products?productId=5")
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut head = DocumentHead::new();
        let meta = MetadataSync::new(table(), ORIGIN, "Site").resolve(&Location::parse("/products"));
        meta.apply(&mut head);
        let first = head.clone();
        meta.apply(&mut head);
        assert_eq!(head, first);
    }

    #[test]
    fn navigation_replaces_previous_values() {
        let mut head = DocumentHead::new();
        let mut sync = MetadataSync::new(table(), ORIGIN, "Site");
        sync.on_navigate(&mut head, &Location::parse("/products"));
        sync.on_navigate(&mut head, &Location::parse("/private/area"));

        assert_eq!(head.tags().len(), 13);
        assert_eq!(head.title(), Some("Site | Private"));
        assert_eq!(head.get(&Selector::meta_name("robots")), Some("noindex,nofollow"));
        assert_eq!(
            head.get(&Selector::meta_property("og:image")),
            Some("https://cdn.example.org/p.png")
        );
        assert_eq!(
            head.get(&Selector::link_rel("canonical")),
            Some("https://example.com/private/area")
        );
    }

    #[test]
    fn same_location_is_not_resynced() {
        let mut head = DocumentHead::new();
        let mut sync = MetadataSync::new(table(), ORIGIN, "Site");
        assert_eq!(sync.state(), &SyncState::Idle);

        let loc = Location::parse("/products");
        assert!(sync.on_navigate(&mut head, &loc));
        assert!(!sync.on_navigate(&mut head, &loc));
        assert_eq!(sync.state(), &SyncState::Synced(loc));

        // A query change is a navigation too
        assert!(sync.on_navigate(&mut head, &Location::parse("/products?productId=1")));
    }
}
