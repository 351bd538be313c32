//! # API Facade
//!
//! The single entry point for showroom operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, normalizes inputs (kind names,
//! raw location strings) and returns `Result<CmdResult>`. It holds no
//! business logic and performs no terminal I/O.
//!
//! ## Generic Over ContentSource
//!
//! `SiteApi<S: ContentSource>`:
//! - Production: `SiteApi<JsonFileSource>`
//! - Testing: `SiteApi<InMemorySource>`
//!
//! Content is read once when the source is built. [`SiteApi::refresh`]
//! re-reads it; nothing else does.

use crate::commands;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::ContentKind;
use crate::nav::Location;
use crate::store::ContentSource;
use std::str::FromStr;

pub struct SiteApi<S: ContentSource> {
    source: S,
    config: SiteConfig,
}

impl<S: ContentSource> SiteApi<S> {
    pub fn new(source: S, config: SiteConfig) -> Self {
        Self { source, config }
    }

    pub fn list(&self, kind: &str, category: Option<&str>, page: usize) -> Result<commands::CmdResult> {
        let kind = ContentKind::from_str(kind)?;
        commands::list::run(&self.source, &self.config, kind, category, page)
    }

    pub fn categories(&self, kind: &str) -> Result<commands::CmdResult> {
        let kind = ContentKind::from_str(kind)?;
        commands::categories::run(&self.source, &self.config, kind)
    }

    pub fn view(&self, kind: &str, id: &str) -> Result<commands::CmdResult> {
        let kind = ContentKind::from_str(kind)?;
        commands::view::run(&self.source, kind, id)
    }

    pub fn render(&self, location: &str, options: &RenderOptions) -> Result<commands::CmdResult> {
        let location = Location::parse(location);
        commands::render::run(&self.source, &self.config, &location, options)
    }

    pub fn meta(&self, location: &str) -> Result<commands::CmdResult> {
        let location = Location::parse(location);
        commands::meta::run(&self.config, &location)
    }

    pub fn routes(&self) -> Result<commands::CmdResult> {
        commands::routes::run(&self.config)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.source.refresh()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

pub use commands::render::RenderOptions;
pub use commands::{CmdMessage, CmdResult, ListingPage, MessageLevel, RouteLine};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowroomError;
    use crate::store::memory::fixtures;

    fn api() -> SiteApi<crate::store::memory::InMemorySource> {
        SiteApi::new(fixtures::source(), SiteConfig::default())
    }

    #[test]
    fn list_dispatches_with_parsed_kind() {
        let result = api().list("product", None, 2).unwrap();
        let listing = result.listing.unwrap();
        assert_eq!(listing.kind, ContentKind::Products);
        assert_eq!(listing.current_page, 2);
        assert_eq!(listing.items.len(), 3);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(matches!(
            api().categories("pages"),
            Err(ShowroomError::UnknownKind(_))
        ));
    }

    #[test]
    fn render_parses_location() {
        let result = api().render("/blogs#top", &RenderOptions::default()).unwrap();
        assert!(result.html.unwrap().contains("All Posts"));
    }

    #[test]
    fn refresh_reaches_the_source() {
        let mut api = api();
        api.refresh().unwrap();
        api.refresh().unwrap();
        assert_eq!(api.source().refresh_count(), 2);
    }
}
