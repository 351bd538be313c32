use super::CmdResult;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::meta::{DocumentHead, MetadataSync};
use crate::nav::Location;

/// Resolves metadata for `location` and renders the head it produces.
pub fn run(config: &SiteConfig, location: &Location) -> Result<CmdResult> {
    let mut sync = MetadataSync::new(config.route_table(), &config.origin, &config.site_name);
    let mut head = DocumentHead::new();
    sync.on_navigate(&mut head, location);

    Ok(CmdResult::default()
        .with_meta(sync.resolve(location))
        .with_html(head.to_html()))
}
