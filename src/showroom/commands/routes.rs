use super::{CmdMessage, CmdResult, RouteLine};
use crate::config::SiteConfig;
use crate::error::Result;

/// Lists the effective route table and reports whether it is well ordered.
pub fn run(config: &SiteConfig) -> Result<CmdResult> {
    let table = config.route_table();
    let mut lines: Vec<RouteLine> = table
        .routes
        .iter()
        .map(|route| RouteLine {
            matcher: route.matcher.to_string(),
            title: route.meta.title.clone(),
            indexable: route.meta.indexable,
        })
        .collect();
    lines.push(RouteLine {
        matcher: "(fallback)".to_string(),
        title: table.fallback.title.clone(),
        indexable: table.fallback.indexable,
    });

    let mut result = CmdResult::default().with_routes(lines);
    match table.validate() {
        Ok(()) => result.add_message(CmdMessage::success("Route table is valid.")),
        Err(e) => result.add_message(CmdMessage::error(e.to_string())),
    }
    Ok(result)
}
