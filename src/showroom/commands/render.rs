use super::{listing_model, CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::detail::DetailSelection;
use crate::error::Result;
use crate::meta::{DocumentHead, MetadataSync};
use crate::model::ContentKind;
use crate::nav::Location;
use crate::site::SiteRenderer;
use crate::store::ContentSource;
use tracing::info;

/// View state applied on top of what the location itself carries.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub category: Option<String>,
    pub page: usize,
    /// Opens an item as if its card had been clicked.
    pub select: Option<String>,
}

/// Renders the complete HTML document for `location`.
///
/// Listing paths get their page body; the deep-link parameter (if the page
/// has one) opens the detail modal. Other paths get the head and contact rail
/// around an empty body.
pub fn run<S: ContentSource>(
    source: &S,
    config: &SiteConfig,
    location: &Location,
    options: &RenderOptions,
) -> Result<CmdResult> {
    let renderer = SiteRenderer::new(config.contact.clone())?;
    let mut result = CmdResult::default();

    let body = match ContentKind::for_path(location.path()) {
        Some(kind) => {
            let mut model = listing_model(source, config, kind)?;
            if let Some(category) = &options.category {
                model.set_category_filter(category.as_str());
            }
            model.set_page(options.page);

            let deep_link = kind.deep_link_param().and_then(|p| location.deep_link(p));
            let mut selection = DetailSelection::with_deep_link(deep_link);
            if let Some(id) = &options.select {
                selection.select_explicit(id.as_str());
            }

            let active = selection.resolve(model.items());
            if let (Some(id), None) = (selection.active_id(), active) {
                result.add_message(CmdMessage::warning(format!(
                    "No {} with id `{}`, rendering without the detail view.",
                    kind, id
                )));
            }
            renderer.listing_page(kind, &model, active)?
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No page body for `{}`, rendered head only.",
                location.path()
            )));
            "<main></main>".to_string()
        }
    };

    let mut head = DocumentHead::new();
    let mut sync = MetadataSync::new(config.route_table(), &config.origin, &config.site_name);
    sync.on_navigate(&mut head, location);

    let html = renderer.document(&head, &body)?;
    info!(%location, bytes = html.len(), "page rendered");
    Ok(result.with_html(html))
}
