use super::{listing_model, CmdMessage, CmdResult, ListingPage};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::ContentKind;
use crate::store::ContentSource;

pub fn run<S: ContentSource>(
    source: &S,
    config: &SiteConfig,
    kind: ContentKind,
    category: Option<&str>,
    page: usize,
) -> Result<CmdResult> {
    let mut model = listing_model(source, config, kind)?;
    if let Some(category) = category {
        model.set_category_filter(category);
    }
    model.set_page(page);

    let listing = ListingPage::from_model(kind, &model);
    let mut result = CmdResult::default();

    if model.items().is_empty() {
        result.add_message(CmdMessage::info(format!("No {} yet.", kind)));
    } else if listing.filtered_count == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No {} found in category `{}`.",
            kind, listing.selected_category
        )));
    } else if listing.items.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({}).",
            listing.current_page, listing.total_pages
        )));
    }

    Ok(result.with_listing(listing))
}
