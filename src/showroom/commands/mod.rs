use crate::config::SiteConfig;
use crate::error::Result;
use crate::listing::ListingModel;
use crate::meta::ResolvedMeta;
use crate::model::{ContentItem, ContentKind};
use crate::store::ContentSource;

pub mod categories;
pub mod config;
pub mod list;
pub mod meta;
pub mod render;
pub mod routes;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One page of a listing, detached from the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub kind: ContentKind,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub items: Vec<ContentItem>,
}

impl ListingPage {
    pub fn from_model(kind: ContentKind, model: &ListingModel<ContentItem>) -> Self {
        let view = model.view();
        Self {
            kind,
            categories: view.categories.to_vec(),
            selected_category: view.selected_category.to_string(),
            current_page: view.current_page,
            total_pages: view.total_pages,
            filtered_count: view.filtered_items.len(),
            items: view.page_items.into_iter().cloned().collect(),
        }
    }
}

/// A route table entry flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLine {
    pub matcher: String,
    pub title: String,
    pub indexable: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<ListingPage>,
    pub categories: Vec<String>,
    pub item: Option<ContentItem>,
    pub html: Option<String>,
    pub meta: Option<ResolvedMeta>,
    pub routes: Vec<RouteLine>,
    pub config: Option<SiteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: ListingPage) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    pub fn with_meta(mut self, meta: ResolvedMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_routes(mut self, routes: Vec<RouteLine>) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A listing model over the source's items, sized from config.
pub(crate) fn listing_model<S: ContentSource>(
    source: &S,
    config: &SiteConfig,
    kind: ContentKind,
) -> Result<ListingModel<ContentItem>> {
    Ok(ListingModel::new(source.items(kind)?, config.page_size(kind)))
}
