//! # Site Rendering
//!
//! Turns view-model state into HTML using the primitives every listing page
//! shares: page hero, filter chips, pagination, empty-state panel, detail
//! modal and the sticky contact rail.
//!
//! ## Layout
//!
//! ```text
//! hero
//! ├─ empty source ──► empty-state panel ("Coming Soon")
//! └─ otherwise ─────► filter chips (when there are categories)
//!                     "no match" notice (when the filter leaves nothing)
//!                     card grid for the current page
//!                     pagination (when there is more than one page)
//! detail modal (when an item is active)
//! ```
//!
//! Templates live in [`templates`] and are styled through the class theme in
//! [`theme`]. Page-specific data shaping lives in [`products`] and [`blogs`].

use crate::config::ContactConfig;
use crate::error::Result;
use crate::listing::{ListingModel, Pagination};
use crate::meta::DocumentHead;
use crate::model::{ContentItem, ContentKind};
use fragments::Renderer;
use serde::Serialize;
use tracing::debug;

pub mod blogs;
pub mod contact;
pub mod products;
pub mod templates;
pub mod theme;

pub use contact::{contact_actions, contact_link, ContactAction, Intent};

/// Fixed copy for one listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCopy {
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
    pub filter_label: &'static str,
    pub all_label: &'static str,
    /// Shown when a category filter leaves nothing.
    pub no_match: &'static str,
    pub modal_width: &'static str,
}

impl PageCopy {
    pub fn for_kind(kind: ContentKind) -> &'static PageCopy {
        match kind {
            ContentKind::Products => &products::COPY,
            ContentKind::Blogs => &blogs::COPY,
        }
    }
}

#[derive(Serialize)]
struct HeroData<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ChipsData<'a> {
    label: &'a str,
    all_label: &'a str,
    options: &'a [String],
    selected: &'a str,
}

#[derive(Serialize)]
struct EmptyStateData<'a> {
    title: &'a str,
    description: &'a str,
    cta_label: &'a str,
    cta_href: &'a str,
}

#[derive(Serialize)]
struct NoticeData<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ModalData<'a> {
    title_id: String,
    title: &'a str,
    max_width: &'a str,
    close_href: &'a str,
    body_html: String,
}

#[derive(Serialize)]
struct CardsData<T> {
    cards: Vec<T>,
}

#[derive(Serialize)]
struct ContactRailData {
    actions: Vec<ContactAction>,
}

#[derive(Serialize, Default)]
struct ListingPageData {
    hero_html: String,
    empty_html: Option<String>,
    chips_html: String,
    notice_html: String,
    cards_html: String,
    pagination_html: String,
    modal_html: String,
}

#[derive(Serialize)]
struct DocumentData<'a> {
    head_html: String,
    body_html: &'a str,
    contact_html: String,
}

/// Renders site primitives and whole pages.
pub struct SiteRenderer {
    renderer: Renderer,
    contact: ContactConfig,
}

impl SiteRenderer {
    pub fn new(contact: ContactConfig) -> Result<Self> {
        Ok(Self {
            renderer: templates::site_renderer()?,
            contact,
        })
    }

    pub fn hero(&self, title: &str, description: &str) -> Result<String> {
        Ok(self
            .renderer
            .render("hero", &HeroData { title, description })?)
    }

    /// Empty when there are no options to choose from.
    pub fn filter_chips(
        &self,
        label: &str,
        all_label: &str,
        options: &[String],
        selected: &str,
    ) -> Result<String> {
        if options.is_empty() {
            return Ok(String::new());
        }
        Ok(self.renderer.render(
            "filter_chips",
            &ChipsData {
                label,
                all_label,
                options,
                selected,
            },
        )?)
    }

    /// Empty when there is at most one page.
    pub fn pagination(&self, pagination: Option<&Pagination>) -> Result<String> {
        match pagination {
            Some(p) => Ok(self.renderer.render("pagination", p)?),
            None => Ok(String::new()),
        }
    }

    pub fn empty_state(&self, title: &str, description: &str) -> Result<String> {
        Ok(self.renderer.render(
            "empty_state",
            &EmptyStateData {
                title,
                description,
                cta_label: "Back to Home",
                cta_href: "/",
            },
        )?)
    }

    pub fn detail_modal(
        &self,
        title_id: String,
        title: &str,
        max_width: &str,
        close_href: &str,
        body_html: String,
    ) -> Result<String> {
        Ok(self.renderer.render(
            "detail_modal",
            &ModalData {
                title_id,
                title,
                max_width,
                close_href,
                body_html,
            },
        )?)
    }

    pub fn contact_rail(&self) -> Result<String> {
        Ok(self.renderer.render(
            "contact_rail",
            &ContactRailData {
                actions: contact_actions(&self.contact),
            },
        )?)
    }

    /// The full `<main>` of a listing page for the model's current state.
    pub fn listing_page(
        &self,
        kind: ContentKind,
        model: &ListingModel<ContentItem>,
        active: Option<&ContentItem>,
    ) -> Result<String> {
        let copy = PageCopy::for_kind(kind);
        let mut data = ListingPageData {
            hero_html: self.hero(copy.hero_title, copy.hero_description)?,
            ..ListingPageData::default()
        };

        if model.items().is_empty() {
            debug!(%kind, "no content, rendering empty state");
            data.empty_html = Some(self.empty_state(copy.empty_title, copy.empty_description)?);
        } else {
            let view = model.view();
            data.chips_html = self.filter_chips(
                copy.filter_label,
                copy.all_label,
                view.categories,
                view.selected_category,
            )?;
            if view.filtered_items.is_empty() {
                data.notice_html = self.renderer.render(
                    "notice",
                    &NoticeData {
                        message: copy.no_match,
                    },
                )?;
            }
            data.cards_html = self.cards(kind, &view.page_items)?;
            data.pagination_html = self.pagination(Pagination::for_view(&view).as_ref())?;
        }

        if let Some(item) = active {
            data.modal_html = self.item_modal(kind, item)?;
        }

        Ok(self.renderer.render("listing_page", &data)?)
    }

    fn cards(&self, kind: ContentKind, items: &[&ContentItem]) -> Result<String> {
        if items.is_empty() {
            return Ok(String::new());
        }
        let html = match kind {
            ContentKind::Products => self.renderer.render(
                "product_cards",
                &CardsData {
                    cards: items.iter().map(|p| products::ProductCard::new(p)).collect(),
                },
            )?,
            ContentKind::Blogs => self.renderer.render(
                "blog_cards",
                &CardsData {
                    cards: items.iter().map(|b| blogs::BlogCard::new(b)).collect(),
                },
            )?,
        };
        Ok(html)
    }

    /// The detail modal for one item.
    pub fn item_modal(&self, kind: ContentKind, item: &ContentItem) -> Result<String> {
        let body_html = match kind {
            ContentKind::Products => self
                .renderer
                .render("product_detail", &products::ProductDetail::new(item))?,
            ContentKind::Blogs => self
                .renderer
                .render("blog_detail", &blogs::BlogDetail::new(item))?,
        };
        self.detail_modal(
            format!("{}-detail-title", kind),
            &item.title,
            PageCopy::for_kind(kind).modal_width,
            kind.route(),
            body_html,
        )
    }

    /// Wraps a page body into a complete HTML document.
    pub fn document(&self, head: &DocumentHead, body_html: &str) -> Result<String> {
        Ok(self.renderer.render(
            "document",
            &DocumentData {
                head_html: head.to_html(),
                body_html,
                contact_html: self.contact_rail()?,
            },
        )?)
    }
}
