use super::contact::{contact_link, Intent};
use super::PageCopy;
use crate::format::distinct_details;
use crate::markdown::render_markdown;
use crate::model::{ContentItem, ContentKind};
use crate::nav::link_with_query;
use serde::Serialize;

pub const COPY: PageCopy = PageCopy {
    hero_title: "Our Products",
    hero_description: "From hardware design to edge AI deployment, we deliver complete engineering solutions that bring intelligent products to life.",
    empty_title: "Coming Soon",
    empty_description: "We're working on some amazing products that will transform your business. Check back soon for exciting announcements!",
    filter_label: "Filter by Category:",
    all_label: "All Products",
    no_match: "No products found in this category. Try selecting a different one.",
    modal_width: "max-w-2xl",
};

#[derive(Debug, Serialize)]
pub struct ProductCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    /// Deep link that opens this product's modal.
    pub detail_href: String,
    pub inquire_href: String,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a ContentItem) -> Self {
        Self {
            id: product.id.as_str(),
            name: &product.title,
            description: product.description.as_deref().unwrap_or_default(),
            image_url: product.image_url.as_deref(),
            detail_href: detail_link(product),
            inquire_href: contact_link(Some(&product.title), Intent::Inquiry),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetail<'a> {
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub description: &'a str,
    /// Rendered only when the details say more than the description.
    pub details_html: Option<String>,
    pub contact_info: Option<&'a str>,
    pub demo_href: String,
    pub inquiry_href: String,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a ContentItem) -> Self {
        let details = distinct_details(product.description.as_deref(), product.details.as_deref());
        Self {
            name: &product.title,
            image_url: product.image_url.as_deref(),
            description: product.description.as_deref().unwrap_or_default(),
            details_html: details.map(render_markdown),
            contact_info: product.contact_info.as_deref().filter(|c| !c.is_empty()),
            demo_href: contact_link(Some(&product.title), Intent::Demo),
            inquiry_href: contact_link(Some(&product.title), Intent::Inquiry),
        }
    }
}

/// `/products?productId=<id>`
pub fn detail_link(product: &ContentItem) -> String {
    let kind = ContentKind::Products;
    match kind.deep_link_param() {
        Some(param) => link_with_query(kind.route(), &[(param, Some(product.id.as_str()))]),
        None => kind.route().to_string(),
    }
}
