use super::ContentSource;
use crate::error::Result;
use crate::model::{Catalog, ContentItem, ContentKind};

/// In-memory content, for tests and for embedding the library where the
/// items are already at hand.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalog: Catalog,
    refreshes: usize,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            refreshes: 0,
        }
    }

    pub fn set_items(&mut self, kind: ContentKind, items: Vec<ContentItem>) {
        *self.catalog.items_mut(kind) = items;
    }

    /// How many times [`ContentSource::refresh`] was called.
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }
}

impl ContentSource for InMemorySource {
    fn items(&self, kind: ContentKind) -> Result<Vec<ContentItem>> {
        Ok(self.catalog.items(kind).to_vec())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    //! Sample content shared by unit and integration tests.

    use super::InMemorySource;
    use crate::model::{Catalog, ContentItem};

    pub const PRODUCT_CATEGORIES: [&str; 3] = ["Edge AI", "Firmware", "Hardware"];

    /// `count` products with ids `1..=count`, cycling through
    /// [`PRODUCT_CATEGORIES`] in reverse order so sorting is observable.
    pub fn products(count: usize) -> Vec<ContentItem> {
        (1..=count)
            .map(|i| {
                let category = PRODUCT_CATEGORIES[(count - i) % PRODUCT_CATEGORIES.len()];
                let mut item = ContentItem::new(i as u64, format!("Product {}", i))
                    .with_category(category)
                    .with_description(format!("Product {} description", i));
                item.image_url = Some(format!("/img/product-{}.png", i));
                item.contact_info = Some("sales@example.com".to_string());
                item
            })
            .collect()
    }

    pub fn blogs(count: usize) -> Vec<ContentItem> {
        (1..=count)
            .map(|i| {
                let mut item = ContentItem::new(format!("b{}", i), format!("Post {}", i))
                    .with_category(if i % 2 == 0 { "News" } else { "Guides" });
                item.excerpt = Some(format!("Excerpt {}", i));
                item.author = Some("ada".to_string());
                item.published_date = Some("2024-01-05".to_string());
                item.read_time = Some(3);
                item.content = Some(format!("# Post {}\n\nBody.", i));
                item
            })
            .collect()
    }

    pub fn catalog() -> Catalog {
        Catalog {
            products: products(12),
            blogs: blogs(8),
        }
    }

    pub fn source() -> InMemorySource {
        InMemorySource::with_catalog(catalog())
    }
}
