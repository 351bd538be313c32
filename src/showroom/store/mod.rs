//! # Content Sources
//!
//! The view models never fetch anything: they are handed a slice of items.
//! Where that slice comes from is abstracted behind [`ContentSource`].
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: reads a catalog file once and serves it from
//!   memory until [`ContentSource::refresh`] is called
//! - [`memory::InMemorySource`]: holds a [`Catalog`] directly, for tests and
//!   embedding
//!
//! ## Catalog Format
//!
//! ```text
//! content.json
//! {
//!   "products": [ { "id": 1, "name": "...", "category": "...", ... } ],
//!   "blogs":    [ { "id": "b1", "title": "...", "featured_image": "...", ... } ]
//! }
//! ```
//!
//! Either section may be missing. Ids may be numbers or strings.

use crate::error::Result;
use crate::model::{Catalog, ContentItem, ContentKind};

pub mod fs;
pub mod memory;

/// Read access to the site's content.
pub trait ContentSource {
    /// All items of one kind, in source order.
    fn items(&self, kind: ContentKind) -> Result<Vec<ContentItem>>;

    /// Re-reads the backing data. Never called implicitly.
    fn refresh(&mut self) -> Result<()>;

    /// Both sections at once.
    fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog {
            products: self.items(ContentKind::Products)?,
            blogs: self.items(ContentKind::Blogs)?,
        })
    }
}
