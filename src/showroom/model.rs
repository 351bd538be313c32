use crate::error::{Result, ShowroomError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a content item.
///
/// Content arrives from JSON where the same item may be keyed by `5` in one
/// place and `"5"` in another (a numeric database key echoed back through a
/// URL query string). Ids are normalized to their string form when they are
/// deserialized, so equality is plain string equality everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = match RawId::deserialize(deserializer)? {
            RawId::Int(n) => n.to_string(),
            // 5.0 prints as "5", the way a browser stringifies it
            RawId::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            RawId::Float(f) => f.to_string(),
            RawId::Text(s) => s,
        };
        Ok(Self(id))
    }
}

/// A product or blog post as delivered by the content source.
///
/// Only `id` and `category` are interpreted by the view models; everything else
/// is payload for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    #[serde(alias = "name", default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Long-form product details, markdown.
    #[serde(default)]
    pub details: Option<String>,
    /// Blog body, markdown.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(alias = "featured_image", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

impl ContentItem {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            description: None,
            excerpt: None,
            details: None,
            content: None,
            image_url: None,
            author: None,
            published_date: None,
            read_time: None,
            contact_info: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Anything the listing model can group by category.
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

impl Categorized for ContentItem {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Anything the detail model can look up by id.
pub trait Identified {
    fn item_id(&self) -> &ItemId;
}

impl Identified for ContentItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Products,
    Blogs,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Products, ContentKind::Blogs];

    pub fn default_page_size(self) -> usize {
        match self {
            ContentKind::Products => 9,
            ContentKind::Blogs => 6,
        }
    }

    /// Query parameter that deep-links into the detail view, if the page has one.
    pub fn deep_link_param(self) -> Option<&'static str> {
        match self {
            ContentKind::Products => Some("productId"),
            ContentKind::Blogs => None,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            ContentKind::Products => "/products",
            ContentKind::Blogs => "/blogs",
        }
    }

    /// The listing page a path belongs to, if any.
    pub fn for_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            path == kind.route()
                || path
                    .strip_prefix(kind.route())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Products => write!(f, "products"),
            ContentKind::Blogs => write!(f, "blogs"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = ShowroomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "products" | "product" => Ok(ContentKind::Products),
            "blogs" | "blog" | "posts" => Ok(ContentKind::Blogs),
            _ => Err(ShowroomError::UnknownKind(s.to_string())),
        }
    }
}

/// The content slice held by the store: every listing page reads from here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<ContentItem>,
    #[serde(default)]
    pub blogs: Vec<ContentItem>,
}

impl Catalog {
    pub fn items(&self, kind: ContentKind) -> &[ContentItem] {
        match kind {
            ContentKind::Products => &self.products,
            ContentKind::Blogs => &self.blogs,
        }
    }

    pub fn items_mut(&mut self, kind: ContentKind) -> &mut Vec<ContentItem> {
        match kind {
            ContentKind::Products => &mut self.products,
            ContentKind::Blogs => &mut self.blogs,
        }
    }
}
