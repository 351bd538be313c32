use super::PageCopy;
use crate::format::{author_initial, format_date, read_time_label};
use crate::markdown::render_markdown;
use crate::model::ContentItem;
use serde::Serialize;

pub const COPY: PageCopy = PageCopy {
    hero_title: "Blogs",
    hero_description: "From hardware design to edge AI deployment, we deliver complete engineering solutions that bring intelligent products to life.",
    empty_title: "Coming Soon",
    empty_description: "We're crafting insightful articles and resources on Edge AI, product development, and technology innovation. Stay tuned for exciting content!",
    filter_label: "Filter by:",
    all_label: "All Posts",
    no_match: "No blog posts found in this category. Try selecting a different one!",
    modal_width: "max-w-4xl",
};

/// Byline fields shared by the card and the modal.
#[derive(Debug, Serialize)]
pub struct Byline<'a> {
    pub author: Option<&'a str>,
    pub author_initial: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<&'a str>,
}

impl<'a> Byline<'a> {
    fn new(post: &'a ContentItem) -> Self {
        let author = post.author.as_deref().filter(|a| !a.trim().is_empty());
        Self {
            author,
            author_initial: author.and_then(author_initial),
            date: post
                .published_date
                .as_deref()
                .map(format_date)
                .filter(|d| !d.is_empty()),
            read_time: post.read_time.filter(|m| *m > 0).map(read_time_label),
            category: post.category.as_deref().filter(|c| !c.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub image_url: Option<&'a str>,
    /// Excerpt, or the description when there is none.
    pub summary: &'a str,
    #[serde(flatten)]
    pub byline: Byline<'a>,
}

impl<'a> BlogCard<'a> {
    pub fn new(post: &'a ContentItem) -> Self {
        Self {
            id: post.id.as_str(),
            title: &post.title,
            image_url: post.image_url.as_deref(),
            summary: summary(post),
            byline: Byline::new(post),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogDetail<'a> {
    pub title: &'a str,
    pub image_url: Option<&'a str>,
    pub content_html: String,
    #[serde(flatten)]
    pub byline: Byline<'a>,
}

impl<'a> BlogDetail<'a> {
    pub fn new(post: &'a ContentItem) -> Self {
        Self {
            title: &post.title,
            image_url: post.image_url.as_deref(),
            content_html: render_markdown(post.content.as_deref().unwrap_or_default()),
            byline: Byline::new(post),
        }
    }
}

fn summary(post: &ContentItem) -> &str {
    post.excerpt
        .as_deref()
        .filter(|e| !e.is_empty())
        .or(post.description.as_deref())
        .unwrap_or_default()
}
