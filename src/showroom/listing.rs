//! # Listing: filter, paginate, derive
//!
//! [`ListingModel`] is the view model behind both listing pages. It owns the
//! source list plus two pieces of view state (selected category and current
//! page) and derives everything else on demand:
//!
//! ```text
//! items ──► categories      distinct, non-empty, sorted ascending
//!   │
//!   └─► filtered_items      all items, or those whose category == selected
//!          │
//!          └─► page_items   filtered[(page-1)*size .. page*size]
//!              total_pages  ceil(filtered.len() / size)
//! ```
//!
//! Categories are cached per source list; everything else is recomputed by
//! [`ListingModel::view`], which is pure.
//!
//! ## Page invariants
//!
//! - Selecting a category always resets the page to 1.
//! - [`ListingModel::set_page`] stores what it is given (pages are 1-based, so 0
//!   is read as 1). Callers clamp with [`ListingModel::clamp_page`]; an
//!   out-of-range page yields an empty slice, never a panic.
//! - Replacing the source list with [`ListingModel::set_items`] clamps the page
//!   into the new range, since a shrinking list would otherwise strand the view
//!   on a page that no longer exists.

use crate::model::Categorized;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ListingModel<T> {
    items: Vec<T>,
    categories: Vec<String>,
    page_size: usize,
    selected_category: String,
    current_page: usize,
}

/// Everything a listing page renders, borrowed from the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a, T> {
    pub categories: &'a [String],
    pub filtered_items: Vec<&'a T>,
    pub total_pages: usize,
    pub page_items: Vec<&'a T>,
    pub current_page: usize,
    pub selected_category: &'a str,
}

impl<T: Categorized> ListingModel<T> {
    /// Creates a model over `items`. A `page_size` of 0 is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let categories = derive_categories(&items);
        Self {
            items,
            categories,
            page_size: page_size.max(1),
            selected_category: String::new(),
            current_page: 1,
        }
    }

    /// Replaces the source list and re-derives categories.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.categories = derive_categories(&items);
        self.items = items;
        let total = self.total_pages();
        let clamped = self.current_page.min(total.max(1));
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "clamped stale page");
            self.current_page = clamped;
        }
    }

    /// Selects a category (empty string clears the filter) and returns to page 1.
    ///
    /// Labels that match nothing are accepted and simply filter everything out.
    pub fn set_category_filter(&mut self, label: impl Into<String>) {
        self.selected_category = label.into();
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// `min(max(page, 1), max(total_pages, 1))`
    pub fn clamp_page(&self, page: usize) -> usize {
        page.max(1).min(self.total_pages().max(1))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().count().div_ceil(self.page_size)
    }

    pub fn view(&self) -> ListingView<'_, T> {
        let filtered_items: Vec<&T> = self.filtered().collect();
        let total_pages = filtered_items.len().div_ceil(self.page_size);
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let page_items = filtered_items
            .iter()
            .skip(start)
            .take(self.page_size)
            .copied()
            .collect();

        ListingView {
            categories: &self.categories,
            filtered_items,
            total_pages,
            page_items,
            current_page: self.current_page,
            selected_category: &self.selected_category,
        }
    }

    fn filtered(&self) -> impl Iterator<Item = &T> + '_ {
        let selected = self.selected_category.as_str();
        self.items
            .iter()
            .filter(move |item| selected.is_empty() || item.category() == Some(selected))
    }
}

fn derive_categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = items
        .iter()
        .filter_map(|item| item.category())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// State of the pagination control for one listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub pages: Vec<usize>,
    pub current: usize,
    pub previous: usize,
    pub next: usize,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl Pagination {
    /// Builds the control for a view, or `None` when there is at most one page
    /// and the control should not be shown at all.
    pub fn for_view<T>(view: &ListingView<'_, T>) -> Option<Self> {
        Self::new(view.total_pages, view.current_page)
    }

    /// A `current_page` outside `1..=total_pages` is clamped into range, so
    /// the control always marks an existing page as current.
    pub fn new(total_pages: usize, current_page: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let clamp = |page: usize| page.clamp(1, total_pages);
        let current = clamp(current_page);
        Some(Self {
            pages: (1..=total_pages).collect(),
            current,
            previous: clamp(current.saturating_sub(1)),
            next: clamp(current.saturating_add(1)),
            previous_disabled: current == 1,
            next_disabled: current == total_pages,
        })
    }
}
