//! # Detail selection
//!
//! Decides which single item a listing page shows in its detail modal. Two
//! inputs compete:
//!
//! - an **explicit** selection, made by clicking a card, and
//! - a **deep link**, an id carried in the URL query string (for products,
//!   `?productId=5`).
//!
//! The explicit selection always wins. A deep link opens its item until the
//! user closes it; closing records a dismissal so the same link does not pop
//! the modal straight back open. The dismissal is compared against the live
//! deep link at read time, so navigating to a different id is never
//! suppressed by a stale dismissal.

use crate::model::{Identified, ItemId};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    explicit_id: Option<ItemId>,
    dismissed_id: Option<ItemId>,
    deep_link_id: Option<ItemId>,
}

impl DetailSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from whatever id the current URL carries.
    pub fn with_deep_link(deep_link_id: Option<ItemId>) -> Self {
        Self {
            deep_link_id,
            ..Self::default()
        }
    }

    /// The user opened an item. Opening anything clears an earlier dismissal.
    pub fn select_explicit(&mut self, id: impl Into<ItemId>) {
        self.explicit_id = Some(id.into());
        self.dismissed_id = None;
    }

    /// The user closed the modal.
    ///
    /// If what was showing came from the deep link, the link is recorded as
    /// dismissed; otherwise only the explicit selection is cleared.
    pub fn dismiss(&mut self) {
        let active = self.active_id().cloned();
        self.explicit_id = None;
        if active.is_some() && active == self.deep_link_id {
            debug!(id = ?self.deep_link_id, "deep link dismissed");
            self.dismissed_id = self.deep_link_id.clone();
        }
    }

    /// The URL parameter changed (or was re-read). A different id starts over:
    /// the new link wins against both the old dismissal and an explicit pick.
    pub fn on_deep_link_change(&mut self, id: Option<ItemId>) {
        if id != self.deep_link_id {
            self.explicit_id = None;
            self.dismissed_id = None;
            self.deep_link_id = id;
        }
    }

    pub fn active_id(&self) -> Option<&ItemId> {
        if self.explicit_id.is_some() {
            return self.explicit_id.as_ref();
        }
        match &self.deep_link_id {
            Some(id) if self.dismissed_id.as_ref() == Some(id) => None,
            other => other.as_ref(),
        }
    }

    pub fn deep_link_id(&self) -> Option<&ItemId> {
        self.deep_link_id.as_ref()
    }

    pub fn dismissed_id(&self) -> Option<&ItemId> {
        self.dismissed_id.as_ref()
    }

    /// Looks the active id up in `items`. Unknown ids resolve to `None`.
    pub fn resolve<'a, T: Identified>(&self, items: &'a [T]) -> Option<&'a T> {
        let id = self.active_id()?;
        items.iter().find(|item| item.item_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentItem;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn starts_with_nothing_open() {
        assert_eq!(DetailSelection::new().active_id(), None);
    }

    #[test]
    fn deep_link_opens_item() {
        let selection = DetailSelection::with_deep_link(Some(id("5")));
        assert_eq!(selection.active_id(), Some(&id("5")));
    }

    #[test]
    fn dismissed_deep_link_stays_closed_until_it_changes() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.dismiss();
        assert_eq!(selection.active_id(), None);

        // Same id re-read, e.g. a reload
        selection.on_deep_link_change(Some(id("5")));
        assert_eq!(selection.active_id(), None);

        selection.on_deep_link_change(Some(id("7")));
        assert_eq!(selection.active_id(), Some(&id("7")));
    }

    #[test]
    fn explicit_selection_beats_deep_link() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.select_explicit("9");
        assert_eq!(selection.active_id(), Some(&id("9")));
    }

    #[test]
    fn dismissing_explicit_pick_of_the_linked_item_records_dismissal() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.select_explicit("5");
        selection.dismiss();
        assert_eq!(selection.dismissed_id(), Some(&id("5")));
        assert_eq!(selection.active_id(), None);
    }

    #[test]
    fn dismissing_other_explicit_pick_leaves_dismissal_untouched() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.select_explicit("9");
        selection.dismiss();
        assert_eq!(selection.dismissed_id(), None);
        assert_eq!(selection.active_id(), Some(&id("5")));
    }

    #[test]
    fn explicit_pick_clears_previous_dismissal() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.dismiss();
        selection.select_explicit("2");
        assert_eq!(selection.dismissed_id(), None);
        selection.dismiss();
        assert_eq!(selection.active_id(), Some(&id("5")));
    }

    #[test]
    fn new_deep_link_overrides_explicit_pick() {
        let mut selection = DetailSelection::new();
        selection.select_explicit("3");
        selection.on_deep_link_change(Some(id("4")));
        assert_eq!(selection.active_id(), Some(&id("4")));
    }

    #[test]
    fn clearing_deep_link_closes_linked_item() {
        let mut selection = DetailSelection::with_deep_link(Some(id("5")));
        selection.on_deep_link_change(None);
        assert_eq!(selection.active_id(), None);
    }

    #[test]
    fn resolve_finds_item_by_normalized_id() {
        let items: Vec<ContentItem> =
            serde_json::from_str(r#"[{"id": 1, "title": "One"}, {"id": 5, "title": "Five"}]"#)
                .unwrap();
        let selection = DetailSelection::with_deep_link(Some(id("5")));
        assert_eq!(selection.resolve(&items).map(|i| i.title.as_str()), Some("Five"));
    }

    #[test]
    fn resolve_unknown_id_is_none() {
        let items = vec![ContentItem::new(1u64, "One")];
        let selection = DetailSelection::with_deep_link(Some(id("42")));
        assert!(selection.resolve(&items).is_none());
    }
}
