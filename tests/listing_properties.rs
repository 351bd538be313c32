use proptest::prelude::*;
use showroom::listing::{ListingModel, Pagination};
use showroom::model::ContentItem;

const LABELS: [&str; 4] = ["Edge AI", "Firmware", "Hardware", ""];

fn items_strategy() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(prop::option::of(0..LABELS.len()), 0..40).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let item = ContentItem::new(i as u64, format!("Item {}", i));
                match label {
                    Some(l) => item.with_category(LABELS[l]),
                    None => item,
                }
            })
            .collect()
    })
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0..3usize).prop_map(|i| LABELS[i].to_string()),
        Just("Robotics".to_string()),
    ]
}

proptest! {
    #[test]
    fn pages_concatenate_to_the_filtered_list(
        items in items_strategy(),
        size in 1..10usize,
        category in category_strategy(),
    ) {
        let mut model = ListingModel::new(items, size);
        model.set_category_filter(category);

        let filtered: Vec<String> = model
            .view()
            .filtered_items
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        let total = model.total_pages();
        prop_assert_eq!(total, filtered.len().div_ceil(size));

        let mut seen = Vec::new();
        for page in 1..=total {
            model.set_page(page);
            let view = model.view();
            prop_assert!(!view.page_items.is_empty());
            prop_assert!(view.page_items.len() <= size);
            seen.extend(view.page_items.iter().map(|i| i.id.to_string()));
        }
        prop_assert_eq!(seen, filtered);

        model.set_page(total + 1);
        prop_assert!(model.view().page_items.is_empty());
    }

    #[test]
    fn filter_keeps_only_the_selected_category(
        items in items_strategy(),
        category in category_strategy(),
    ) {
        let mut model = ListingModel::new(items, 5);
        model.set_category_filter(category.clone());
        let view = model.view();
        if category.is_empty() {
            prop_assert_eq!(view.filtered_items.len(), model.items().len());
        } else {
            prop_assert!(view
                .filtered_items
                .iter()
                .all(|i| i.category.as_deref() == Some(category.as_str())));
        }
    }

    #[test]
    fn changing_category_returns_to_page_one(
        items in items_strategy(),
        page in 1..8usize,
        category in category_strategy(),
    ) {
        let mut model = ListingModel::new(items, 2);
        model.set_page(page);
        model.set_category_filter(category);
        prop_assert_eq!(model.current_page(), 1);
    }

    #[test]
    fn categories_are_sorted_distinct_and_non_empty(items in items_strategy()) {
        let model = ListingModel::new(items, 3);
        let categories = model.categories();
        prop_assert!(categories.iter().all(|c| !c.is_empty()));
        prop_assert!(categories.windows(2).all(|w| w[0] < w[1]));
        for item in model.items() {
            if let Some(c) = item.category.as_deref().filter(|c| !c.is_empty()) {
                prop_assert!(categories.iter().any(|k| k == c));
            }
        }
    }

    #[test]
    fn clamp_page_stays_in_range(items in items_strategy(), page in 0..100usize) {
        let model = ListingModel::new(items, 4);
        let clamped = model.clamp_page(page);
        prop_assert!(clamped >= 1);
        prop_assert!(clamped <= model.total_pages().max(1));
    }

    #[test]
    fn pagination_is_hidden_for_a_single_page(total in 0..20usize, current in 1..20usize) {
        let control = Pagination::new(total, current.min(total.max(1)));
        prop_assert_eq!(control.is_none(), total <= 1);
        if let Some(control) = control {
            prop_assert_eq!(control.pages.len(), total);
            prop_assert!(control.previous >= 1 && control.next <= total);
        }
    }
}
