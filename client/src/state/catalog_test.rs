use super::*;
use crate::data::dataset::campus;
use crate::data::types::{ItemId, LatLng};

struct Item {
    id: ItemId,
    category: &'static str,
}

impl CatalogItem for Item {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        "item"
    }

    fn category(&self) -> &str {
        self.category
    }

    fn coordinates(&self) -> LatLng {
        LatLng { lat: 0.0, lng: 0.0 }
    }
}

fn items() -> Vec<Item> {
    ["a", "b", "a", "c", "a", "b", "a"]
        .iter()
        .zip(1..)
        .map(|(category, id)| Item { id, category: *category })
        .collect()
}

fn ids(items: &[&Item]) -> Vec<ItemId> {
    items.iter().map(|i| i.id).collect()
}

// =============================================================
// CategoryFilter
// =============================================================

#[test]
fn parse_maps_sentinel_and_blank_to_all() {
    assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("   "), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("sports"), CategoryFilter::Key("sports".to_owned()));
}

#[test]
fn as_value_round_trips_through_select() {
    assert_eq!(CategoryFilter::All.as_value(), "all");
    assert_eq!(CategoryFilter::Key("arts".to_owned()).as_value(), "arts");
}

#[test]
fn filtering_by_key_keeps_only_that_category() {
    let all = items();
    let filtered = filter_items(&all, &CategoryFilter::Key("a".to_owned()));
    assert_eq!(ids(&filtered), vec![1, 3, 5, 7]);
    assert!(filtered.iter().all(|i| i.category == "a"));
}

#[test]
fn filtering_by_all_returns_everything_in_order() {
    let all = items();
    let filtered = filter_items(&all, &CategoryFilter::All);
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn every_campus_category_filters_to_matching_events() {
    let dataset = campus();
    for category in &dataset.categories {
        let filter = CategoryFilter::Key(category.value.clone());
        let filtered = filter_items(&dataset.events, &filter);
        assert!(filtered.iter().all(|e| e.category == category.value));
        let expected = dataset.events.iter().filter(|e| e.category == category.value).count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn unknown_category_yields_empty_result() {
    let all = items();
    assert!(filter_items(&all, &CategoryFilter::Key("zzz".to_owned())).is_empty());
}

// =============================================================
// Pager
// =============================================================

#[test]
fn first_page_is_a_prefix_of_page_size() {
    let all = items();
    let pager = Pager::new(3);
    assert_eq!(ids(&pager.visible(&all)), vec![1, 2, 3]);
    assert!(pager.has_more(all.len()));
}

#[test]
fn load_more_extends_prefix_and_caps_at_total() {
    let all = items();
    let mut pager = Pager::new(3);
    pager.load_more();
    assert_eq!(pager.visible(&all).len(), 6);
    pager.load_more();
    assert_eq!(pager.visible(&all).len(), 7);
    assert!(!pager.has_more(all.len()));
    pager.load_more();
    assert_eq!(pager.visible(&all).len(), 7);
}

#[test]
fn set_filter_resets_to_first_page() {
    let all = items();
    let mut pager = Pager::new(2);
    pager.load_more();
    pager.load_more();
    assert_eq!(pager.page(), 3);

    pager.set_filter(CategoryFilter::Key("a".to_owned()));
    assert_eq!(pager.page(), 1);
    assert_eq!(ids(&pager.visible(&all)), vec![1, 3]);
}

#[test]
fn empty_filtered_list_has_no_more() {
    let pager = Pager::new(4);
    assert_eq!(pager.visible_len(0), 0);
    assert!(!pager.has_more(0));
}

#[test]
fn zero_page_size_is_clamped_to_one() {
    let pager = Pager::new(0);
    assert_eq!(pager.page_size(), 1);
    assert_eq!(pager.visible_len(5), 1);
}
