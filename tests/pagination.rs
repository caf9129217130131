use record_mapper::pagination::{Limit, Pagination};
use serde_json::json;

#[test]
fn total_pages_rounds_up_partial_pages() {
    let limit = Limit::new(21, 1, Vec::new(), 10);
    assert_eq!(limit.total_pages(), 3);
    assert_eq!(limit.last_page(), 3);
    assert_eq!(limit.first_page(), 1);
    assert!(limit.has_last_page());
}

#[test]
fn exact_multiple_has_no_extra_page() {
    let limit = Limit::new(20, 2, Vec::new(), 10);
    assert_eq!(limit.total_pages(), 2);
    assert_eq!(limit.next_page(), 0);
    assert!(!limit.has_next_page());
    assert_eq!(limit.previous_page(), 1);
}

#[test]
fn first_page_has_no_previous_page() {
    let limit = Limit::new(50, 1, Vec::new(), 10);
    assert_eq!(limit.previous_page(), 0);
    assert!(!limit.has_previous_page());
    assert_eq!(limit.next_page(), 2);
}

#[test]
fn empty_total_disables_every_page() {
    let limit = Limit::new(0, 3, Vec::new(), 10);
    assert_eq!(limit.first_page(), 0);
    assert!(!limit.has_first_page());
    assert_eq!(limit.total_pages(), 0);
    assert_eq!(limit.next_page(), 0);
    assert_eq!(limit.previous_page(), 0);
    assert_eq!(limit.current_page(), 3);
    assert_eq!(limit.total_items(), 0);
}

#[test]
fn items_are_capped_to_one_page() {
    let items = (0..5).map(|i| json!(i)).collect::<Vec<_>>();
    let limit = Limit::new(5, 1, items.clone(), 2);
    assert_eq!(limit.items(), &items[..2]);
    assert!(limit.has_items());

    let unbounded = Limit::new(5, 1, items.clone(), 0);
    assert_eq!(unbounded.items().len(), 5);
    assert_eq!(unbounded.total_pages(), 0);
}

#[test]
fn default_limit_has_no_items() {
    assert!(!Limit::default().has_items());
}

#[test]
fn largest_current_page_has_no_next_page() {
    let limit: Limit = serde_json::from_value(json!({
        "totalItems": 30,
        "currentPage": usize::MAX,
        "itemsPerPage": 10
    }))
    .unwrap();
    assert_eq!(limit.next_page(), 0);
    assert!(!limit.has_next_page());
    assert_eq!(limit.previous_page(), usize::MAX - 1);
}
