use hermes_core::{FacetName, FilterState, ListQueryParams};

fn params_with_status(values: &[&str]) -> ListQueryParams {
    ListQueryParams {
        status: values.iter().map(ToString::to_string).collect(),
        ..Default::default()
    }
}

#[test]
fn empty_params_mean_nothing_active() {
    let mut filters = FilterState::default();
    filters.update(&ListQueryParams::default());

    assert!(!filters.any_active());
    assert!(!filters.is_active("In-Review"));
}

#[test]
fn values_from_any_category_are_active() {
    let mut filters = FilterState::default();
    filters.update(&ListQueryParams {
        doc_type: vec!["RFC".to_string()],
        owners: vec!["ada@example.com".to_string()],
        ..Default::default()
    });

    assert!(filters.any_active());
    assert!(filters.is_active("RFC"));
    assert!(filters.is_active("ada@example.com"));
    assert!(!filters.is_active("PRD"));
}

#[test]
fn update_replaces_wholesale() {
    let mut filters = FilterState::default();
    filters.update(&params_with_status(&["WIP", "Approved"]));
    filters.update(&params_with_status(&["Obsolete"]));

    assert!(filters.is_active("Obsolete"));
    assert!(!filters.is_active("WIP"));
    assert!(!filters.is_active("Approved"));
}

#[test]
fn update_is_idempotent() {
    let params = params_with_status(&["WIP"]);
    let mut once = FilterState::default();
    once.update(&params);
    let mut twice = once.clone();
    twice.update(&params);

    assert_eq!(once, twice);
}

#[test]
fn duplicate_values_collapse() {
    let mut filters = FilterState::default();
    filters.update(&params_with_status(&["WIP", "WIP"]));

    assert_eq!(filters.values(FacetName::Status).len(), 1);
}

#[test]
fn toggling_an_unselected_value_adds_it_and_resets_page() {
    let mut filters = FilterState::default();
    filters.update(&params_with_status(&["WIP"]));

    let pairs = filters.toggled(FacetName::DocType, "RFC");

    assert!(pairs.contains(&("docType", "RFC".to_string())));
    assert!(pairs.contains(&("status", "WIP".to_string())));
    assert!(pairs.contains(&("page", "1".to_string())));
}

#[test]
fn toggling_a_selected_value_removes_it_everywhere() {
    let mut filters = FilterState::default();
    filters.update(&ListQueryParams {
        status: vec!["WIP".to_string(), "Approved".to_string()],
        ..Default::default()
    });

    let pairs = filters.toggled(FacetName::Status, "WIP");

    assert!(!pairs.iter().any(|(_, value)| value == "WIP"));
    assert!(pairs.contains(&("status", "Approved".to_string())));
    // Removal keeps the current page.
    assert!(!pairs.iter().any(|(key, _)| *key == "page"));
}
