use hermes_core::{resolve_direction, SortDirection, SortLabel, SORT_BY_DATE_ASC};

#[test]
fn date_asc_resolves_ascending() {
    assert_eq!(resolve_direction(SORT_BY_DATE_ASC), SortDirection::Asc);
}

#[test]
fn everything_else_resolves_descending() {
    for sort_by in ["dateDesc", "", "dateasc", "DATEASC", "createdTime", "  dateAsc"] {
        assert_eq!(
            resolve_direction(sort_by),
            SortDirection::Desc,
            "sort token {sort_by:?}"
        );
    }
}

#[test]
fn labels_follow_direction() {
    assert_eq!(
        SortLabel::for_direction(SortDirection::Desc),
        SortLabel::Newest
    );
    assert_eq!(
        SortLabel::for_direction(SortDirection::Asc),
        SortLabel::Oldest
    );
}
