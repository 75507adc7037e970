use pretty_assertions::assert_eq;

use hermes_search::{
    drafts_query_string, index_for_sort, SearchQuery, DOC_FACET_NAMES, HITS_PER_PAGE,
    MAX_VALUES_PER_FACET,
};

#[test]
fn index_replica_follows_the_sort_token() {
    assert_eq!(index_for_sort("docs", "dateAsc"), "docs_createdTime_asc");
    assert_eq!(index_for_sort("docs", "dateDesc"), "docs_createdTime_desc");
}

#[test]
fn unknown_sort_tokens_pick_the_descending_replica() {
    for sort_by in ["", "dateasc", "title", "DATEASC"] {
        assert_eq!(
            index_for_sort("docs", sort_by),
            "docs_createdTime_desc",
            "sort token {sort_by:?}"
        );
    }
}

#[test]
fn queries_convert_the_ui_page_to_zero_based() {
    assert_eq!(SearchQuery::new("", 1).page, 0);
    assert_eq!(SearchQuery::new("", 3).page, 2);
    // A malformed page that slipped through still cannot underflow.
    assert_eq!(SearchQuery::new("", 0).page, 0);
}

#[test]
fn queries_carry_the_shared_limits() {
    let query = SearchQuery::new("terraform", 1);
    assert_eq!(query.hits_per_page, HITS_PER_PAGE);
    assert_eq!(query.max_values_per_facet, MAX_VALUES_PER_FACET);
    assert_eq!(query.q, "terraform");
}

#[test]
fn facet_filters_group_values_per_facet() {
    let query = SearchQuery::new("", 1)
        .with_facets(&DOC_FACET_NAMES)
        .with_facet_filter("docType", &["RFC".to_string(), "PRD".to_string()])
        .with_facet_filter("owners", &[])
        .with_facet_filter("status", &["WIP".to_string()]);

    assert_eq!(
        query.facet_filters,
        vec![
            vec!["docType:RFC".to_string(), "docType:PRD".to_string()],
            vec!["status:WIP".to_string()],
        ]
    );
    assert_eq!(query.facets, DOC_FACET_NAMES.map(String::from).to_vec());
}

#[test]
fn queries_serialize_camel_case_for_the_wire() {
    let query = SearchQuery::new("vault", 2).with_facet_filter("status", &["WIP".to_string()]);
    let value = serde_json::to_value(&query).unwrap();

    assert_eq!(value["q"], "vault");
    assert_eq!(value["page"], 1);
    assert_eq!(value["hitsPerPage"], 12);
    assert_eq!(value["maxValuesPerFacet"], 100);
    assert_eq!(value["facetFilters"][0][0], "status:WIP");
}

#[test]
fn drafts_query_string_matches_the_endpoint_contract() {
    let query = drafts_query_string(2, "dateDesc", "testuser@example.com");
    assert_eq!(
        query,
        "hitsPerPage=12&maxValuesPerFacet=1&page=1&sortBy=dateDesc&ownerEmail=testuser%40example.com"
    );
}
