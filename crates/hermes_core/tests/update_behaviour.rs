use std::sync::Once;

use hermes_core::{
    update, AppState, Effect, FacetCounts, ListQueryParams, Msg, RouteModel, RouteName,
    SessionSnapshot, SortDirection, RECENTLY_VIEWED_LIMIT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hermes_logging::initialize_for_tests);
}

fn navigate(state: AppState, route: RouteName, raw_query: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::TransitionTo {
            route,
            raw_query: raw_query.to_string(),
        },
    )
}

fn empty_model(sorted_by: &str) -> RouteModel {
    RouteModel {
        sorted_by: sorted_by.to_string(),
        docs: Vec::new(),
        facets: FacetCounts::new(),
        page: 1,
        nb_pages: 1,
        nb_hits: 0,
    }
}

#[test]
fn default_load_applies_route_defaults() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = navigate(state, RouteName::AllDocuments, "");

    assert_eq!(
        effects,
        vec![Effect::FetchModel {
            route: RouteName::AllDocuments,
            generation: 1,
            params: ListQueryParams::default(),
        }]
    );

    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.page, 1);
    assert_eq!(view.sort_direction, SortDirection::Desc);
    assert!(!view.any_filters_active);
    assert!(view.dirty);
}

#[test]
fn filtered_ascending_query_flows_to_the_view() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = navigate(
        state,
        RouteName::AllDocuments,
        "sortBy=dateAsc&status=In-Review",
    );

    let params = match effects.as_slice() {
        [Effect::FetchModel { params, .. }] => params.clone(),
        other => panic!("expected a fetch effect, got {other:?}"),
    };
    assert_eq!(params.sort_by, "dateAsc");
    assert_eq!(params.status, vec!["In-Review"]);

    assert!(state.filters().is_active("In-Review"));
    assert!(state.filters().any_active());

    // The sort arrow stays descending until the model resolves with the
    // sort key the fetch ran with.
    assert_eq!(state.view().sort_direction, SortDirection::Desc);

    let (state, effects) = update(
        state,
        Msg::ModelResolved {
            generation: 1,
            model: empty_model("dateAsc"),
        },
    );
    assert!(effects.is_empty());

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.sort_direction, SortDirection::Asc);
    assert!(view.any_filters_active);
}

#[test]
fn stale_resolutions_are_dropped() {
    init_logging();
    let state = AppState::new();
    let (state, _) = navigate(state, RouteName::AllDocuments, "");
    let (mut state, _) = navigate(state, RouteName::AllDocuments, "status=WIP");
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::ModelResolved {
            generation: 1,
            model: empty_model("dateAsc"),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().loading);
    // A dropped resolution does not schedule a render.
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::ModelResolved {
            generation: 2,
            model: empty_model("dateDesc"),
        },
    );
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.sort_direction, SortDirection::Desc);
}

#[test]
fn failed_fetches_surface_a_flash_message() {
    init_logging();
    let state = AppState::new();
    let (state, _) = navigate(state, RouteName::Projects, "");

    let (state, effects) = update(
        state,
        Msg::ModelFailed {
            generation: 1,
            message: "search backend returned 503".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.flash.as_deref(), Some("search backend returned 503"));

    // The flash clears on the next navigation.
    let (state, _) = navigate(state, RouteName::Projects, "");
    assert_eq!(state.view().flash, None);
}

#[test]
fn viewed_documents_accumulate_most_recent_first() {
    init_logging();
    let mut state = AppState::new();

    for doc_id in ["doc-1", "doc-2", "doc-1", "doc-3"] {
        let (next, _) = update(
            state,
            Msg::DocumentViewed {
                doc_id: doc_id.to_string(),
            },
        );
        state = next;
    }

    assert_eq!(state.view().recently_viewed, ["doc-3", "doc-1", "doc-2"]);
}

#[test]
fn repeat_view_of_the_current_document_does_not_persist() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::DocumentViewed {
            doc_id: "doc-1".to_string(),
        },
    );
    assert_eq!(effects.len(), 1);

    let (_, effects) = update(
        state,
        Msg::DocumentViewed {
            doc_id: "doc-1".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn recently_viewed_is_capped() {
    init_logging();
    let mut state = AppState::new();
    for n in 0..(RECENTLY_VIEWED_LIMIT + 5) {
        let (next, _) = update(
            state,
            Msg::DocumentViewed {
                doc_id: format!("doc-{n}"),
            },
        );
        state = next;
    }

    let recent = state.view().recently_viewed;
    assert_eq!(recent.len(), RECENTLY_VIEWED_LIMIT);
    let newest = format!("doc-{}", RECENTLY_VIEWED_LIMIT + 4);
    assert_eq!(recent.first(), Some(&newest));
}

#[test]
fn restored_sessions_populate_the_view() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::RestoreSession(SessionSnapshot {
            recently_viewed: vec!["doc-9".to_string(), "doc-4".to_string()],
            doc_created_modal_is_hidden: true,
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().recently_viewed, ["doc-9", "doc-4"]);
}
