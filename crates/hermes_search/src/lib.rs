//! Hermes search collaborator: typed payloads and async access to the
//! document search backend and the drafts endpoint.
mod client;
mod handle;
mod request;
mod types;

pub use client::{ClientSettings, HttpSearchBackend, SearchBackend};
pub use handle::{SearchCommand, SearchEvent, SearchHandle};
pub use request::{
    drafts_query_string, index_for_sort, SearchQuery, SearchRequest, DOC_FACET_NAMES,
    HITS_PER_PAGE, MAX_VALUES_PER_FACET, PROJECT_FACET_NAMES,
};
pub use types::{DraftsResponse, FacetMap, HermesDocument, SearchError, SearchResponse};
