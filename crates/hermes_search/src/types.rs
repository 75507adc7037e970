use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Facet name -> value -> hit count, as reported by the backend.
pub type FacetMap = BTreeMap<String, BTreeMap<String, u64>>;

/// Response shape of `/api/v2/search/{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    pub hits: Vec<T>,
    pub nb_hits: u64,
    /// 0-based on the wire; the UI shows it 1-based.
    pub page: u32,
    pub nb_pages: u32,
    pub hits_per_page: u32,
    #[serde(default)]
    pub facets: Option<FacetMap>,
    #[serde(default, rename = "processingTimeMS")]
    pub processing_time_ms: Option<u64>,
}

/// Response shape of `/api/v1/drafts`. The drafts endpoint predates the
/// search one and capitalizes its hits field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftsResponse {
    #[serde(default)]
    pub facets: Option<FacetMap>,
    #[serde(rename = "Hits")]
    pub hits: Vec<HermesDocument>,
    #[serde(default)]
    pub params: String,
    pub page: u32,
    #[serde(rename = "nbPages")]
    pub nb_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HermesDocument {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub doc_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub created_time: Option<i64>,
    #[serde(default)]
    pub modified_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("backend returned http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}
