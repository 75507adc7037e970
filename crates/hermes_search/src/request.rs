use serde::Serialize;

pub const HITS_PER_PAGE: u32 = 12;
pub const MAX_VALUES_PER_FACET: u32 = 100;

pub const DOC_FACET_NAMES: [&str; 4] = ["docType", "owners", "product", "status"];
pub const PROJECT_FACET_NAMES: [&str; 1] = ["status"];

/// Picks the per-sort index replica. Mirrors the toolbar's sort tokens:
/// only `dateAsc` selects the ascending replica.
pub fn index_for_sort(base_index: &str, sort_by: &str) -> String {
    if sort_by == "dateAsc" {
        format!("{base_index}_createdTime_asc")
    } else {
        format!("{base_index}_createdTime_desc")
    }
}

/// JSON body posted to `/api/v2/search/{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: String,
    pub page: u32,
    pub hits_per_page: u32,
    pub max_values_per_facet: u32,
    pub facets: Vec<String>,
    /// Groups are ANDed; values within a group are ORed.
    pub facet_filters: Vec<Vec<String>>,
}

impl SearchQuery {
    /// Starts a query for the given free-text term and 1-based UI page.
    pub fn new(q: impl Into<String>, ui_page: u32) -> Self {
        Self {
            q: q.into(),
            page: ui_page.saturating_sub(1),
            hits_per_page: HITS_PER_PAGE,
            max_values_per_facet: MAX_VALUES_PER_FACET,
            facets: Vec::new(),
            facet_filters: Vec::new(),
        }
    }

    pub fn with_facets(mut self, names: &[&str]) -> Self {
        self.facets = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Adds one `name:value` filter group. Empty selections add nothing.
    pub fn with_facet_filter(mut self, name: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.facet_filters.push(
                values
                    .iter()
                    .map(|value| format!("{name}:{value}"))
                    .collect(),
            );
        }
        self
    }
}

/// A fully addressed search: which index replica to hit and what to ask it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub index: String,
    pub query: SearchQuery,
}

impl SearchRequest {
    pub fn new(index: impl Into<String>, query: SearchQuery) -> Self {
        Self {
            index: index.into(),
            query,
        }
    }
}

/// Query string for the drafts endpoint. The endpoint caps facet values at
/// one per facet and always scopes to the owner's email.
pub fn drafts_query_string(ui_page: u32, sort_by: &str, owner_email: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("hitsPerPage", &HITS_PER_PAGE.to_string())
        .append_pair("maxValuesPerFacet", "1")
        .append_pair("page", &ui_page.saturating_sub(1).to_string())
        .append_pair("sortBy", sort_by)
        .append_pair("ownerEmail", owner_email)
        .finish()
}
