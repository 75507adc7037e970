use crate::{FacetName, RouteName, SORT_BY_DATE_DESC};

/// How a recognized query parameter is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Multi-select filter; repeated keys accumulate.
    Facet(FacetName),
    /// 1-based positive page number.
    Page,
    /// Raw sort token, resolved to a direction on read.
    SortBy,
    /// Free-text search query.
    Query,
    /// Search scope selector.
    Scope,
    /// Boolean toggle; only the literal `true` enables it.
    Flag,
}

/// One entry of the shared query-parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// Whether a change to this parameter re-fetches the route model.
    pub refreshes_model: bool,
}

/// Every query parameter any list route recognizes. Routes declare their
/// subset by name; keys outside a route's subset are ignored when parsing.
pub const LIST_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "docType",
        kind: ParamKind::Facet(FacetName::DocType),
        refreshes_model: true,
    },
    ParamSpec {
        name: "owners",
        kind: ParamKind::Facet(FacetName::Owners),
        refreshes_model: true,
    },
    ParamSpec {
        name: "page",
        kind: ParamKind::Page,
        refreshes_model: true,
    },
    ParamSpec {
        name: "product",
        kind: ParamKind::Facet(FacetName::Product),
        refreshes_model: true,
    },
    ParamSpec {
        name: "sortBy",
        kind: ParamKind::SortBy,
        refreshes_model: true,
    },
    ParamSpec {
        name: "status",
        kind: ParamKind::Facet(FacetName::Status),
        refreshes_model: true,
    },
    ParamSpec {
        name: "q",
        kind: ParamKind::Query,
        refreshes_model: true,
    },
    ParamSpec {
        name: "scope",
        kind: ParamKind::Scope,
        refreshes_model: true,
    },
    ParamSpec {
        name: "includeSharedDrafts",
        kind: ParamKind::Flag,
        refreshes_model: true,
    },
];

pub fn param_spec(name: &str) -> Option<&'static ParamSpec> {
    LIST_PARAMS.iter().find(|spec| spec.name == name)
}

/// Which slice of the index a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Docs,
    Projects,
}

impl SearchScope {
    /// Unrecognized scopes widen to `All` rather than failing.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "docs" => SearchScope::Docs,
            "projects" => SearchScope::Projects,
            _ => SearchScope::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Docs => "docs",
            SearchScope::Projects => "projects",
        }
    }
}

/// The canonical parameter shape shared by every list-style route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryParams {
    pub doc_type: Vec<String>,
    pub owners: Vec<String>,
    pub page: u32,
    pub product: Vec<String>,
    pub sort_by: String,
    pub status: Vec<String>,
    pub q: String,
    pub scope: SearchScope,
    pub include_shared_drafts: bool,
}

impl Default for ListQueryParams {
    fn default() -> Self {
        Self {
            doc_type: Vec::new(),
            owners: Vec::new(),
            page: 1,
            product: Vec::new(),
            sort_by: SORT_BY_DATE_DESC.to_string(),
            status: Vec::new(),
            q: String::new(),
            scope: SearchScope::default(),
            include_shared_drafts: false,
        }
    }
}

impl ListQueryParams {
    /// Decodes a raw query string into the parameters `route` recognizes.
    ///
    /// Unrecognized keys are ignored. Missing keys keep their defaults.
    /// A `page` value that does not parse as a positive integer is treated
    /// as absent.
    pub fn from_query(route: RouteName, raw_query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
            let Some(spec) = param_spec(&key) else {
                continue;
            };
            if !route.recognizes(spec.name) {
                continue;
            }
            match spec.kind {
                ParamKind::Facet(facet) => {
                    params.facet_values_mut(facet).push(value.into_owned());
                }
                ParamKind::Page => {
                    if let Some(page) = value.parse::<u32>().ok().filter(|page| *page >= 1) {
                        params.page = page;
                    }
                }
                ParamKind::SortBy => params.sort_by = value.into_owned(),
                ParamKind::Query => params.q = value.into_owned(),
                ParamKind::Scope => params.scope = SearchScope::parse(&value),
                ParamKind::Flag => params.include_shared_drafts = value == "true",
            }
        }
        params
    }

    pub fn facet_values(&self, facet: FacetName) -> &[String] {
        match facet {
            FacetName::DocType => &self.doc_type,
            FacetName::Owners => &self.owners,
            FacetName::Product => &self.product,
            FacetName::Status => &self.status,
        }
    }

    fn facet_values_mut(&mut self, facet: FacetName) -> &mut Vec<String> {
        match facet {
            FacetName::DocType => &mut self.doc_type,
            FacetName::Owners => &mut self.owners,
            FacetName::Product => &mut self.product,
            FacetName::Status => &mut self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_facet_keys_accumulate() {
        let params =
            ListQueryParams::from_query(RouteName::AllDocuments, "status=WIP&status=Approved");
        assert_eq!(params.status, vec!["WIP", "Approved"]);
    }

    #[test]
    fn malformed_page_falls_back_to_one() {
        for raw in ["page=0", "page=-3", "page=abc", "page="] {
            let params = ListQueryParams::from_query(RouteName::AllDocuments, raw);
            assert_eq!(params.page, 1, "raw query {raw:?}");
        }
    }

    #[test]
    fn keys_outside_the_route_subset_are_ignored() {
        let params =
            ListQueryParams::from_query(RouteName::MyDrafts, "status=WIP&page=3&q=memo");
        assert!(params.status.is_empty());
        assert!(params.q.is_empty());
        assert_eq!(params.page, 3);
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let params = ListQueryParams::from_query(
            RouteName::AllDocuments,
            "product=Cloud%20Platform&sortBy=dateAsc",
        );
        assert_eq!(params.product, vec!["Cloud Platform"]);
        assert_eq!(params.sort_by, "dateAsc");
    }

    #[test]
    fn scope_defaults_to_all_for_unknown_values() {
        let params = ListQueryParams::from_query(RouteName::Results, "q=infra&scope=bogus");
        assert_eq!(params.scope, SearchScope::All);
        assert_eq!(params.q, "infra");
    }
}
