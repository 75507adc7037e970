use std::collections::BTreeSet;

use crate::ListQueryParams;

/// The facet categories a document list can be narrowed by.
/// Fixed and exhaustive; every list screen shares the same four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetName {
    DocType,
    Owners,
    Product,
    Status,
}

impl FacetName {
    pub const ALL: [FacetName; 4] = [
        FacetName::DocType,
        FacetName::Owners,
        FacetName::Product,
        FacetName::Status,
    ];

    /// The key this facet uses in URL query strings.
    pub fn query_key(self) -> &'static str {
        match self {
            FacetName::DocType => "docType",
            FacetName::Owners => "owners",
            FacetName::Product => "product",
            FacetName::Status => "status",
        }
    }

    /// The label the facet dropdown shows for this category.
    pub fn label(self) -> &'static str {
        match self {
            FacetName::DocType => "Type",
            FacetName::Owners => "Owner",
            FacetName::Product => "Product/Area",
            FacetName::Status => "Status",
        }
    }
}

/// Session-lifetime record of which filters are currently active, replaced
/// wholesale from the current route's query parameters on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    doc_type: BTreeSet<String>,
    owners: BTreeSet<String>,
    product: BTreeSet<String>,
    status: BTreeSet<String>,
}

impl FilterState {
    /// Replaces all four category sets from the filterable params.
    pub fn update(&mut self, params: &ListQueryParams) {
        self.doc_type = params.doc_type.iter().cloned().collect();
        self.owners = params.owners.iter().cloned().collect();
        self.product = params.product.iter().cloned().collect();
        self.status = params.status.iter().cloned().collect();
    }

    /// Whether `value` appears in any category.
    pub fn is_active(&self, value: &str) -> bool {
        FacetName::ALL
            .iter()
            .any(|facet| self.values(*facet).contains(value))
    }

    /// Whether any category has at least one selected value.
    pub fn any_active(&self) -> bool {
        FacetName::ALL
            .iter()
            .any(|facet| !self.values(*facet).is_empty())
    }

    pub fn values(&self, facet: FacetName) -> &BTreeSet<String> {
        match facet {
            FacetName::DocType => &self.doc_type,
            FacetName::Owners => &self.owners,
            FacetName::Product => &self.product,
            FacetName::Status => &self.status,
        }
    }

    /// The query pairs a facet dropdown item should link to.
    ///
    /// If the clicked value is already selected it is removed from every
    /// category; otherwise it is added to `facet` and the page resets to 1.
    /// The removal branch intentionally leaves the page untouched.
    pub fn toggled(&self, facet: FacetName, value: &str) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.is_active(value) {
            for name in FacetName::ALL {
                for selected in self.values(name) {
                    if selected != value {
                        pairs.push((name.query_key(), selected.clone()));
                    }
                }
            }
        } else {
            for name in FacetName::ALL {
                for selected in self.values(name) {
                    pairs.push((name.query_key(), selected.clone()));
                }
                if name == facet {
                    pairs.push((name.query_key(), value.to_string()));
                }
            }
            pairs.push(("page", "1".to_string()));
        }
        pairs
    }
}
