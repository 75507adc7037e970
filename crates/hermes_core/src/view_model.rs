use crate::sort::{resolve_direction, SortDirection, SortLabel};
use crate::{AppState, FacetName, ModalAlert, RouteName};

/// Statuses worth offering as filters; everything else the backend reports
/// (e.g. "Archived" variants from legacy imports) is dropped from the
/// dropdown.
pub const STATUS_FACET_ALLOWLIST: [&str; 5] =
    ["Approved", "In-Review", "In Review", "Obsolete", "WIP"];

/// One active-filter chip above the document list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub facet: FacetName,
    pub value: String,
}

/// One entry of a facet dropdown: a value, its hit count, and whether it is
/// currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValueView {
    pub value: String,
    pub count: u64,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRowView {
    pub id: String,
    pub title: String,
    pub doc_type: String,
    pub status: String,
    pub product: String,
    pub owner: String,
    pub modified_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: Option<RouteName>,
    pub loading: bool,
    pub sort_direction: SortDirection,
    pub any_filters_active: bool,
    pub filter_chips: Vec<FilterChip>,
    pub owner_facet_is_disabled: bool,
    pub statuses: Vec<FacetValueView>,
    pub docs: Vec<DocRowView>,
    pub page: u32,
    pub nb_pages: u32,
    pub nb_hits: u64,
    pub active_modal: Option<ModalAlert>,
    pub flash: Option<String>,
    pub recently_viewed: Vec<String>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn sort_label(&self) -> SortLabel {
        SortLabel::for_direction(self.sort_direction)
    }
}

pub(crate) fn build_view(state: &AppState) -> AppViewModel {
    // Mid-transition there is no resolved sort key yet; the resolver's
    // fallback keeps the arrow pointing descending.
    let sorted_by = state
        .model()
        .map(|model| model.sorted_by.as_str())
        .unwrap_or("");

    let filter_chips = FacetName::ALL
        .iter()
        .flat_map(|facet| {
            state.filters().values(*facet).iter().map(|value| FilterChip {
                facet: *facet,
                value: value.clone(),
            })
        })
        .collect();

    let statuses = state
        .model()
        .and_then(|model| model.facets.get(&FacetName::Status))
        .map(|counts| {
            counts
                .iter()
                .filter(|(value, _)| STATUS_FACET_ALLOWLIST.contains(&value.as_str()))
                .map(|(value, count)| FacetValueView {
                    value: value.clone(),
                    count: *count,
                    is_selected: state.filters().is_active(value),
                })
                .collect()
        })
        .unwrap_or_default();

    let docs = state
        .model()
        .map(|model| {
            model
                .docs
                .iter()
                .map(|doc| DocRowView {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    doc_type: doc.doc_type.clone(),
                    status: doc.status.clone(),
                    product: doc.product.clone(),
                    owner: doc.owners.first().cloned().unwrap_or_default(),
                    modified_time: doc.modified_time,
                })
                .collect()
        })
        .unwrap_or_default();

    AppViewModel {
        route: state.route(),
        loading: state.loading(),
        sort_direction: resolve_direction(sorted_by),
        any_filters_active: state.filters().any_active(),
        filter_chips,
        owner_facet_is_disabled: matches!(
            state.route(),
            Some(RouteName::MyDocuments | RouteName::MyDrafts)
        ),
        statuses,
        docs,
        page: state
            .model()
            .map(|model| model.page)
            .unwrap_or(state.params().page),
        nb_pages: state.model().map(|model| model.nb_pages).unwrap_or(0),
        nb_hits: state.model().map(|model| model.nb_hits).unwrap_or(0),
        active_modal: state.modal().active().cloned(),
        flash: state.flash().map(ToOwned::to_owned),
        recently_viewed: state.recently_viewed().iter().cloned().collect(),
        dirty: state.is_dirty(),
    }
}
