use std::collections::{BTreeMap, VecDeque};

use crate::view_model::{build_view, AppViewModel};
use crate::{FacetName, FilterState, ListQueryParams, ModalAlert, ModalState, RouteName};

pub type Generation = u64;

/// Most recently viewed documents kept per session.
pub const RECENTLY_VIEWED_LIMIT: usize = 10;

/// Facet value counts per category, as reported by the search collaborator.
pub type FacetCounts = BTreeMap<FacetName, BTreeMap<String, u64>>;

/// One document row of a resolved list model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSummary {
    pub id: String,
    pub title: String,
    pub doc_type: String,
    pub status: String,
    pub product: String,
    pub owners: Vec<String>,
    /// Epoch seconds; absent for drafts that were never saved.
    pub modified_time: Option<i64>,
}

/// What a completed fetch carries into the state: the resolved dataset plus
/// the sort token that was in effect when the fetch was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteModel {
    pub sorted_by: String,
    pub docs: Vec<DocSummary>,
    pub facets: FacetCounts,
    pub page: u32,
    pub nb_pages: u32,
    pub nb_hits: u64,
}

/// Session data that survives a restart: restored on launch, persisted by
/// the shell whenever it changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub recently_viewed: Vec<String>,
    pub doc_created_modal_is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: Option<RouteName>,
    params: ListQueryParams,
    generation: Generation,
    loading: bool,
    model: Option<RouteModel>,
    flash: Option<String>,
    filters: FilterState,
    modal: ModalState,
    recently_viewed: VecDeque<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        build_view(self)
    }

    /// Starts a navigation: records the route and params, refreshes the
    /// filter store, and issues a new generation for the model fetch.
    /// The previous model stays visible until the fetch resolves.
    pub(crate) fn begin_transition(
        &mut self,
        route: RouteName,
        params: ListQueryParams,
    ) -> Generation {
        self.generation += 1;
        self.route = Some(route);
        self.filters.update(&params);
        self.params = params;
        self.loading = true;
        self.flash = None;
        self.dirty = true;
        self.generation
    }

    /// Installs a resolved model. Resolutions carrying a stale generation
    /// belong to a superseded navigation and are dropped.
    pub(crate) fn apply_model(&mut self, generation: Generation, model: RouteModel) -> bool {
        if generation != self.generation {
            return false;
        }
        self.model = Some(model);
        self.loading = false;
        self.dirty = true;
        true
    }

    /// Surfaces a fetch failure as a flash message. Same staleness rule as
    /// `apply_model`.
    pub(crate) fn apply_model_failure(&mut self, generation: Generation, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.model = None;
        self.loading = false;
        self.flash = Some(message);
        self.dirty = true;
        true
    }

    /// Pushes a document onto the recently-viewed list: most recent first,
    /// de-duplicated, capped. Returns false when nothing changed.
    pub(crate) fn record_view(&mut self, doc_id: String) -> bool {
        if self.recently_viewed.front() == Some(&doc_id) {
            return false;
        }
        self.recently_viewed.retain(|id| id != &doc_id);
        self.recently_viewed.push_front(doc_id);
        self.recently_viewed.truncate(RECENTLY_VIEWED_LIMIT);
        self.dirty = true;
        true
    }

    pub(crate) fn open_modal(&mut self, alert: ModalAlert) -> bool {
        let shown = self.modal.set_active(alert);
        if shown {
            self.dirty = true;
        }
        shown
    }

    /// Closes the active modal. Returns true when the doc-created
    /// preference was newly recorded and needs persisting.
    pub(crate) fn dismiss_modal(&mut self, hide_doc_created: bool) -> bool {
        let had_active = self.modal.active().is_some();
        self.modal.close();
        let newly_hidden = hide_doc_created && self.modal.hide_doc_created();
        if had_active || newly_hidden {
            self.dirty = true;
        }
        newly_hidden
    }

    pub(crate) fn restore_session(&mut self, snapshot: SessionSnapshot) {
        self.recently_viewed = snapshot
            .recently_viewed
            .into_iter()
            .take(RECENTLY_VIEWED_LIMIT)
            .collect();
        if snapshot.doc_created_modal_is_hidden {
            self.modal.hide_doc_created();
        }
        self.dirty = true;
    }

    pub(crate) fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            recently_viewed: self.recently_viewed.iter().cloned().collect(),
            doc_created_modal_is_hidden: self.modal.doc_created_is_hidden(),
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn route(&self) -> Option<RouteName> {
        self.route
    }

    pub(crate) fn params(&self) -> &ListQueryParams {
        &self.params
    }

    pub(crate) fn loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn model(&self) -> Option<&RouteModel> {
        self.model.as_ref()
    }

    pub(crate) fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub(crate) fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub(crate) fn recently_viewed(&self) -> &VecDeque<String> {
        &self.recently_viewed
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }
}
