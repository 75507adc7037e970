//! Hermes core: pure client-side state machine and view-model helpers.
mod effect;
mod filters;
mod modal;
mod msg;
mod params;
mod routes;
mod sort;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filters::{FacetName, FilterState};
pub use modal::{ModalAlert, ModalState};
pub use msg::Msg;
pub use params::{param_spec, ListQueryParams, ParamKind, ParamSpec, SearchScope, LIST_PARAMS};
pub use routes::{DataSource, RouteName};
pub use sort::{
    resolve_direction, SortDirection, SortLabel, SORT_BY_DATE_ASC, SORT_BY_DATE_DESC,
};
pub use state::{
    AppState, DocSummary, FacetCounts, Generation, RouteModel, SessionSnapshot,
    RECENTLY_VIEWED_LIMIT,
};
pub use update::update;
pub use view_model::{
    AppViewModel, DocRowView, FacetValueView, FilterChip, STATUS_FACET_ALLOWLIST,
};
