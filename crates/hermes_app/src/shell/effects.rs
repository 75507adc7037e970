use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use hermes_core::{
    DataSource, DocSummary, Effect, FacetCounts, FacetName, ListQueryParams, Msg, RouteModel,
    RouteName, SearchScope,
};
use hermes_logging::hermes_warn;
use hermes_search::{
    drafts_query_string, index_for_sort, ClientSettings, DraftsResponse, FacetMap,
    HermesDocument, SearchCommand, SearchEvent, SearchHandle, SearchQuery, SearchRequest,
    SearchResponse, DOC_FACET_NAMES, PROJECT_FACET_NAMES,
};

use super::app::ShellMsg;
use super::config::ShellConfig;
use super::persistence;

/// Context remembered per in-flight fetch so completions can be folded back
/// into a route model.
#[derive(Debug, Clone)]
struct PendingFetch {
    route: RouteName,
    sorted_by: String,
}

pub struct EffectRunner {
    handle: Arc<SearchHandle>,
    pending: Arc<Mutex<HashMap<u64, PendingFetch>>>,
    docs_index: String,
    projects_index: String,
    owner_email: String,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<ShellMsg>, config: &ShellConfig) -> Self {
        let handle = Arc::new(SearchHandle::new(ClientSettings {
            api_base: config.api_base.clone(),
            ..ClientSettings::default()
        }));
        let runner = Self {
            handle,
            pending: Arc::new(Mutex::new(HashMap::new())),
            docs_index: config.docs_index_name.clone(),
            projects_index: config.projects_index_name.clone(),
            owner_email: config.owner_email.clone(),
            state_dir: config.state_dir.clone(),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchModel {
                    route,
                    generation,
                    params,
                } => self.fetch_model(route, generation, params),
                Effect::PersistSession { snapshot } => {
                    persistence::save_session(&self.state_dir, &snapshot);
                }
            }
        }
    }

    fn fetch_model(&self, route: RouteName, generation: u64, params: ListQueryParams) {
        hermes_logging::set_nav_generation(generation);
        if let Ok(mut pending) = self.pending.lock() {
            pending.insert(
                generation,
                PendingFetch {
                    route,
                    sorted_by: params.sort_by.clone(),
                },
            );
        }

        let command = match route.data_source() {
            DataSource::DocsIndex => {
                // A project-scoped search swings to the projects replica.
                if route == RouteName::Results && params.scope == SearchScope::Projects {
                    SearchCommand::FetchDocs {
                        generation,
                        request: self.project_request(&params),
                    }
                } else {
                    SearchCommand::FetchDocs {
                        generation,
                        request: self.doc_request(&params),
                    }
                }
            }
            DataSource::ProjectsIndex => SearchCommand::FetchDocs {
                generation,
                request: self.project_request(&params),
            },
            DataSource::DraftsEndpoint => SearchCommand::FetchDrafts {
                generation,
                query_string: drafts_query_string(
                    params.page,
                    &params.sort_by,
                    &self.owner_email,
                ),
            },
        };
        self.handle.enqueue(command);
    }

    fn doc_request(&self, params: &ListQueryParams) -> SearchRequest {
        let index = index_for_sort(&self.docs_index, &params.sort_by);
        let query = SearchQuery::new(params.q.clone(), params.page)
            .with_facets(&DOC_FACET_NAMES)
            .with_facet_filter("docType", &params.doc_type)
            .with_facet_filter("owners", &params.owners)
            .with_facet_filter("product", &params.product)
            .with_facet_filter("status", &params.status);
        SearchRequest::new(index, query)
    }

    fn project_request(&self, params: &ListQueryParams) -> SearchRequest {
        let index = index_for_sort(&self.projects_index, &params.sort_by);
        let query = SearchQuery::new(params.q.clone(), params.page)
            .with_facets(&PROJECT_FACET_NAMES)
            .with_facet_filter("status", &params.status);
        SearchRequest::new(index, query)
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<ShellMsg>) {
        let handle = self.handle.clone();
        let pending = self.pending.clone();
        thread::spawn(move || loop {
            if let Some(event) = handle.try_recv() {
                let (generation, msg) = match event {
                    SearchEvent::DocsResolved { generation, result } => {
                        (generation, docs_event_msg(&pending, generation, result))
                    }
                    SearchEvent::DraftsResolved { generation, result } => {
                        (generation, drafts_event_msg(&pending, generation, result))
                    }
                };
                let Some(msg) = msg else { continue };
                hermes_logging::set_nav_generation(generation);
                if msg_tx.send(ShellMsg::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn take_pending(
    pending: &Mutex<HashMap<u64, PendingFetch>>,
    generation: u64,
) -> Option<PendingFetch> {
    let fetch = pending.lock().ok()?.remove(&generation);
    if fetch.is_none() {
        hermes_warn!("Completion for unknown fetch generation {}", generation);
    }
    fetch
}

fn docs_event_msg(
    pending: &Mutex<HashMap<u64, PendingFetch>>,
    generation: u64,
    result: Result<SearchResponse<HermesDocument>, hermes_search::SearchError>,
) -> Option<Msg> {
    let fetch = take_pending(pending, generation)?;
    Some(match result {
        Ok(response) => Msg::ModelResolved {
            generation,
            model: doc_model(&fetch, response),
        },
        Err(err) => {
            hermes_warn!("Fetch for {:?} failed: {}", fetch.route, err);
            Msg::ModelFailed {
                generation,
                message: err.to_string(),
            }
        }
    })
}

fn drafts_event_msg(
    pending: &Mutex<HashMap<u64, PendingFetch>>,
    generation: u64,
    result: Result<DraftsResponse, hermes_search::SearchError>,
) -> Option<Msg> {
    let fetch = take_pending(pending, generation)?;
    Some(match result {
        Ok(response) => Msg::ModelResolved {
            generation,
            model: drafts_model(&fetch, response),
        },
        Err(err) => {
            hermes_warn!("Drafts fetch for {:?} failed: {}", fetch.route, err);
            Msg::ModelFailed {
                generation,
                message: err.to_string(),
            }
        }
    })
}

fn doc_model(fetch: &PendingFetch, response: SearchResponse<HermesDocument>) -> RouteModel {
    RouteModel {
        sorted_by: fetch.sorted_by.clone(),
        docs: response.hits.into_iter().map(doc_summary).collect(),
        facets: facet_counts(response.facets),
        page: response.page + 1,
        nb_pages: response.nb_pages,
        nb_hits: response.nb_hits,
    }
}

fn drafts_model(fetch: &PendingFetch, response: DraftsResponse) -> RouteModel {
    let nb_hits = response.hits.len() as u64;
    RouteModel {
        sorted_by: fetch.sorted_by.clone(),
        docs: response.hits.into_iter().map(doc_summary).collect(),
        facets: facet_counts(response.facets),
        page: response.page + 1,
        nb_pages: response.nb_pages,
        nb_hits,
    }
}

fn doc_summary(doc: HermesDocument) -> DocSummary {
    DocSummary {
        id: doc.object_id,
        title: doc.title,
        doc_type: doc.doc_type,
        status: doc.status,
        product: doc.product,
        owners: doc.owners,
        modified_time: doc.modified_time,
    }
}

/// Folds the backend's string-keyed facet counts into the core's facet
/// categories; facet names outside the shared four are dropped.
fn facet_counts(facets: Option<FacetMap>) -> FacetCounts {
    let mut counts = FacetCounts::new();
    for (name, values) in facets.unwrap_or_default() {
        let Some(facet) = FacetName::ALL
            .into_iter()
            .find(|facet| facet.query_key() == name)
        else {
            continue;
        };
        counts.insert(facet, values);
    }
    counts
}
