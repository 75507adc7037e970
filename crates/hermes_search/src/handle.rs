use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use hermes_logging::hermes_debug;

use crate::client::{HttpSearchBackend, SearchBackend};
use crate::{ClientSettings, DraftsResponse, HermesDocument, SearchError, SearchRequest, SearchResponse};

/// A fetch issued on behalf of a navigation. The generation is opaque here;
/// the caller uses it to tie completions back to the navigation that asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    FetchDocs {
        generation: u64,
        request: SearchRequest,
    },
    FetchDrafts {
        generation: u64,
        query_string: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    DocsResolved {
        generation: u64,
        result: Result<SearchResponse<HermesDocument>, SearchError>,
    },
    DraftsResolved {
        generation: u64,
        result: Result<DraftsResponse, SearchError>,
    },
}

/// Bridges the async backend into a synchronous event loop: commands go in
/// over a channel, completions are drained with `try_recv`. In-flight
/// fetches are never cancelled; superseded completions are dropped by the
/// caller's generation check.
pub struct SearchHandle {
    cmd_tx: mpsc::Sender<SearchCommand>,
    event_rx: Mutex<mpsc::Receiver<SearchEvent>>,
}

impl SearchHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<SearchCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(HttpSearchBackend::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn enqueue(&self, command: SearchCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<SearchEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    backend: &dyn SearchBackend,
    command: SearchCommand,
    event_tx: mpsc::Sender<SearchEvent>,
) {
    match command {
        SearchCommand::FetchDocs {
            generation,
            request,
        } => {
            hermes_debug!("search index={} generation={}", request.index, generation);
            let result = backend.search(&request).await;
            let _ = event_tx.send(SearchEvent::DocsResolved { generation, result });
        }
        SearchCommand::FetchDrafts {
            generation,
            query_string,
        } => {
            hermes_debug!("drafts fetch generation={}", generation);
            let result = backend.drafts(&query_string).await;
            let _ = event_tx.send(SearchEvent::DraftsResolved { generation, result });
        }
    }
}
