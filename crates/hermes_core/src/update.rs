use crate::{AppState, Effect, ListQueryParams, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// All mutations happen synchronously on the shell's single consumer loop,
/// so calls are totally ordered as issued.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TransitionTo { route, raw_query } => {
            let params = ListQueryParams::from_query(route, &raw_query);
            let generation = state.begin_transition(route, params.clone());
            vec![Effect::FetchModel {
                route,
                generation,
                params,
            }]
        }
        Msg::ModelResolved { generation, model } => {
            // A resolution tagged with an old generation raced a newer
            // navigation; dropping it keeps the view consistent with the
            // params the user last requested.
            state.apply_model(generation, model);
            Vec::new()
        }
        Msg::ModelFailed {
            generation,
            message,
        } => {
            state.apply_model_failure(generation, message);
            Vec::new()
        }
        Msg::DocumentViewed { doc_id } => {
            if state.record_view(doc_id) {
                vec![Effect::PersistSession {
                    snapshot: state.session_snapshot(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ModalRequested(alert) => {
            state.open_modal(alert);
            Vec::new()
        }
        Msg::ModalDismissed { hide_doc_created } => {
            if state.dismiss_modal(hide_doc_created) {
                vec![Effect::PersistSession {
                    snapshot: state.session_snapshot(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::RestoreSession(snapshot) => {
            state.restore_session(snapshot);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
