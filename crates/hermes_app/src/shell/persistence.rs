use std::fs;
use std::path::Path;

use chrono::Utc;
use hermes_core::SessionSnapshot;
use hermes_logging::{hermes_error, hermes_info, hermes_warn};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".hermes_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    recently_viewed: Vec<String>,
    doc_created_modal_is_hidden: bool,
    saved_at: Option<String>,
}

pub(crate) fn load_session(state_dir: &Path) -> SessionSnapshot {
    let path = state_dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SessionSnapshot::default();
        }
        Err(err) => {
            hermes_warn!("Failed to read persisted session from {:?}: {}", path, err);
            return SessionSnapshot::default();
        }
    };

    let session: PersistedSession = match ron::from_str(&content) {
        Ok(session) => session,
        Err(err) => {
            hermes_warn!("Failed to parse persisted session from {:?}: {}", path, err);
            return SessionSnapshot::default();
        }
    };

    hermes_info!("Loaded persisted session from {:?}", path);
    SessionSnapshot {
        recently_viewed: session.recently_viewed,
        doc_created_modal_is_hidden: session.doc_created_modal_is_hidden,
    }
}

pub(crate) fn save_session(state_dir: &Path, snapshot: &SessionSnapshot) {
    let session = PersistedSession {
        recently_viewed: snapshot.recently_viewed.clone(),
        doc_created_modal_is_hidden: snapshot.doc_created_modal_is_hidden,
        saved_at: Some(Utc::now().to_rfc3339()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            hermes_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    // Write-then-rename so a crash mid-write cannot corrupt the session.
    let path = state_dir.join(SESSION_FILENAME);
    let tmp = state_dir.join(format!("{SESSION_FILENAME}.tmp"));
    if let Err(err) = fs::write(&tmp, &content).and_then(|()| fs::rename(&tmp, &path)) {
        hermes_error!("Failed to write persisted session to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SessionSnapshot {
            recently_viewed: vec!["doc-2".to_string(), "doc-1".to_string()],
            doc_created_modal_is_hidden: true,
        };

        save_session(dir.path(), &snapshot);
        let restored = load_session(dir.path());

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn missing_files_mean_an_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_session(dir.path()), SessionSnapshot::default());
    }

    #[test]
    fn corrupt_files_degrade_to_an_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILENAME), "not ron at all {{{").unwrap();

        assert_eq!(load_session(dir.path()), SessionSnapshot::default());
    }

    #[test]
    fn saving_twice_keeps_the_latest_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        save_session(
            dir.path(),
            &SessionSnapshot {
                recently_viewed: vec!["doc-1".to_string()],
                doc_created_modal_is_hidden: false,
            },
        );
        let latest = SessionSnapshot {
            recently_viewed: vec!["doc-3".to_string(), "doc-1".to_string()],
            doc_created_modal_is_hidden: false,
        };
        save_session(dir.path(), &latest);

        assert_eq!(load_session(dir.path()), latest);
    }
}
