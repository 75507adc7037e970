use std::env;
use std::path::PathBuf;

use super::logging::LogDestination;

/// Environment-driven shell configuration. Every knob has a default good
/// enough for a local backend, so a bare `hermes_app` starts up.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub api_base: String,
    pub docs_index_name: String,
    pub projects_index_name: String,
    pub owner_email: String,
    pub log_destination: LogDestination,
    pub state_dir: PathBuf,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: string_var("HERMES_WEB_API", "http://127.0.0.1:8000"),
            docs_index_name: string_var("HERMES_DOCS_INDEX", "docs"),
            projects_index_name: string_var("HERMES_PROJECTS_INDEX", "projects"),
            owner_email: string_var("HERMES_OWNER_EMAIL", "testuser@example.com"),
            log_destination: log_destination_var("HERMES_LOG", LogDestination::File),
            state_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

fn string_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// The logger is not up yet while config loads, so misconfiguration goes
// straight to stderr.
fn log_destination_var(key: &str, default: LogDestination) -> LogDestination {
    match env::var(key) {
        Err(_) => default,
        Ok(raw) => LogDestination::parse(&raw).unwrap_or_else(|| {
            eprintln!("Warning: unrecognized {key}={raw:?}, defaulting to file logging");
            default
        }),
    }
}
