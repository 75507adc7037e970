use hermes_core::{ModalAlert, Msg, RouteName};

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open { route: RouteName, raw_query: String },
    View { doc_id: String },
    Modal(ModalAlert),
    Dismiss { hide_doc_created: bool },
    Quit,
}

impl ShellCommand {
    pub fn into_msg(self) -> Option<Msg> {
        match self {
            ShellCommand::Open { route, raw_query } => {
                Some(Msg::TransitionTo { route, raw_query })
            }
            ShellCommand::View { doc_id } => Some(Msg::DocumentViewed { doc_id }),
            ShellCommand::Modal(alert) => Some(Msg::ModalRequested(alert)),
            ShellCommand::Dismiss { hide_doc_created } => {
                Some(Msg::ModalDismissed { hide_doc_created })
            }
            ShellCommand::Quit => None,
        }
    }
}

const HELP: &str = "commands:\n  \
    open <path>[?query]   e.g. open /all?status=In-Review&sortBy=dateAsc\n  \
    view <doc-id>\n  \
    modal doc-created | draft-created | doc-transferred <new-owner>\n  \
    dismiss [forever]\n  \
    quit";

/// Splits a browser-style location into its route and raw query string.
pub fn parse_location(location: &str) -> Result<(RouteName, String), String> {
    let (path, raw_query) = match location.split_once('?') {
        Some((path, query)) => (path, query),
        None => (location, ""),
    };
    match RouteName::from_path(path) {
        Some(route) => Ok((route, raw_query.to_string())),
        None => Err(format!("unknown route {path:?}")),
    }
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("open") => {
            let location = words.next().ok_or_else(|| HELP.to_string())?;
            let (route, raw_query) = parse_location(location)?;
            Ok(ShellCommand::Open { route, raw_query })
        }
        Some("view") => {
            let doc_id = words.next().ok_or_else(|| HELP.to_string())?;
            Ok(ShellCommand::View {
                doc_id: doc_id.to_string(),
            })
        }
        Some("modal") => match words.next() {
            Some("doc-created") => Ok(ShellCommand::Modal(ModalAlert::DocCreated)),
            Some("draft-created") => Ok(ShellCommand::Modal(ModalAlert::DraftCreated)),
            Some("doc-transferred") => {
                let new_owner = words.next().ok_or_else(|| HELP.to_string())?;
                Ok(ShellCommand::Modal(ModalAlert::DocTransferred {
                    new_owner: new_owner.to_string(),
                }))
            }
            _ => Err(HELP.to_string()),
        },
        Some("dismiss") => Ok(ShellCommand::Dismiss {
            hide_doc_created: words.next() == Some("forever"),
        }),
        Some("quit") | Some("exit") => Ok(ShellCommand::Quit),
        _ => Err(HELP.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_split_into_route_and_query() {
        let (route, raw_query) =
            parse_location("/all?status=In-Review&sortBy=dateAsc").unwrap();
        assert_eq!(route, RouteName::AllDocuments);
        assert_eq!(raw_query, "status=In-Review&sortBy=dateAsc");

        let (route, raw_query) = parse_location("/my/drafts").unwrap();
        assert_eq!(route, RouteName::MyDrafts);
        assert_eq!(raw_query, "");
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert!(parse_location("/settings").is_err());
    }

    #[test]
    fn modal_commands_carry_their_payload() {
        let command = parse_command("modal doc-transferred ada@example.com").unwrap();
        assert_eq!(
            command,
            ShellCommand::Modal(ModalAlert::DocTransferred {
                new_owner: "ada@example.com".to_string(),
            })
        );
    }

    #[test]
    fn dismiss_forever_sets_the_preference_flag() {
        assert_eq!(
            parse_command("dismiss forever").unwrap(),
            ShellCommand::Dismiss {
                hide_doc_created: true,
            }
        );
        assert_eq!(
            parse_command("dismiss").unwrap(),
            ShellCommand::Dismiss {
                hide_doc_created: false,
            }
        );
    }

    #[test]
    fn garbage_gets_the_help_text() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("").is_err());
    }
}
