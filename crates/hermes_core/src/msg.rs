#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Browser-style navigation to a list route with its raw query string.
    TransitionTo {
        route: crate::RouteName,
        raw_query: String,
    },
    /// The search collaborator resolved a navigation's model.
    ModelResolved {
        generation: crate::Generation,
        model: crate::RouteModel,
    },
    /// The search collaborator failed to resolve a navigation.
    ModelFailed {
        generation: crate::Generation,
        message: String,
    },
    /// User opened a document; feeds the recently-viewed list.
    DocumentViewed { doc_id: String },
    /// A component requested a transient modal alert.
    ModalRequested(crate::ModalAlert),
    /// User dismissed the active modal, optionally asking never to see the
    /// doc-created one again.
    ModalDismissed { hide_doc_created: bool },
    /// Restore persisted session data on launch.
    RestoreSession(crate::SessionSnapshot),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
