/// A transient notification dialog. The payload a kind needs travels with
/// its variant, so producers and the rendering site share one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAlert {
    DocCreated,
    DraftCreated,
    DocTransferred { new_owner: String },
}

impl ModalAlert {
    pub fn kind(&self) -> &'static str {
        match self {
            ModalAlert::DocCreated => "doc-created",
            ModalAlert::DraftCreated => "draft-created",
            ModalAlert::DocTransferred { .. } => "doc-transferred",
        }
    }
}

/// At most one modal is active at a time. A new request replaces any prior
/// active modal unconditionally; there is no queue of pending alerts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    active: Option<ModalAlert>,
    doc_created_is_hidden: bool,
}

impl ModalState {
    /// Activates `alert`, replacing whatever was active. Returns false when
    /// the alert is suppressed by the user's doc-created preference.
    pub fn set_active(&mut self, alert: ModalAlert) -> bool {
        if alert == ModalAlert::DocCreated && self.doc_created_is_hidden {
            return false;
        }
        self.active = Some(alert);
        true
    }

    /// Clears the active modal and its payload. Closing an idle store is a
    /// no-op, not an error.
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&ModalAlert> {
        self.active.as_ref()
    }

    /// Records the "don't show this again" preference for the doc-created
    /// modal. Returns true the first time the preference is set.
    pub fn hide_doc_created(&mut self) -> bool {
        let newly_hidden = !self.doc_created_is_hidden;
        self.doc_created_is_hidden = true;
        newly_hidden
    }

    pub fn doc_created_is_hidden(&self) -> bool {
        self.doc_created_is_hidden
    }
}
