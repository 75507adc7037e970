use hermes_core::{update, AppState, Effect, ModalAlert, ModalState, Msg};

#[test]
fn close_after_set_active_returns_to_idle() {
    let mut modal = ModalState::default();
    assert!(modal.set_active(ModalAlert::DraftCreated));
    assert!(modal.active().is_some());

    modal.close();
    assert!(modal.active().is_none());
}

#[test]
fn close_when_idle_is_a_no_op() {
    let mut modal = ModalState::default();
    modal.close();
    assert!(modal.active().is_none());
}

#[test]
fn a_new_alert_fully_replaces_the_previous_one() {
    let mut modal = ModalState::default();
    modal.set_active(ModalAlert::DocTransferred {
        new_owner: "ada@example.com".to_string(),
    });
    modal.set_active(ModalAlert::DraftCreated);

    assert_eq!(modal.active(), Some(&ModalAlert::DraftCreated));
}

#[test]
fn hidden_doc_created_alert_is_suppressed() {
    let mut modal = ModalState::default();
    assert!(modal.hide_doc_created());
    assert!(!modal.hide_doc_created());

    assert!(!modal.set_active(ModalAlert::DocCreated));
    assert!(modal.active().is_none());

    // Other kinds are unaffected by the preference.
    assert!(modal.set_active(ModalAlert::DraftCreated));
}

#[test]
fn dismissing_with_the_preference_persists_the_session() {
    let state = AppState::new();
    let (state, effects) = update(state, Msg::ModalRequested(ModalAlert::DocCreated));
    assert!(effects.is_empty());
    assert_eq!(state.view().active_modal, Some(ModalAlert::DocCreated));

    let (state, effects) = update(
        state,
        Msg::ModalDismissed {
            hide_doc_created: true,
        },
    );
    assert_eq!(state.view().active_modal, None);
    match effects.as_slice() {
        [Effect::PersistSession { snapshot }] => {
            assert!(snapshot.doc_created_modal_is_hidden);
        }
        other => panic!("expected a persist effect, got {other:?}"),
    }

    // The preference only needs persisting once.
    let (state, _) = update(state, Msg::ModalRequested(ModalAlert::DocCreated));
    assert_eq!(state.view().active_modal, None);
    let (_, effects) = update(
        state,
        Msg::ModalDismissed {
            hide_doc_created: true,
        },
    );
    assert!(effects.is_empty());
}
