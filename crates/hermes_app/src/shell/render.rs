use hermes_core::{AppViewModel, ModalAlert, SortDirection};

/// Renders the view model as the plain-text equivalent of the list screen:
/// toolbar line, filter chips, document rows, pagination, and any active
/// modal or flash message.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = Vec::new();

    let route = view
        .route
        .map(|route| route.path().to_string())
        .unwrap_or_else(|| "(no route)".to_string());
    let arrow = match view.sort_direction {
        SortDirection::Asc => "^",
        SortDirection::Desc => "v",
    };
    let mut header = format!("[{}] sort: {} {}", route, view.sort_label(), arrow);
    if view.loading {
        header.push_str(" (loading)");
    }
    lines.push(header);

    if let Some(flash) = &view.flash {
        lines.push(format!("! {flash}"));
    }

    if view.any_filters_active {
        let chips: Vec<String> = view
            .filter_chips
            .iter()
            .map(|chip| format!("{}: {}", chip.facet.label(), chip.value))
            .collect();
        lines.push(format!("filters: {}", chips.join(" | ")));
    }

    if !view.statuses.is_empty() {
        let statuses: Vec<String> = view
            .statuses
            .iter()
            .map(|status| {
                let marker = if status.is_selected { "*" } else { " " };
                format!("[{marker}] {} ({})", status.value, status.count)
            })
            .collect();
        lines.push(format!("statuses: {}", statuses.join("  ")));
    }

    for doc in &view.docs {
        lines.push(format!(
            "  {} ({} / {} / {}) {}",
            doc.title, doc.doc_type, doc.status, doc.product, doc.owner
        ));
    }

    if view.nb_pages > 0 {
        lines.push(format!(
            "page {} of {} ({} documents)",
            view.page, view.nb_pages, view.nb_hits
        ));
    }

    if let Some(modal) = &view.active_modal {
        lines.push(render_modal(modal));
    }

    if !view.recently_viewed.is_empty() {
        lines.push(format!("recently viewed: {}", view.recently_viewed.join(", ")));
    }

    lines.join("\n")
}

fn render_modal(modal: &ModalAlert) -> String {
    match modal {
        ModalAlert::DocCreated => "*** Your document has been published ***".to_string(),
        ModalAlert::DraftCreated => "*** Your draft has been created ***".to_string(),
        ModalAlert::DocTransferred { new_owner } => {
            format!("*** Ownership transferred to {new_owner} ***")
        }
    }
}
