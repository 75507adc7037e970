use std::fmt;

/// Sort token selecting oldest-first ordering.
pub const SORT_BY_DATE_ASC: &str = "dateAsc";
/// Sort token selecting newest-first ordering. Default for every list route.
pub const SORT_BY_DATE_DESC: &str = "dateDesc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Maps a sort token to a direction.
///
/// Total over all strings: only `dateAsc` sorts ascending, anything else,
/// including empty and unrecognized tokens, sorts descending. Call sites pass
/// this straight from URL query strings, so the fallback must hold for
/// arbitrary input.
pub fn resolve_direction(sort_by: &str) -> SortDirection {
    match sort_by {
        SORT_BY_DATE_ASC => SortDirection::Asc,
        _ => SortDirection::Desc,
    }
}

/// Human-facing label for the toolbar sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortLabel {
    Newest,
    Oldest,
}

impl SortLabel {
    pub fn for_direction(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Desc => SortLabel::Newest,
            SortDirection::Asc => SortLabel::Oldest,
        }
    }
}

impl fmt::Display for SortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortLabel::Newest => write!(f, "Newest"),
            SortLabel::Oldest => write!(f, "Oldest"),
        }
    }
}
