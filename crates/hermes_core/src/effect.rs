#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the search collaborator for the route's model. The generation
    /// ties the eventual resolution back to the navigation that issued it.
    FetchModel {
        route: crate::RouteName,
        generation: crate::Generation,
        params: crate::ListQueryParams,
    },
    /// Write the session snapshot to disk.
    PersistSession { snapshot: crate::SessionSnapshot },
}
