const DOC_LIST_PARAMS: &[&str] = &["docType", "owners", "page", "product", "sortBy", "status"];
const MY_DOCUMENTS_PARAMS: &[&str] = &["page", "sortBy", "includeSharedDrafts"];
const MY_DRAFTS_PARAMS: &[&str] = &["page", "sortBy"];
const PROJECT_PARAMS: &[&str] = &["page", "status"];
const RESULTS_PARAMS: &[&str] = &[
    "docType", "owners", "page", "product", "sortBy", "status", "q", "scope",
];

/// The filterable/sortable list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    AllDocuments,
    Drafts,
    MyDocuments,
    MyDrafts,
    MyPublished,
    ProductAreas,
    Projects,
    Results,
}

/// Which collaborator endpoint feeds a route's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    DocsIndex,
    ProjectsIndex,
    DraftsEndpoint,
}

impl RouteName {
    pub fn path(self) -> &'static str {
        match self {
            RouteName::AllDocuments => "/all",
            RouteName::Drafts => "/drafts",
            RouteName::MyDocuments => "/my/documents",
            RouteName::MyDrafts => "/my/drafts",
            RouteName::MyPublished => "/my/published",
            RouteName::ProductAreas => "/product-areas",
            RouteName::Projects => "/projects",
            RouteName::Results => "/results",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        const ROUTES: [RouteName; 8] = [
            RouteName::AllDocuments,
            RouteName::Drafts,
            RouteName::MyDocuments,
            RouteName::MyDrafts,
            RouteName::MyPublished,
            RouteName::ProductAreas,
            RouteName::Projects,
            RouteName::Results,
        ];
        ROUTES.into_iter().find(|route| route.path() == path)
    }

    /// The subset of the shared parameter table this route declares.
    pub fn recognized_params(self) -> &'static [&'static str] {
        match self {
            RouteName::AllDocuments
            | RouteName::Drafts
            | RouteName::MyPublished
            | RouteName::ProductAreas => DOC_LIST_PARAMS,
            RouteName::MyDocuments => MY_DOCUMENTS_PARAMS,
            RouteName::MyDrafts => MY_DRAFTS_PARAMS,
            RouteName::Projects => PROJECT_PARAMS,
            RouteName::Results => RESULTS_PARAMS,
        }
    }

    pub fn recognizes(self, name: &str) -> bool {
        self.recognized_params().contains(&name)
    }

    pub fn data_source(self) -> DataSource {
        match self {
            RouteName::AllDocuments
            | RouteName::MyPublished
            | RouteName::ProductAreas
            | RouteName::Results => DataSource::DocsIndex,
            RouteName::Projects => DataSource::ProjectsIndex,
            RouteName::Drafts | RouteName::MyDocuments | RouteName::MyDrafts => {
                DataSource::DraftsEndpoint
            }
        }
    }
}
