use std::time::Duration;

use crate::{DraftsResponse, HermesDocument, SearchError, SearchRequest, SearchResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<HermesDocument>, SearchError>;

    async fn drafts(&self, query_string: &str) -> Result<DraftsResponse, SearchError>;
}

#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    settings: ClientSettings,
}

impl HttpSearchBackend {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, SearchError> {
        let raw = format!("{}{}", self.settings.api_base.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw).map_err(|err| SearchError::InvalidUrl(err.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(err.to_string())
    }
}

#[async_trait::async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<HermesDocument>, SearchError> {
        let url = self.endpoint(&format!("/api/v2/search/{}", request.index))?;
        let response = self
            .build_client()?
            .post(url)
            .json(&request.query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|err| SearchError::Decode(err.to_string()))
    }

    async fn drafts(&self, query_string: &str) -> Result<DraftsResponse, SearchError> {
        let url = self.endpoint(&format!("/api/v1/drafts?{query_string}"))?;
        let response = self
            .build_client()?
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|err| SearchError::Decode(err.to_string()))
    }
}
