use std::future::Future;
use std::path::Path;

use crate::{
    foundation::error::{ShowreelError, ShowreelResult},
    projects::model::{ErrorBody, ProjectRecord, RECENT_PROJECTS_ENDPOINT, RecentProjectsBody},
};

/// Where project records come from.
pub trait ProjectSource {
    /// Fetch the current list of recent projects.
    fn fetch_recent(&self) -> impl Future<Output = ShowreelResult<Vec<ProjectRecord>>> + Send;
}

/// Projects API over HTTP: `GET <base>/get-recent-projects`.
#[derive(Clone, Debug)]
pub struct HttpProjectSource {
    client: reqwest::Client,
    base: String,
}

impl HttpProjectSource {
    /// Client for the API rooted at `base` (a trailing `/` is tolerated).
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{RECENT_PROJECTS_ENDPOINT}",
            self.base.trim_end_matches('/')
        )
    }
}

impl ProjectSource for HttpProjectSource {
    #[tracing::instrument(skip(self), fields(url = %self.endpoint_url()))]
    async fn fetch_recent(&self) -> ShowreelResult<Vec<ProjectRecord>> {
        let url = self.endpoint_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ShowreelError::fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShowreelError::fetch(format!("read body of {url}: {e}")))?;

        if status.is_success() {
            let body: RecentProjectsBody = serde_json::from_slice(&bytes)
                .map_err(|e| ShowreelError::fetch(format!("parse body of {url}: {e}")))?;
            let projects = body.into_projects();
            tracing::debug!(count = projects.len(), "fetched recent projects");
            return Ok(projects);
        }

        // An unparseable failure body is a fetch fault, not a server message.
        let body: ErrorBody = serde_json::from_slice(&bytes).map_err(|e| {
            ShowreelError::fetch(format!("parse error body of {url} ({status}): {e}"))
        })?;
        Err(ShowreelError::server(status.as_u16(), body.message))
    }
}

/// Fixed in-memory list; handy offline and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticProjectSource {
    projects: Vec<ProjectRecord>,
}

impl StaticProjectSource {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Read a file shaped like the API's success body (`{ "projects": [...] }`).
    pub fn from_json_file(path: &Path) -> ShowreelResult<Self> {
        let src = std::fs::read_to_string(path)
            .map_err(|e| ShowreelError::fetch(format!("read '{}': {e}", path.display())))?;
        let body: RecentProjectsBody = serde_json::from_str(&src)
            .map_err(|e| ShowreelError::serde(format!("parse '{}': {e}", path.display())))?;
        Ok(Self::new(body.into_projects()))
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }
}

impl ProjectSource for StaticProjectSource {
    async fn fetch_recent(&self) -> ShowreelResult<Vec<ProjectRecord>> {
        Ok(self.projects.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projects/source.rs"]
mod tests;
