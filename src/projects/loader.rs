use crate::{
    foundation::error::{ShowreelError, ShowreelResult},
    projects::{model::ProjectRecord, source::ProjectSource},
};

/// Shown when the server fails without a usable message.
pub const SERVER_FALLBACK_MESSAGE: &str = "Failed to fetch projects";
/// Shown for transport and parse failures.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching projects";

/// Loader state. `Loading` moves exactly once to one of the terminal states.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Vec<ProjectRecord>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn items(&self) -> &[ProjectRecord] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }

    /// Collapse a fetch result into the state the user sees.
    pub fn settle(result: ShowreelResult<Vec<ProjectRecord>>) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(err) => Self::Failed(user_message(&err)),
        }
    }
}

/// The single user-visible string for any load failure.
pub fn user_message(err: &ShowreelError) -> String {
    match err {
        ShowreelError::Server {
            message: Some(m), ..
        } if !m.is_empty() => m.clone(),
        ShowreelError::Server { .. } => SERVER_FALLBACK_MESSAGE.to_owned(),
        _ => FETCH_FAILED_MESSAGE.to_owned(),
    }
}

/// Proof that a fetch was started; consumed exactly once by completion.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub(crate) generation: u64,
}

/// A finished fetch waiting to be applied to its component.
#[derive(Debug)]
pub struct FetchOutcome {
    pub(crate) ticket: FetchTicket,
    pub(crate) result: ShowreelResult<Vec<ProjectRecord>>,
}

impl FetchOutcome {
    pub fn result(&self) -> &ShowreelResult<Vec<ProjectRecord>> {
        &self.result
    }
}

/// Run the fetch for `ticket`. Does not touch any component state.
pub async fn run_fetch<S: ProjectSource>(ticket: FetchTicket, source: &S) -> FetchOutcome {
    let result = source.fetch_recent().await;
    match &result {
        Ok(items) => tracing::info!(count = items.len(), "recent projects loaded"),
        Err(err @ ShowreelError::Server { status, .. }) => {
            tracing::warn!(status, %err, "projects API returned an error")
        }
        Err(err) => tracing::error!(%err, "fetching recent projects failed"),
    }
    FetchOutcome { ticket, result }
}

#[cfg(test)]
#[path = "../../tests/unit/projects/loader.rs"]
mod tests;
