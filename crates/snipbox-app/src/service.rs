use garde::Validate as _;
use snipbox_dal::{
    snippet::{Snippet, SnippetRepository},
    Pool,
};
use snipbox_types::SnippetPayload;
use tracing::debug;

use crate::state::AppState;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] garde::Report),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(snipbox_dal::Error),
}

impl From<snipbox_dal::Error> for ServiceError {
    fn from(value: snipbox_dal::Error) -> Self {
        match value {
            snipbox_dal::Error::RecordNotFound(what) => ServiceError::NotFound(what),
            other => ServiceError::Storage(other),
        }
    }
}

/// Snippet operations as offered to API callers.
///
/// Payloads are validated here, before storage is touched.
pub struct SnippetService {
    repository: SnippetRepository,
}

impl SnippetService {
    pub fn new(pool: Pool) -> Self {
        Self {
            repository: SnippetRepository::new(pool),
        }
    }

    pub async fn list_snippets(&self) -> ServiceResult<Vec<Snippet>> {
        let snippets = self.repository.list().await?;
        Ok(snippets)
    }

    pub async fn get_snippet(&self, id: &str) -> ServiceResult<Snippet> {
        let snippet = self.repository.get(id).await?;
        Ok(snippet)
    }

    pub async fn create_snippet(&self, payload: SnippetPayload) -> ServiceResult<Snippet> {
        payload.validate()?;
        let snippet = self.repository.create(payload).await?;
        Ok(snippet)
    }

    pub async fn update_snippet(&self, id: &str, payload: SnippetPayload) -> ServiceResult<Snippet> {
        payload.validate()?;
        let snippet = self.repository.update(id, payload).await?;
        Ok(snippet)
    }

    /// Succeeds also when there was nothing to delete
    pub async fn delete_snippet(&self, id: &str) -> ServiceResult<()> {
        if !self.repository.delete(id).await? {
            debug!("Snippet {id} did not exist");
        }
        Ok(())
    }
}

impl axum::extract::FromRequestParts<AppState> for SnippetService {
    type Rejection = http::StatusCode;

    fn from_request_parts(
        _parts: &mut http::request::Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = std::result::Result<Self, Self::Rejection>> + Send {
        futures::future::ready(Ok(SnippetService::new(state.pool().clone())))
    }
}
