use crate::{ChosenDB, Error, error::Result};
use futures::TryStreamExt as _;
use serde::{Deserialize, Serialize};
use snipbox_types::SnippetPayload;
use sqlx::{Pool, types::Json};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
    #[sqlx(json)]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const SELECT_ALL: &str = "SELECT id, title, description, code, language, tags, created_at, updated_at FROM snippet ORDER BY julianday(created_at) DESC, rowid DESC";
const SELECT_ONE: &str = "SELECT id, title, description, code, language, tags, created_at, updated_at FROM snippet WHERE id = ?";
const INSERT: &str = "INSERT INTO snippet (id, title, description, code, language, tags, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const UPDATE: &str = "UPDATE snippet SET title = ?1, description = ?2, code = ?3, language = ?4, tags = ?5, \
    updated_at = CASE WHEN julianday(?6) > julianday(updated_at) THEN ?6 ELSE updated_at END \
    WHERE id = ?7 \
    RETURNING id, title, description, code, language, tags, created_at, updated_at";
const DELETE: &str = "DELETE FROM snippet WHERE id = ?";
const COUNT: &str = "SELECT count(*) FROM snippet";

pub type SnippetRepository = SnippetRepositoryImpl<Pool<ChosenDB>>;

/// Storage of snippets, payload is expected to be validated by caller.
pub struct SnippetRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> SnippetRepositoryImpl<E>
where
    for<'a> &'a E:
        sqlx::Executor<'c, Database = ChosenDB> + sqlx::Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// All snippets, newest first
    pub async fn list(&self) -> Result<Vec<Snippet>> {
        let records = sqlx::query_as::<_, Snippet>(SELECT_ALL)
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.executor)
            .await?;
        Ok(count.max(0) as u64)
    }

    pub async fn get(&self, id: &str) -> Result<Snippet> {
        get(id, &self.executor).await
    }

    pub async fn create(&self, payload: SnippetPayload) -> Result<Snippet> {
        let id = Uuid::new_v4().to_string();
        let now = OffsetDateTime::now_utc();
        let tags = payload.tags();
        sqlx::query(INSERT)
            .bind(&id)
            .bind(&payload.title)
            .bind(&payload.description)
            .bind(&payload.code)
            .bind(&payload.language)
            .bind(Json(&tags))
            .bind(now)
            .bind(now)
            .execute(&self.executor)
            .await?;
        debug!(%id, language = %payload.language, tags = tags.len(), "Created snippet");

        self.get(&id).await
    }

    /// Replaces all editable fields, `updated_at` never moves backwards.
    ///
    /// Single statement, concurrent updates are serialized by SQLite and last write wins.
    pub async fn update(&self, id: &str, payload: SnippetPayload) -> Result<Snippet> {
        let now = OffsetDateTime::now_utc();
        let tags = payload.tags();
        let record = sqlx::query_as::<_, Snippet>(UPDATE)
            .bind(&payload.title)
            .bind(&payload.description)
            .bind(&payload.code)
            .bind(&payload.language)
            .bind(Json(&tags))
            .bind(now)
            .bind(id)
            .fetch_optional(&self.executor)
            .await?
            .ok_or_else(|| Error::RecordNotFound(format!("Snippet {id}")))?;
        debug!(%id, language = %payload.language, tags = tags.len(), "Updated snippet");
        Ok(record)
    }

    /// Returns whether a record was actually removed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let res = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.executor)
            .await?;
        let deleted = res.rows_affected() > 0;
        debug!(%id, deleted, "Deleted snippet");
        Ok(deleted)
    }
}

async fn get<'c, E>(id: &str, executor: E) -> Result<Snippet>
where
    E: sqlx::Executor<'c, Database = ChosenDB>,
{
    sqlx::query_as::<_, Snippet>(SELECT_ONE)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| Error::RecordNotFound(format!("Snippet {id}")))
}
