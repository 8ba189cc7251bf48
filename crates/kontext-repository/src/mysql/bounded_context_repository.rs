//! MySQL bounded context repository implementation.

use crate::{traits::BoundedContextRepository, DatabasePool};
use async_trait::async_trait;
use kontext_core::{BoundedContext, ContextId, KontextError, KontextResult, Repository};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL bounded context repository implementation.
#[derive(Clone)]
pub struct MySqlBoundedContextRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlBoundedContextRepository {
    /// Creates a new MySQL bounded context repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a bounded context record.
#[derive(Debug, FromRow)]
struct BoundedContextRow {
    id: i32,
    username: String,
    password: String,
}

impl From<BoundedContextRow> for BoundedContext {
    fn from(row: BoundedContextRow) -> Self {
        Self {
            id: ContextId::new(row.id),
            username: row.username,
            password: row.password,
        }
    }
}

#[async_trait]
impl Repository<BoundedContext, ContextId> for MySqlBoundedContextRepository {
    async fn find_by_id(&self, id: ContextId) -> KontextResult<Option<BoundedContext>> {
        debug!("Finding bounded context by id: {}", id);

        let row = sqlx::query_as::<_, BoundedContextRow>(
            r#"
            SELECT id, username, password
            FROM bounded_context
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(BoundedContext::from))
    }

    async fn find_all(&self) -> KontextResult<Vec<BoundedContext>> {
        debug!("Finding all bounded contexts");

        let rows = sqlx::query_as::<_, BoundedContextRow>(
            r#"
            SELECT id, username, password
            FROM bounded_context
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(BoundedContext::from).collect())
    }

    async fn save(&self, entity: &BoundedContext) -> KontextResult<BoundedContext> {
        debug!("Saving new bounded context: {}", entity.username);

        // MySQL doesn't support RETURNING, so insert then select by the
        // assigned id.
        let result = sqlx::query(
            r#"
            INSERT INTO bounded_context (username, password)
            VALUES (?, ?)
            "#,
        )
        .bind(&entity.username)
        .bind(&entity.password)
        .execute(self.pool.inner())
        .await?;

        let id = ContextId::new(result.last_insert_id() as i32);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| KontextError::Internal("Failed to fetch inserted record".to_string()))
    }

    async fn update(&self, entity: &BoundedContext) -> KontextResult<BoundedContext> {
        debug!("Updating bounded context: {}", entity.id);

        sqlx::query(
            r#"
            UPDATE bounded_context
            SET username = ?, password = ?
            WHERE id = ?
            "#,
        )
        .bind(&entity.username)
        .bind(&entity.password)
        .bind(entity.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| KontextError::Internal("Failed to fetch updated record".to_string()))
    }

    async fn delete_by_id(&self, id: ContextId) -> KontextResult<bool> {
        debug!("Deleting bounded context: {}", id);

        let result = sqlx::query("DELETE FROM bounded_context WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: ContextId) -> KontextResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM bounded_context WHERE id = ? LIMIT 1")
                .bind(id.into_inner())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn count(&self) -> KontextResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bounded_context")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl BoundedContextRepository for MySqlBoundedContextRepository {}

impl std::fmt::Debug for MySqlBoundedContextRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlBoundedContextRepository")
            .finish_non_exhaustive()
    }
}
