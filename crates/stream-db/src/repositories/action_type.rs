//! PostgreSQL implementation of ActionTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::ActionType;
use stream_core::traits::{ActionTypeRepository, NewActionType, RepoResult};
use stream_core::value_objects::RecordId;

use crate::models::ActionTypeModel;

use super::error::{duplicate_action_type, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ActionTypeRepository
#[derive(Clone)]
pub struct PgActionTypeRepository {
    pool: PgPool,
}

impl PgActionTypeRepository {
    /// Create a new PgActionTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionTypeRepository for PgActionTypeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ActionType>> {
        let result = sqlx::query_as::<_, ActionTypeModel>(
            r"
            SELECT id, name, verb, format, created_at
            FROM action_types
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ActionType::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ActionType>> {
        let result = sqlx::query_as::<_, ActionTypeModel>(
            r"
            SELECT id, name, verb, format, created_at
            FROM action_types
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ActionType::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, new: &NewActionType) -> RepoResult<ActionType> {
        let result = sqlx::query_as::<_, ActionTypeModel>(
            r"
            INSERT INTO action_types (name, verb, format)
            VALUES ($1, $2, $3)
            RETURNING id, name, verb, format, created_at
            ",
        )
        .bind(&new.name)
        .bind(&new.verb)
        .bind(&new.format)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || duplicate_action_type(&new.name)))?;

        Ok(ActionType::from(result))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ActionType>> {
        let results = sqlx::query_as::<_, ActionTypeModel>(
            r"
            SELECT id, name, verb, format, created_at
            FROM action_types
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ActionType::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgActionTypeRepository>();
    }
}
