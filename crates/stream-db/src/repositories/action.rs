//! PostgreSQL implementation of ActionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::Action;
use stream_core::traits::{ActionRepository, NewAction, RepoResult};
use stream_core::value_objects::{EntityRef, RecordId};

use crate::mappers::ref_columns;
use crate::models::ActionModel;

use super::error::map_db_error;

const ACTION_COLUMNS: &str = "id, action_type_id, actor_kind, actor_id, \
     object_kind, object_id, target_kind, target_id, action_time";

/// PostgreSQL implementation of ActionRepository
#[derive(Clone)]
pub struct PgActionRepository {
    pool: PgPool,
}

impl PgActionRepository {
    /// Create a new PgActionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionRepository for PgActionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Action>> {
        let result = sqlx::query_as::<_, ActionModel>(&format!(
            "SELECT {ACTION_COLUMNS} FROM actions WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Action::from))
    }

    #[instrument(skip(self))]
    async fn find_by_actor(
        &self,
        actor: &EntityRef,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Action>> {
        // Creation order; NULL limit means unbounded
        let results = sqlx::query_as::<_, ActionModel>(&format!(
            "SELECT {ACTION_COLUMNS} FROM actions \
             WHERE actor_kind = $1 AND actor_id = $2 \
             ORDER BY id \
             LIMIT $3"
        ))
        .bind(actor.kind())
        .bind(actor.id())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Action::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_target(
        &self,
        target: &EntityRef,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Action>> {
        let results = sqlx::query_as::<_, ActionModel>(&format!(
            "SELECT {ACTION_COLUMNS} FROM actions \
             WHERE target_kind = $1 AND target_id = $2 \
             ORDER BY id \
             LIMIT $3"
        ))
        .bind(target.kind())
        .bind(target.id())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Action::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, new: &NewAction) -> RepoResult<Action> {
        let (actor_kind, actor_id) = ref_columns(new.actor.as_ref());
        let (object_kind, object_id) = ref_columns(new.action_object.as_ref());
        let (target_kind, target_id) = ref_columns(new.target.as_ref());

        // action_time defaults to now() at insert and is never refreshed
        let result = sqlx::query_as::<_, ActionModel>(&format!(
            "INSERT INTO actions \
             (action_type_id, actor_kind, actor_id, object_kind, object_id, target_kind, target_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ACTION_COLUMNS}"
        ))
        .bind(new.action_type_id.into_inner())
        .bind(actor_kind)
        .bind(actor_id)
        .bind(object_kind)
        .bind(object_id)
        .bind(target_kind)
        .bind(target_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Action::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgActionRepository>();
    }
}
