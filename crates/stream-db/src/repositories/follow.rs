//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::Follow;
use stream_core::traits::{FollowRepository, RepoResult};
use stream_core::value_objects::EntityRef;

use crate::models::FollowModel;

use super::error::map_db_error;

const FOLLOW_COLUMNS: &str =
    "id, follower_kind, follower_id, followed_kind, followed_id, is_active, created_at";

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        follower: &EntityRef,
        followed: &EntityRef,
    ) -> RepoResult<Option<Follow>> {
        let result = sqlx::query_as::<_, FollowModel>(&format!(
            "SELECT {FOLLOW_COLUMNS} FROM follows \
             WHERE follower_kind = $1 AND follower_id = $2 \
               AND followed_kind = $3 AND followed_id = $4"
        ))
        .bind(follower.kind())
        .bind(follower.id())
        .bind(followed.kind())
        .bind(followed.id())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Follow::from))
    }

    #[instrument(skip(self))]
    async fn upsert_active(
        &self,
        follower: &EntityRef,
        followed: &EntityRef,
    ) -> RepoResult<Follow> {
        // One atomic statement: the unique edge constraint turns concurrent
        // creates into reactivations instead of duplicate rows
        let result = sqlx::query_as::<_, FollowModel>(&format!(
            "INSERT INTO follows (follower_kind, follower_id, followed_kind, followed_id) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (follower_kind, follower_id, followed_kind, followed_id) \
             DO UPDATE SET is_active = TRUE \
             RETURNING {FOLLOW_COLUMNS}"
        ))
        .bind(follower.kind())
        .bind(follower.id())
        .bind(followed.kind())
        .bind(followed.id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Follow::from(result))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, follower: &EntityRef, followed: &EntityRef) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE follows
            SET is_active = FALSE
            WHERE follower_kind = $1 AND follower_id = $2
              AND followed_kind = $3 AND followed_id = $4
            ",
        )
        .bind(follower.kind())
        .bind(follower.id())
        .bind(followed.kind())
        .bind(followed.id())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Follow>> {
        let results = sqlx::query_as::<_, FollowModel>(&format!(
            "SELECT {FOLLOW_COLUMNS} FROM follows WHERE is_active = TRUE ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Follow::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_followers(&self, followed: &EntityRef) -> RepoResult<Vec<Follow>> {
        let results = sqlx::query_as::<_, FollowModel>(&format!(
            "SELECT {FOLLOW_COLUMNS} FROM follows \
             WHERE followed_kind = $1 AND followed_id = $2 AND is_active = TRUE \
             ORDER BY id"
        ))
        .bind(followed.kind())
        .bind(followed.id())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Follow::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_following(&self, follower: &EntityRef) -> RepoResult<Vec<Follow>> {
        let results = sqlx::query_as::<_, FollowModel>(&format!(
            "SELECT {FOLLOW_COLUMNS} FROM follows \
             WHERE follower_kind = $1 AND follower_id = $2 AND is_active = TRUE \
             ORDER BY id"
        ))
        .bind(follower.kind())
        .bind(follower.id())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Follow::from).collect())
    }
}
