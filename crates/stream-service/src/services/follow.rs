//! Follow service
//!
//! Manages directed follow edges between arbitrary entities.

use tracing::{info, instrument};

use stream_core::entities::Follow;
use stream_core::value_objects::EntityRef;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start following: find-or-create the edge for this pair.
    ///
    /// An edge deactivated by an earlier unfollow is reactivated rather
    /// than duplicated; the same row is reused.
    #[instrument(skip(self))]
    pub async fn follow(&self, follower: &EntityRef, followed: &EntityRef) -> ServiceResult<Follow> {
        let edge = self.ctx.follow_repo().upsert_active(follower, followed).await?;

        info!(
            follower = %follower,
            followed = %followed,
            "Follow edge active"
        );

        Ok(edge)
    }

    /// Stop following: soft-delete all matching edges, returning the
    /// number of rows affected. The rows persist with `is_active = false`.
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower: &EntityRef, followed: &EntityRef) -> ServiceResult<u64> {
        let affected = self.ctx.follow_repo().deactivate(follower, followed).await?;

        info!(
            follower = %follower,
            followed = %followed,
            affected,
            "Follow edge deactivated"
        );

        Ok(affected)
    }

    /// All currently active edges
    #[instrument(skip(self))]
    pub async fn active_follows(&self) -> ServiceResult<Vec<Follow>> {
        Ok(self.ctx.follow_repo().find_active().await?)
    }

    /// Active edges pointing at the given entity
    #[instrument(skip(self))]
    pub async fn followers_of(&self, followed: &EntityRef) -> ServiceResult<Vec<Follow>> {
        Ok(self.ctx.follow_repo().find_followers(followed).await?)
    }

    /// Active edges originating from the given entity
    #[instrument(skip(self))]
    pub async fn following_of(&self, follower: &EntityRef) -> ServiceResult<Vec<Follow>> {
        Ok(self.ctx.follow_repo().find_following(follower).await?)
    }
}
