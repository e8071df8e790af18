//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Action, ActionType, Follow};
use crate::error::DomainError;
use crate::value_objects::{EntityRef, RecordId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Action Type Repository
// ============================================================================

/// Values for inserting a new action type
#[derive(Debug, Clone)]
pub struct NewActionType {
    pub name: String,
    pub verb: String,
    pub format: Option<String>,
}

#[async_trait]
pub trait ActionTypeRepository: Send + Sync {
    /// Find action type by surrogate id
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ActionType>>;

    /// Keyed lookup by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ActionType>>;

    /// Create a new action type; duplicate names are a conflict
    async fn create(&self, new: &NewActionType) -> RepoResult<ActionType>;

    /// List all action types in creation order
    async fn list(&self) -> RepoResult<Vec<ActionType>>;
}

// ============================================================================
// Action Repository
// ============================================================================

/// Values for inserting a new action record
#[derive(Debug, Clone)]
pub struct NewAction {
    pub action_type_id: RecordId,
    pub actor: Option<EntityRef>,
    pub action_object: Option<EntityRef>,
    pub target: Option<EntityRef>,
}

#[async_trait]
pub trait ActionRepository: Send + Sync {
    /// Find action by id
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Action>>;

    /// All actions whose actor reference matches, in creation order,
    /// optionally capped to the first `limit`
    async fn find_by_actor(&self, actor: &EntityRef, limit: Option<i64>)
        -> RepoResult<Vec<Action>>;

    /// Symmetric to `find_by_actor`, filtering on the target reference
    async fn find_by_target(
        &self,
        target: &EntityRef,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Action>>;

    /// Persist a new action, returning the stored record with its
    /// database-assigned id and timestamp
    async fn create(&self, new: &NewAction) -> RepoResult<Action>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Find the edge for a (follower, followed) pair, active or not
    async fn find(&self, follower: &EntityRef, followed: &EntityRef)
        -> RepoResult<Option<Follow>>;

    /// Create the edge, or reactivate the existing row for the same pair.
    /// Must be atomic so concurrent calls cannot create duplicate edges.
    async fn upsert_active(
        &self,
        follower: &EntityRef,
        followed: &EntityRef,
    ) -> RepoResult<Follow>;

    /// Soft-delete all matching edges, returning the affected-row count
    async fn deactivate(&self, follower: &EntityRef, followed: &EntityRef) -> RepoResult<u64>;

    /// All active edges
    async fn find_active(&self) -> RepoResult<Vec<Follow>>;

    /// Active edges pointing at the given entity
    async fn find_followers(&self, followed: &EntityRef) -> RepoResult<Vec<Follow>>;

    /// Active edges originating from the given entity
    async fn find_following(&self, follower: &EntityRef) -> RepoResult<Vec<Follow>>;
}
