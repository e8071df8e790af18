//! Follow entity <-> model mapper

use stream_core::entities::Follow;
use stream_core::value_objects::{EntityRef, RecordId};

use crate::models::FollowModel;

/// Convert FollowModel to Follow entity
impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            id: RecordId::new(model.id),
            follower: EntityRef::new(model.follower_kind, model.follower_id),
            followed: EntityRef::new(model.followed_kind, model.followed_id),
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
