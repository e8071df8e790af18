//! Follow database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub id: i64,
    pub follower_kind: String,
    pub follower_id: String,
    pub followed_kind: String,
    pub followed_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
