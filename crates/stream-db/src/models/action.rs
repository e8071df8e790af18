//! Action database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the actions table
///
/// Each polymorphic reference is stored as a (kind, id) column pair;
/// both columns of a pair are set or both are NULL.
#[derive(Debug, Clone, FromRow)]
pub struct ActionModel {
    pub id: i64,
    pub action_type_id: i64,
    pub actor_kind: Option<String>,
    pub actor_id: Option<String>,
    pub object_kind: Option<String>,
    pub object_id: Option<String>,
    pub target_kind: Option<String>,
    pub target_id: Option<String>,
    pub action_time: DateTime<Utc>,
}
