//! Action type database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the action_types table
#[derive(Debug, Clone, FromRow)]
pub struct ActionTypeModel {
    pub id: i64,
    pub name: String,
    pub verb: String,
    pub format: Option<String>,
    pub created_at: DateTime<Utc>,
}
