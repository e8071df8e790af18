//! Response DTOs for display layers

use chrono::{DateTime, Utc};
use serde::Serialize;
use stream_core::value_objects::RecordId;

/// One rendered line of an activity feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: RecordId,
    /// The rendered display sentence
    pub sentence: String,
    pub occurred_at: DateTime<Utc>,
}
