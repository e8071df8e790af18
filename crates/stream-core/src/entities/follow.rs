//! Follow entity - directed, soft-deletable edge between two entities

use chrono::{DateTime, Utc};

use crate::value_objects::{EntityRef, RecordId};

/// Follow edge: `follower` follows `followed`
///
/// Unfollowing clears `is_active`; the row is never physically removed,
/// and a later follow of the same pair reactivates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: RecordId,
    pub follower: EntityRef,
    pub followed: EntityRef,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Check whether this edge connects the given pair
    pub fn connects(&self, follower: &EntityRef, followed: &EntityRef) -> bool {
        &self.follower == follower && &self.followed == followed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects() {
        let edge = Follow {
            id: RecordId::new(1),
            follower: EntityRef::new("user", 1),
            followed: EntityRef::new("user", 2),
            is_active: true,
            created_at: Utc::now(),
        };

        assert!(edge.connects(&EntityRef::new("user", 1), &EntityRef::new("user", 2)));
        // Direction matters
        assert!(!edge.connects(&EntityRef::new("user", 2), &EntityRef::new("user", 1)));
    }
}
