//! Action entity - one logged "actor did something" record
//!
//! User action examples:
//! - <ahmet> has <deleted> <discussionTitle>
//! - <ercan> has <commented> <taskTitle> on <projectTitle>
//! - <murat> has <assigned> <userName> to <taskName>

use chrono::{DateTime, Utc};

use crate::value_objects::{EntityRef, RecordId};

/// Action entity
///
/// Append-only: records are created by the log operation and never
/// updated. `action_time` is stamped once at insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: RecordId,
    pub action_type_id: RecordId,
    /// Entity that performed the action
    pub actor: Option<EntityRef>,
    /// Entity the action was performed upon/with
    pub action_object: Option<EntityRef>,
    /// Optional secondary context, e.g. "on <target>"
    pub target: Option<EntityRef>,
    pub action_time: DateTime<Utc>,
}

impl Action {
    /// Check whether a target reference is present
    #[inline]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Action {
        Action {
            id: RecordId::new(1),
            action_type_id: RecordId::new(2),
            actor: Some(EntityRef::new("user", 10)),
            action_object: Some(EntityRef::new("post", 20)),
            target: None,
            action_time: Utc::now(),
        }
    }

    #[test]
    fn test_has_target() {
        let mut action = sample();
        assert!(!action.has_target());

        action.target = Some(EntityRef::new("thread", 30));
        assert!(action.has_target());
    }

    #[test]
    fn test_references_are_independent() {
        let mut action = sample();
        action.actor = None;
        assert!(action.actor.is_none());
        assert!(action.action_object.is_some());
    }
}
