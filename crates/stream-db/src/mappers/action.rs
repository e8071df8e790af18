//! Action entity <-> model mapper

use stream_core::entities::Action;
use stream_core::value_objects::{EntityRef, RecordId};

use crate::models::ActionModel;

/// Combine a (kind, id) column pair into an EntityRef.
/// Both columns are set together; a half-set pair maps to None.
pub(crate) fn entity_ref(kind: Option<String>, id: Option<String>) -> Option<EntityRef> {
    match (kind, id) {
        (Some(kind), Some(id)) => Some(EntityRef::new(kind, id)),
        _ => None,
    }
}

/// Split an optional EntityRef back into its column pair for binding
pub(crate) fn ref_columns(entity: Option<&EntityRef>) -> (Option<&str>, Option<&str>) {
    match entity {
        Some(e) => (Some(e.kind()), Some(e.id())),
        None => (None, None),
    }
}

/// Convert ActionModel to Action entity
impl From<ActionModel> for Action {
    fn from(model: ActionModel) -> Self {
        Action {
            id: RecordId::new(model.id),
            action_type_id: RecordId::new(model.action_type_id),
            actor: entity_ref(model.actor_kind, model.actor_id),
            action_object: entity_ref(model.object_kind, model.object_id),
            target: entity_ref(model.target_kind, model.target_id),
            action_time: model.action_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let model = ActionModel {
            id: 5,
            action_type_id: 2,
            actor_kind: Some("user".into()),
            actor_id: Some("10".into()),
            object_kind: Some("post".into()),
            object_id: Some("20".into()),
            target_kind: None,
            target_id: None,
            action_time: Utc::now(),
        };

        let action = Action::from(model);
        assert_eq!(action.id, RecordId::new(5));
        assert_eq!(action.actor, Some(EntityRef::new("user", 10)));
        assert_eq!(action.action_object, Some(EntityRef::new("post", 20)));
        assert!(action.target.is_none());
    }

    #[test]
    fn test_half_set_pair_maps_to_none() {
        assert!(entity_ref(Some("user".into()), None).is_none());
        assert!(entity_ref(None, Some("1".into())).is_none());
    }

    #[test]
    fn test_ref_columns() {
        let user = EntityRef::new("user", 1);
        assert_eq!(ref_columns(Some(&user)), (Some("user"), Some("1")));
        assert_eq!(ref_columns(None), (None, None));
    }
}
