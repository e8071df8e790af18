//! ActionType entity <-> model mapper

use stream_core::entities::ActionType;
use stream_core::value_objects::RecordId;

use crate::models::ActionTypeModel;

/// Convert ActionTypeModel to ActionType entity
impl From<ActionTypeModel> for ActionType {
    fn from(model: ActionTypeModel) -> Self {
        ActionType {
            id: RecordId::new(model.id),
            name: model.name,
            verb: model.verb,
            format: model.format,
            created_at: model.created_at,
        }
    }
}
