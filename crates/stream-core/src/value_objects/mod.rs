//! Value objects shared across the domain

mod entity_ref;
mod record_id;

pub use entity_ref::{EntityRef, EntityRefParseError};
pub use record_id::RecordId;
