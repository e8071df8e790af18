//! # stream-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the activity-sentence rendering engine. This crate has zero dependencies
//! on infrastructure (database, host framework, etc.).

pub mod entities;
pub mod error;
pub mod render;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Action, ActionType, Follow};
pub use error::DomainError;
pub use traits::{
    ActionRepository, ActionTypeRepository, EntityDirectory, FollowRepository, NewAction,
    NewActionType, RepoResult,
};
pub use value_objects::{EntityRef, EntityRefParseError, RecordId};
