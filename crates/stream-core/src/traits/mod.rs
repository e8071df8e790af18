//! Domain ports: repository traits and the entity-lookup capability

mod directory;
mod repositories;

pub use directory::EntityDirectory;
pub use repositories::{
    ActionRepository, ActionTypeRepository, FollowRepository, NewAction, NewActionType,
    RepoResult,
};
