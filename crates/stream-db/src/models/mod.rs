//! Database models - SQLx-compatible structs for PostgreSQL tables

mod action;
mod action_type;
mod follow;

pub use action::ActionModel;
pub use action_type::ActionTypeModel;
pub use follow::FollowModel;
