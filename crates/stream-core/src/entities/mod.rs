//! Domain entities - core business objects

mod action;
mod action_type;
mod follow;

pub use action::Action;
pub use action_type::ActionType;
pub use follow::Follow;
