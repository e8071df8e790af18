//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! stream-core. Each repository handles database operations for a
//! specific domain entity.

mod action;
mod action_type;
mod error;
mod follow;

pub use action::PgActionRepository;
pub use action_type::PgActionTypeRepository;
pub use follow::PgFollowRepository;
