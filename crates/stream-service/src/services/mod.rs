//! Business logic services
//!
//! Service layer implementations that orchestrate the repository ports:
//! action logging and rendering, follow management, action type registry.

pub mod activity;
pub mod context;
pub mod error;
pub mod follow;
pub mod registry;

// Re-export all services for convenience
pub use activity::ActivityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use registry::RegistryService;
