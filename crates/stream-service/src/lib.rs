//! # stream-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::ActivityEntry;
pub use services::{
    ActivityService, FollowService, RegistryService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
