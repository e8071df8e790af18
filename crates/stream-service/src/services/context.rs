//! Service context - dependency container for services
//!
//! Holds the repository handles and the host application's entity
//! directory. Repositories are injected as trait objects; no process-wide
//! singletons are involved.

use std::sync::Arc;

use stream_core::traits::{
    ActionRepository, ActionTypeRepository, EntityDirectory, FollowRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    action_type_repo: Arc<dyn ActionTypeRepository>,
    action_repo: Arc<dyn ActionRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    directory: Arc<dyn EntityDirectory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        action_type_repo: Arc<dyn ActionTypeRepository>,
        action_repo: Arc<dyn ActionRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        directory: Arc<dyn EntityDirectory>,
    ) -> Self {
        Self {
            action_type_repo,
            action_repo,
            follow_repo,
            directory,
        }
    }

    /// Get the action type repository
    pub fn action_type_repo(&self) -> &dyn ActionTypeRepository {
        self.action_type_repo.as_ref()
    }

    /// Get the action repository
    pub fn action_repo(&self) -> &dyn ActionRepository {
        self.action_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the entity directory
    pub fn directory(&self) -> &dyn EntityDirectory {
        self.directory.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("directory", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    action_type_repo: Option<Arc<dyn ActionTypeRepository>>,
    action_repo: Option<Arc<dyn ActionRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    directory: Option<Arc<dyn EntityDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            action_type_repo: None,
            action_repo: None,
            follow_repo: None,
            directory: None,
        }
    }

    pub fn action_type_repo(mut self, repo: Arc<dyn ActionTypeRepository>) -> Self {
        self.action_type_repo = Some(repo);
        self
    }

    pub fn action_repo(mut self, repo: Arc<dyn ActionRepository>) -> Self {
        self.action_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn directory(mut self, directory: Arc<dyn EntityDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.action_type_repo.ok_or_else(|| {
                super::error::ServiceError::validation("action_type_repo is required")
            })?,
            self.action_repo
                .ok_or_else(|| super::error::ServiceError::validation("action_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| super::error::ServiceError::validation("follow_repo is required"))?,
            self.directory
                .ok_or_else(|| super::error::ServiceError::validation("directory is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
