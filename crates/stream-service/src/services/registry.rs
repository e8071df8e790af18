//! Action type registry service
//!
//! Named, reusable verb/format templates for logged actions.

use tracing::{info, instrument};

use stream_core::entities::ActionType;
use stream_core::traits::NewActionType;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Action type registry service
pub struct RegistryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistryService<'a> {
    /// Create a new RegistryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Define a new action type
    ///
    /// The format template, when given, is stored unvalidated; a bad
    /// placeholder surfaces at render time.
    #[instrument(skip(self))]
    pub async fn define(
        &self,
        name: &str,
        verb: &str,
        format: Option<String>,
    ) -> ServiceResult<ActionType> {
        if name.trim().is_empty() {
            return Err(ServiceError::validation("action type name must not be empty"));
        }
        if verb.trim().is_empty() {
            return Err(ServiceError::validation("action type verb must not be empty"));
        }

        let created = self
            .ctx
            .action_type_repo()
            .create(&NewActionType {
                name: name.to_string(),
                verb: verb.to_string(),
                format,
            })
            .await?;

        info!(name = %created.name, id = %created.id, "Action type defined");

        Ok(created)
    }

    /// Keyed lookup by unique name
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> ServiceResult<ActionType> {
        self.ctx
            .action_type_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("ActionType", name))
    }

    /// List all defined action types
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ActionType>> {
        Ok(self.ctx.action_type_repo().list().await?)
    }
}
