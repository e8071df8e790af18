//! Activity service
//!
//! Logs actions, reads per-entity history, and renders display sentences.

use tracing::{info, instrument};

use stream_core::entities::{Action, ActionType};
use stream_core::render;
use stream_core::traits::NewAction;
use stream_core::value_objects::EntityRef;
use stream_core::DomainError;

use crate::dto::ActivityEntry;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Log a new action: `actor` performed `type_key` on `action_object`,
    /// optionally in the context of `target`
    ///
    /// The action type is resolved by its unique name; an unknown key is a
    /// not-found error. The actor reference is taken from the distinct
    /// actor argument, never from the action object.
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        actor: EntityRef,
        action_object: EntityRef,
        type_key: &str,
        target: Option<EntityRef>,
    ) -> ServiceResult<Action> {
        let kind = self
            .ctx
            .action_type_repo()
            .find_by_name(type_key)
            .await?
            .ok_or_else(|| DomainError::ActionTypeNotFound(type_key.to_string()))?;

        let action = self
            .ctx
            .action_repo()
            .create(&NewAction {
                action_type_id: kind.id,
                actor: Some(actor),
                action_object: Some(action_object),
                target,
            })
            .await?;

        info!(
            action_id = %action.id,
            action_type = %kind.name,
            "Action logged"
        );

        Ok(action)
    }

    /// All actions performed by this actor, in creation order, optionally
    /// capped to the first `limit`
    #[instrument(skip(self))]
    pub async fn history_for_actor(
        &self,
        actor: &EntityRef,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Action>> {
        Ok(self.ctx.action_repo().find_by_actor(actor, limit).await?)
    }

    /// All actions performed on this target, in creation order, optionally
    /// capped to the first `limit`
    #[instrument(skip(self))]
    pub async fn history_for_target(
        &self,
        target: &EntityRef,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Action>> {
        Ok(self.ctx.action_repo().find_by_target(target, limit).await?)
    }

    /// Render the display sentence for one action
    ///
    /// Uses the action type's stored template when set, the built-in
    /// default otherwise. References are resolved to display text through
    /// the entity directory; a template placeholder with no value fails
    /// here, not earlier.
    #[instrument(skip(self))]
    pub async fn render(&self, action: &Action) -> ServiceResult<String> {
        let kind = self
            .ctx
            .action_type_repo()
            .find_by_id(action.action_type_id)
            .await?
            .ok_or_else(|| {
                DomainError::ActionTypeNotFound(action.action_type_id.to_string())
            })?;

        let sentence = self.render_with(&kind, action).await?;
        Ok(sentence)
    }

    /// History plus rendering, for display layers
    #[instrument(skip(self))]
    pub async fn feed_for_actor(
        &self,
        actor: &EntityRef,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ActivityEntry>> {
        let actions = self.history_for_actor(actor, limit).await?;
        self.render_entries(actions).await
    }

    /// History plus rendering, filtered on the target reference
    #[instrument(skip(self))]
    pub async fn feed_for_target(
        &self,
        target: &EntityRef,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ActivityEntry>> {
        let actions = self.history_for_target(target, limit).await?;
        self.render_entries(actions).await
    }

    async fn render_entries(&self, actions: Vec<Action>) -> ServiceResult<Vec<ActivityEntry>> {
        let mut entries = Vec::with_capacity(actions.len());
        for action in actions {
            let sentence = self.render(&action).await?;
            entries.push(ActivityEntry {
                id: action.id,
                sentence,
                occurred_at: action.action_time,
            });
        }
        Ok(entries)
    }

    async fn render_with(&self, kind: &ActionType, action: &Action) -> ServiceResult<String> {
        let mut values = render::base_placeholders(kind, action.action_time);

        // Only present references contribute placeholder values; a template
        // naming an absent one fails with UnknownPlaceholder
        if let Some(actor) = &action.actor {
            let name = self.ctx.directory().display_name(actor).await?;
            values.insert("actor".to_string(), name);
        }
        if let Some(object) = &action.action_object {
            let name = self.ctx.directory().display_name(object).await?;
            values.insert("action_object".to_string(), name);
        }
        if let Some(target) = &action.target {
            let name = self.ctx.directory().display_name(target).await?;
            values.insert("target".to_string(), name);
        }

        Ok(render::sentence(kind, action.has_target(), &values)?)
    }
}
