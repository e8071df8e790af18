//! EntityDirectory trait - the host application's entity catalog
//!
//! Polymorphic references are resolved to display text through this
//! capability; the catalog itself is an external collaborator, not part
//! of the activity stream.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::EntityRef;

#[async_trait]
pub trait EntityDirectory: Send + Sync {
    /// Resolve a reference to the referenced entity's display text.
    ///
    /// Implementations should return [`DomainError::EntityLookup`] when
    /// the reference cannot be resolved.
    async fn display_name(&self, entity: &EntityRef) -> Result<String, DomainError>;
}
