//! EntityRef - polymorphic reference to a host-application entity
//!
//! A `(kind, id)` pair that lets a record point at an instance of any
//! entity type without owning it. The `kind` is the host application's
//! type tag (e.g. "user", "post"), the `id` is the entity id as text.
//! Resolution to display text goes through an injected
//! [`EntityDirectory`](crate::traits::EntityDirectory).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polymorphic reference: type tag plus textual entity id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    kind: String,
    id: String,
}

impl EntityRef {
    /// Create a new EntityRef from a type tag and an entity id
    pub fn new(kind: impl Into<String>, id: impl ToString) -> Self {
        Self {
            kind: kind.into(),
            id: id.to_string(),
        }
    }

    /// The host application's type tag
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The referenced entity's id, as text
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parse from the `kind:id` string form produced by `Display`
    pub fn parse(s: &str) -> Result<Self, EntityRefParseError> {
        let (kind, id) = s.split_once(':').ok_or(EntityRefParseError::MissingSeparator)?;
        if kind.is_empty() || id.is_empty() {
            return Err(EntityRefParseError::EmptyPart);
        }
        Ok(Self::new(kind, id))
    }
}

/// Error when parsing an EntityRef from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityRefParseError {
    #[error("entity reference must be of the form kind:id")]
    MissingSeparator,
    #[error("entity reference kind and id must be non-empty")]
    EmptyPart,
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl std::str::FromStr for EntityRef {
    type Err = EntityRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityRef::parse(s)
    }
}
