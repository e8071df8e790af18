//! ActionType entity - named, reusable verb/format template
//!
//! Examples of usage:
//! - add <this> to <that>
//! - invite <this> to <that>
//! - comment <this> on <that>

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::value_objects::RecordId;

/// ActionType entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionType {
    pub id: RecordId,
    /// Unique lookup key (e.g. "comment")
    pub name: String,
    /// Display verb (e.g. "commented")
    pub verb: String,
    /// Optional template with named `{placeholder}` slots; when absent the
    /// built-in default sentence is used
    pub format: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActionType {
    /// Create a new ActionType (id is assigned on insert)
    pub fn new(name: impl Into<String>, verb: impl Into<String>, format: Option<String>) -> Self {
        Self {
            id: RecordId::default(),
            name: name.into(),
            verb: verb.into(),
            format,
            created_at: Utc::now(),
        }
    }

    /// The stored format template, if any
    #[inline]
    pub fn get_format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Seed placeholder map merged into every rendering of an action of
    /// this type
    pub fn format_dict(&self) -> HashMap<String, String> {
        HashMap::from([("verb".to_string(), self.verb.clone())])
    }

    /// Templates are not validated up front; a bad placeholder fails at
    /// render time instead
    pub fn validate_format(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_creation() {
        let kind = ActionType::new("comment", "commented", None);
        assert_eq!(kind.name, "comment");
        assert_eq!(kind.verb, "commented");
        assert!(kind.get_format().is_none());
        assert!(kind.id.is_zero());
    }

    #[test]
    fn test_get_format() {
        let kind = ActionType::new("assign", "assigned", Some("{actor} took {target}".into()));
        assert_eq!(kind.get_format(), Some("{actor} took {target}"));
    }

    #[test]
    fn test_validate_format_accepts_anything() {
        // Validation is deferred to render time
        let kind = ActionType::new("comment", "commented", Some("{not a placeholder".into()));
        kind.validate_format();
    }

    #[test]
    fn test_format_dict_seeds_verb() {
        let kind = ActionType::new("create", "created", None);
        let dict = kind.format_dict();
        assert_eq!(dict.get("verb").map(String::as_str), Some("created"));
        assert_eq!(dict.len(), 1);
    }
}
