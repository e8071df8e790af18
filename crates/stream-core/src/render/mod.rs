//! Sentence rendering for logged actions
//!
//! An action renders through a template with named `{placeholder}` slots.
//! The template comes from the action type when one is stored, otherwise
//! from the built-in default. Placeholder values come from the action
//! type's seed dictionary merged with values derived from the action
//! record; referencing a placeholder absent from the merged map is a
//! render-time error, never caught earlier.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::entities::ActionType;
use crate::error::DomainError;

/// Default sentence when the action type stores no template
pub const DEFAULT_FORMAT: &str = "{actor} has {verb} {action_object}";

/// Suffix appended to the default sentence when a target is present
pub const DEFAULT_TARGET_SUFFIX: &str = " on {target}";

/// Placeholder name -> substituted value
pub type PlaceholderMap = HashMap<String, String>;

/// The built-in template, with or without the target clause
pub fn default_format(has_target: bool) -> String {
    if has_target {
        format!("{DEFAULT_FORMAT}{DEFAULT_TARGET_SUFFIX}")
    } else {
        DEFAULT_FORMAT.to_string()
    }
}

/// Seed the placeholder map for one action: the action type's dictionary
/// plus the formatted `date` value. Reference placeholders (`actor`,
/// `action_object`, `target`) are inserted by the caller once resolved.
pub fn base_placeholders(kind: &ActionType, action_time: DateTime<Utc>) -> PlaceholderMap {
    let mut values = kind.format_dict();
    values.insert(
        "date".to_string(),
        action_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    values
}

/// Render one action sentence: the action type's template when stored,
/// the built-in default otherwise
pub fn sentence(
    kind: &ActionType,
    has_target: bool,
    values: &PlaceholderMap,
) -> Result<String, DomainError> {
    match kind.get_format() {
        Some(template) => render_template(template, values),
        None => render_template(&default_format(has_target), values),
    }
}

/// Substitute `{placeholder}` slots in a template from the given map
///
/// `{{` and `}}` escape literal braces. An unclosed `{` or a stray `}`
/// is a malformed template; a placeholder missing from the map is an
/// unknown-placeholder error.
pub fn render_template(template: &str, values: &PlaceholderMap) -> Result<String, DomainError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(DomainError::MalformedTemplate(template.to_string()));
                        }
                    }
                }
                let value = values
                    .get(&name)
                    .ok_or_else(|| DomainError::UnknownPlaceholder(name.clone()))?;
                out.push_str(value);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(DomainError::MalformedTemplate(template.to_string()));
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values_for(pairs: &[(&str, &str)]) -> PlaceholderMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_default_format_without_target() {
        let values = values_for(&[
            ("actor", "ahmet"),
            ("verb", "created"),
            ("action_object", "projectTitle"),
        ]);
        let out = render_template(&default_format(false), &values).unwrap();
        assert_eq!(out, "ahmet has created projectTitle");
    }

    #[test]
    fn test_default_format_with_target() {
        let values = values_for(&[
            ("actor", "UserA"),
            ("verb", "commented"),
            ("action_object", "PostX"),
            ("target", "ThreadY"),
        ]);
        let out = render_template(&default_format(true), &values).unwrap();
        assert_eq!(out, "UserA has commented PostX on ThreadY");
    }

    #[test]
    fn test_custom_template_wins_over_default() {
        let kind = ActionType::new(
            "assign",
            "assigned",
            Some("{actor} {verb} {action_object} to {target}".to_string()),
        );
        let mut values = base_placeholders(&kind, Utc::now());
        values.insert("actor".into(), "murat".into());
        values.insert("action_object".into(), "userName".into());
        values.insert("target".into(), "taskName".into());

        let out = sentence(&kind, true, &values).unwrap();
        assert_eq!(out, "murat assigned userName to taskName");
    }

    #[test]
    fn test_unknown_placeholder_fails_lazily() {
        // `user` is never supplied; templates referencing it fail at render
        let err = render_template("{user} did something", &PlaceholderMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::UnknownPlaceholder(name) if name == "user"));
    }

    #[test]
    fn test_base_placeholders_contains_verb_and_date() {
        let kind = ActionType::new("comment", "commented", None);
        let values = base_placeholders(&kind, Utc::now());
        assert_eq!(values.get("verb").map(String::as_str), Some("commented"));
        assert!(values.contains_key("date"));
    }

    #[test]
    fn test_date_placeholder_substitution() {
        use chrono::TimeZone;

        let kind = ActionType::new("comment", "commented", Some("at {date}".to_string()));
        let when = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let values = base_placeholders(&kind, when);
        let out = sentence(&kind, false, &values).unwrap();
        assert_eq!(out, "at 2024-05-17 09:30:00 UTC");
    }

    #[test]
    fn test_escaped_braces() {
        let out = render_template("{{literal}} {verb}", &values_for(&[("verb", "done")])).unwrap();
        assert_eq!(out, "{literal} done");
    }

    #[test]
    fn test_malformed_templates() {
        let values = PlaceholderMap::new();
        assert!(matches!(
            render_template("{unclosed", &values),
            Err(DomainError::MalformedTemplate(_))
        ));
        assert!(matches!(
            render_template("stray } brace", &values),
            Err(DomainError::MalformedTemplate(_))
        ));
    }
}
