//! RecordId - surrogate key for rows owned by this crate
//!
//! Thin wrapper around the database-assigned `BIGSERIAL` value. Kept as a
//! newtype so action ids, action-type ids and follow ids don't silently
//! cross-assign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-assigned 64-bit surrogate key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check whether the id is zero (not yet persisted)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_round_trip() {
        let id = RecordId::new(123);
        assert_eq!(id.into_inner(), 123);
        assert_eq!(i64::from(id), 123);
        assert_eq!(RecordId::from(123), id);
    }

    #[test]
    fn test_record_id_zero() {
        assert!(RecordId::default().is_zero());
        assert!(!RecordId::new(1).is_zero());
    }

    #[test]
    fn test_record_id_display_and_ordering() {
        assert_eq!(RecordId::new(42).to_string(), "42");
        assert!(RecordId::new(1) < RecordId::new(2));
    }
}
