//! Data models for database records

use chrono::{DateTime, Utc};

/// One persisted slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    /// Slot key
    pub key: String,

    /// Raw serialized value
    pub value: String,

    /// When the value was last replaced
    pub updated_at: DateTime<Utc>,
}

impl SlotRecord {
    /// Create a record stamped with the current time
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            updated_at: Utc::now(),
        }
    }
}
