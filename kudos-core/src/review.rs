//! Review records and the merge identity key

use serde::{Deserialize, Deserializer, Serialize};

/// Number of comment characters that take part in the merge identity key
pub const KEY_COMMENT_CHARS: usize = 32;

/// A single user review
///
/// Serialized as `{rating, name, comment, ts}`. Seeded records may omit
/// `ts`, `name`, or `comment`, or set them to `null`; they then read as 0 or
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1 through 5
    pub rating: u8,

    /// Display name; empty means anonymous
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-text comment
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,

    /// Submission time in milliseconds since the Unix epoch
    #[serde(rename = "ts", default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

impl Review {
    /// Create a review with an explicit timestamp
    pub fn new(
        rating: u8,
        name: impl Into<String>,
        comment: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            rating,
            name: name.into(),
            comment: comment.into(),
            timestamp,
        }
    }

    /// Identity used to detect duplicates while merging
    pub fn key(&self) -> ReviewKey {
        ReviewKey {
            timestamp: self.timestamp,
            comment_prefix: self.comment.chars().take(KEY_COMMENT_CHARS).collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Merge identity: timestamp plus the first 32 characters of the comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewKey {
    pub timestamp: i64,
    pub comment_prefix: String,
}

/// Mean rating of a collection, 0 when empty
pub fn average(items: &[Review]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let total: u64 = items.iter().map(|r| u64::from(r.rating)).sum();
    total as f64 / items.len() as f64
}
