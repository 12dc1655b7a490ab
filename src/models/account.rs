use chrono::{DateTime, Utc};

/// Placeholder used wherever a description tag is missing.
pub const NO_DESCRIPTION: &str = "No Description";

/// A member account of an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    /// Value of the account's `Description` tag.
    pub description: String,
}

/// A key/value tag attached to an account or IAM user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self { key: key.to_string(), value: value.to_string() }
    }
}

/// Returns the value of the first tag whose key matches exactly, or
/// [`NO_DESCRIPTION`].
pub fn tag_value_or_default(tags: &[Tag], key: &str) -> String {
    tags.iter()
        .find(|t| t.key == key)
        .map(|t| t.value.clone())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}
