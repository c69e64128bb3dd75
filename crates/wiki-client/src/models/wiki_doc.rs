//! Wiki document model
//!
//! Documents are owned by the remote service; the client holds transient
//! copies with no cross-session persistence. Decoding is deliberately
//! lenient: every field defaults, so a superset of fields or a partially
//! filled payload never breaks the UI.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Publication status of a wiki document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WikiDocStatus {
    #[default]
    Private,
    Published,
}

impl WikiDocStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WikiDocStatus::Private => "Private",
            WikiDocStatus::Published => "Published",
        }
    }
}

impl std::fmt::Display for WikiDocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A wiki document scoped to a communication channel
///
/// Timestamps are epoch milliseconds and monotonically non-decreasing.
/// A `delete_at > 0` marks a soft-deleted record, normally filtered out
/// by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiDoc {
    pub id: String,
    pub name: String,
    pub content: String,
    pub description: String,
    pub status: WikiDocStatus,
    pub owner_user_id: String,
    pub team_id: String,
    pub channel_id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
}

impl WikiDoc {
    pub fn is_published(&self) -> bool {
        self.status == WikiDocStatus::Published
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }

    /// Structural check of a decoded payload: every required field present
    /// and correctly typed. Used to log shape mismatches without failing
    /// the call.
    pub fn is_well_formed(value: &Value) -> bool {
        let non_empty_str = |key: &str| value.get(key).and_then(Value::as_str).is_some_and(|s| !s.is_empty());
        let is_str = |key: &str| value.get(key).is_some_and(Value::is_string);
        let is_num = |key: &str| value.get(key).is_some_and(Value::is_number);

        non_empty_str("id")
            && non_empty_str("name")
            && non_empty_str("content")
            && is_str("description")
            && is_str("status")
            && non_empty_str("owner_user_id")
            && non_empty_str("team_id")
            && non_empty_str("channel_id")
            && is_num("create_at")
            && is_num("update_at")
            && is_num("delete_at")
    }

    /// Shallow-merge a partial update into this document
    pub fn apply(&mut self, patch: WikiDocPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial update of the mutable fields of a [`WikiDoc`]
#[derive(Debug, Clone, Default)]
pub struct WikiDocPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status: Option<WikiDocStatus>,
}

/// One page of list results
///
/// `has_more` is authoritative for whether a next page exists; the remote
/// service computes it so it stays correct under concurrent deletes. Never
/// derive it from `items.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResult {
    pub items: Vec<WikiDoc>,
    pub total_count: u64,
    pub page_count: u64,
    pub has_more: bool,
}
