use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_AGE: &str = "age";
pub const FIELD_PURCHASES: &str = "purchases";
pub const FIELD_VISITS: &str = "visits";
pub const FIELD_SCORE: &str = "score";

/// One row as read from the source, keyed by canonical field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUserRow {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub fields: BTreeMap<String, String>,
    /// Fields whose bytes were not valid UTF-8. Their entry in `fields`
    /// holds a lossy decoding for display only.
    pub undecodable: Vec<&'static str>,
}

impl RawUserRow {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: BTreeMap::new(),
            undecodable: Vec::new(),
        }
    }

    /// Builder-style insert, handy for constructing rows in code
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A validated user. Only the record parser builds these from raw rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub user_id: String,
    pub age: u32,
    pub purchases: u32,
    pub visits: u32,
}

/// A user with its score attached.
///
/// Serializes flat, with keys in the order `user_id`, `age`, `purchases`,
/// `visits`, `score`. Downstream tooling relies on that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredUser {
    #[serde(flatten)]
    pub record: UserRecord,
    pub score: i64,
}

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    #[error("is missing")]
    Missing,

    #[error("is empty")]
    Empty,

    #[error("is not an integer: '{value}'")]
    NotAnInteger { value: String },

    #[error("must be non-negative, got {value}")]
    Negative { value: String },

    #[error("is too large: {value}")]
    TooLarge { value: String },

    #[error("is out of range")]
    OutOfRange,

    #[error("is not valid UTF-8: '{value}'")]
    InvalidUtf8 { value: String },
}

/// A rejected row, kept alongside the accepted records rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {field} {kind}")]
pub struct ProcessingError {
    pub row: usize,
    pub field: &'static str,
    pub kind: RowErrorKind,
    /// Snapshot of the row as it was read
    pub raw: BTreeMap<String, String>,
}

impl ProcessingError {
    pub fn new(raw: &RawUserRow, field: &'static str, kind: RowErrorKind) -> Self {
        Self {
            row: raw.row,
            field,
            kind,
            raw: raw.fields.clone(),
        }
    }
}

/// Maps source column headers onto the canonical field names.
///
/// Example YAML:
/// ```yaml
/// columns:
///   user_id: name
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub user_id: String,
    pub age: String,
    pub purchases: String,
    pub visits: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            user_id: FIELD_USER_ID.to_string(),
            age: FIELD_AGE.to_string(),
            purchases: FIELD_PURCHASES.to_string(),
            visits: FIELD_VISITS.to_string(),
        }
    }
}

impl ColumnMap {
    /// Pairs of (canonical field, source header), in parse order
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_USER_ID, self.user_id.as_str()),
            (FIELD_AGE, self.age.as_str()),
            (FIELD_PURCHASES, self.purchases.as_str()),
            (FIELD_VISITS, self.visits.as_str()),
        ]
    }
}
