use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit record for one `add_item` call.
///
/// Advisory only: entries live in a caller-owned list and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub item: String,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn added(item: impl Into<String>, delta: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            item: item.into(),
            delta,
            occurred_at,
        }
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.occurred_at, self.delta, self.item)
    }
}
