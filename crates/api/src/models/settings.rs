//! Settings store models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One settings document: a unique key, a coarse tab discriminator, and an
/// opaque JSON payload. The payload shape is domain-specific and not
/// enforced by the store; it is replaced wholesale on every upsert.
#[derive(Debug, Clone, Serialize)]
pub struct SettingRecord {
    pub key: String,
    pub tab: String,
    pub data: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
