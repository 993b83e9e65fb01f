//! Core types for cross-context synchronization.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// Store key holding the serialized habit completion snapshot.
pub const HABIT_STATUS_KEY: &str = "habitStatus";

/// Completion state of a single habit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStatus {
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Habit id → completion state. A versionless snapshot, never an event log:
/// the whole map is replaced on every write, last writer wins.
pub type HabitStatusMap = BTreeMap<String, HabitStatus>;

/// A change notification delivered to store subscribers.
///
/// `new_value` is `None` when the key was removed; subscribers treat a
/// missing or unparseable payload as "no change" after reporting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreNotification {
    pub key: String,
    pub new_value: Option<String>,
}

/// Decode a serialized habit-status snapshot.
pub fn decode_status_map(raw: &str) -> Result<HabitStatusMap, SyncError> {
    serde_json::from_str(raw).map_err(SyncError::Parse)
}

/// Encode a habit-status snapshot for the store.
pub fn encode_status_map(map: &HabitStatusMap) -> Result<String, SyncError> {
    serde_json::to_string(map).map_err(SyncError::Parse)
}
