//! Habit records and completion-status helpers.
//!
//! A Habit is a recurring activity definition. Habits are created and edited
//! by collaborators outside this core; the core derives Task views from them
//! (see [`crate::task`]) and keeps their completion status synchronized
//! across execution contexts (see [`crate::sync`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::Event;
use crate::sync::{decode_status_map, encode_status_map, SnapshotStore, HABIT_STATUS_KEY};

/// A recurring activity with a completion flag.
///
/// Field names serialize in camelCase to stay wire-compatible with the
/// store snapshots other contexts read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Display color, e.g. "#0f0".
    pub color: String,
    pub start_date: NaiveDate,
    /// Optional time of day, e.g. "07:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Flip a habit's completion status in the shared store.
///
/// Creates the status entry on first toggle. The write goes through the
/// [`SnapshotStore`], so every subscriber (including this context's own
/// synchronizer, which no-ops on the echo) is notified.
pub fn toggle_status(store: &SnapshotStore, habit_id: &str, now: DateTime<Utc>) -> Result<Event> {
    let mut map = match store.get(HABIT_STATUS_KEY)? {
        Some(raw) => decode_status_map(&raw)?,
        None => Default::default(),
    };

    let entry = map.entry(habit_id.to_string()).or_default();
    entry.completed = !entry.completed;
    entry.completed_at = entry.completed.then_some(now);
    let completed = entry.completed;

    store.set(HABIT_STATUS_KEY, &encode_status_map(&map)?)?;
    Ok(Event::HabitToggled {
        habit_id: habit_id.to_string(),
        completed,
        at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SnapshotStore {
        SnapshotStore::in_memory().unwrap()
    }

    #[test]
    fn first_toggle_creates_entry() {
        let store = store();
        let now = Utc::now();
        toggle_status(&store, "h1", now).unwrap();

        let map = decode_status_map(&store.get(HABIT_STATUS_KEY).unwrap().unwrap()).unwrap();
        let status = map.get("h1").unwrap();
        assert!(status.completed);
        assert_eq!(status.completed_at, Some(now));
    }

    #[test]
    fn second_toggle_clears_completion() {
        let store = store();
        toggle_status(&store, "h1", Utc::now()).unwrap();
        toggle_status(&store, "h1", Utc::now()).unwrap();

        let map = decode_status_map(&store.get(HABIT_STATUS_KEY).unwrap().unwrap()).unwrap();
        let status = map.get("h1").unwrap();
        assert!(!status.completed);
        assert!(status.completed_at.is_none());
    }

    #[test]
    fn toggle_leaves_other_entries_alone() {
        let store = store();
        toggle_status(&store, "h1", Utc::now()).unwrap();
        toggle_status(&store, "h2", Utc::now()).unwrap();

        let map = decode_status_map(&store.get(HABIT_STATUS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.get("h1").unwrap().completed);
        assert!(map.get("h2").unwrap().completed);
    }

    #[test]
    fn habit_serializes_camel_case() {
        let habit = Habit {
            id: "h1".into(),
            name: "Run".into(),
            color: "#0f0".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: None,
            completed: false,
            completed_at: None,
        };
        let json = serde_json::to_value(&habit).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("time").is_none());
    }
}
