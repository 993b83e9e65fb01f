//! Equality-gated merge of cross-context status notifications.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::error::{StorageError, SyncError};

use super::store::{SnapshotStore, SubscriberId};
use super::types::{decode_status_map, HabitStatus, HabitStatusMap, StoreNotification, HABIT_STATUS_KEY};

/// What [`HabitStatusSync::apply`] did with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Snapshot differed and replaced local state.
    Applied,
    /// Snapshot was deep-equal to local state; no update signal emitted.
    Unchanged,
    /// Notification was for a different store key.
    Ignored,
    /// Payload was missing or failed to parse; local state retained.
    Rejected,
}

/// Local holder of the habit-status snapshot, kept eventually consistent
/// with the shared store.
///
/// Notifications are applied in delivery order with no buffering: if two
/// arrive back to back, only the last-applied snapshot survives, matching
/// the store's last-writer-wins semantics.
#[derive(Debug, Default)]
pub struct HabitStatusSync {
    snapshot: HabitStatusMap,
    update_count: u64,
    parse_failures: u64,
}

impl HabitStatusSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: HabitStatusMap) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> &HabitStatusMap {
        &self.snapshot
    }

    pub fn status_of(&self, habit_id: &str) -> Option<&HabitStatus> {
        self.snapshot.get(habit_id)
    }

    /// Number of times local state was actually replaced. The UI layer
    /// re-renders exactly once per increment.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Number of notifications discarded for a missing or malformed payload.
    pub fn parse_failures(&self) -> u64 {
        self.parse_failures
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Process one store notification.
    ///
    /// The equality gate is the correctness core: applying a notification
    /// while holding identical data must be a no-op, otherwise a local
    /// write echoing back through the store would re-trigger itself
    /// forever.
    pub fn apply(&mut self, notification: &StoreNotification) -> ApplyOutcome {
        if notification.key != HABIT_STATUS_KEY {
            return ApplyOutcome::Ignored;
        }

        let raw = match &notification.new_value {
            Some(raw) => raw,
            None => {
                self.parse_failures += 1;
                let err = SyncError::EmptyPayload {
                    key: notification.key.clone(),
                };
                warn!(error = %err, "status notification carried no payload, keeping local state");
                return ApplyOutcome::Rejected;
            }
        };

        let incoming = match decode_status_map(raw) {
            Ok(map) => map,
            Err(err) => {
                self.parse_failures += 1;
                warn!(error = %err, "discarding malformed status snapshot, keeping local state");
                return ApplyOutcome::Rejected;
            }
        };

        if incoming == self.snapshot {
            return ApplyOutcome::Unchanged;
        }

        self.snapshot = incoming;
        self.update_count += 1;
        ApplyOutcome::Applied
    }

    /// Seed from the persisted snapshot, then subscribe for changes.
    ///
    /// A malformed persisted snapshot is reported and the synchronizer
    /// starts empty -- the same recovery as for a malformed notification.
    pub fn attach(
        sync: Arc<Mutex<Self>>,
        store: &SnapshotStore,
    ) -> Result<SubscriberId, StorageError> {
        if let Some(raw) = store.get(HABIT_STATUS_KEY)? {
            let mut guard = sync.lock().unwrap();
            match decode_status_map(&raw) {
                Ok(map) => guard.snapshot = map,
                Err(err) => {
                    guard.parse_failures += 1;
                    warn!(error = %err, "persisted status snapshot is malformed, starting empty");
                }
            }
        }

        let handle = Arc::clone(&sync);
        Ok(store.subscribe(move |notification| {
            handle.lock().unwrap().apply(notification);
        }))
    }
}
