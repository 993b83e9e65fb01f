//! Snapshot store with subscribe/notify.
//!
//! Wraps the persisted [`StoreDb`] and broadcasts a [`StoreNotification`]
//! for every write. All subscribers are notified, including the writer's
//! own context -- the synchronizer's equality gate makes self-echoes
//! no-ops, which keeps the store free of per-subscriber origin bookkeeping.

use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::storage::StoreDb;

use super::types::StoreNotification;

/// Handle returned by [`SnapshotStore::subscribe`].
pub type SubscriberId = usize;

type Callback = Arc<dyn Fn(&StoreNotification) + Send + Sync>;

struct Inner {
    db: StoreDb,
    subscribers: Vec<(SubscriberId, Callback)>,
    next_id: SubscriberId,
}

/// Shared, persisted snapshot store.
///
/// Clones share the same underlying store, so one instance can be handed to
/// multiple simulated contexts.
#[derive(Clone)]
pub struct SnapshotStore {
    inner: Arc<Mutex<Inner>>,
}

impl SnapshotStore {
    pub fn new(db: StoreDb) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                db,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// In-memory store for tests and simulated contexts.
    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(StoreDb::open_in_memory()?))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.lock().unwrap().db.get(key)
    }

    /// Persist `value` under `key`, then notify every subscriber.
    ///
    /// Callbacks run on the writer's thread after the store lock is
    /// released, so they may call back into the store.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let notification = StoreNotification {
            key: key.to_string(),
            new_value: Some(value.to_string()),
        };
        self.inner.lock().unwrap().db.set(key, value)?;
        self.notify(&notification);
        Ok(())
    }

    /// Remove `key`, notifying subscribers with an empty payload.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let notification = StoreNotification {
            key: key.to_string(),
            new_value: None,
        };
        self.inner.lock().unwrap().db.remove(key)?;
        self.notify(&notification);
        Ok(())
    }

    /// Register a change listener. Notifications arrive in write order.
    pub fn subscribe(
        &self,
        callback: impl Fn(&StoreNotification) + Send + Sync + 'static,
    ) -> SubscriberId {
        let mut guard = self.inner.lock().unwrap();
        let id = guard.next_id;
        guard.next_id += 1;
        guard.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        let mut guard = self.inner.lock().unwrap();
        guard.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Dispatch outside the lock: the subscriber list is snapshotted under
    /// the lock, then each callback runs with the store unlocked.
    fn notify(&self, notification: &StoreNotification) {
        let subscribers: Vec<Callback> = {
            let guard = self.inner.lock().unwrap();
            guard
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect()
        };
        for callback in subscribers {
            callback(notification);
        }
    }
}
