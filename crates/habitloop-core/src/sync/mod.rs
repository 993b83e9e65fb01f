//! Cross-context state synchronization.
//!
//! Multiple execution contexts (windows, processes) share one persisted
//! key-value store. The [`SnapshotStore`] wraps that store with a
//! subscribe/notify interface; the [`HabitStatusSync`] subscriber merges
//! incoming habit-status snapshots into local state behind a structural
//! equality gate, so a context's own write echoing back is a no-op instead
//! of an infinite update cycle.

pub mod store;
pub mod synchronizer;
pub mod types;


pub use store::{SnapshotStore, SubscriberId};
pub use synchronizer::{ApplyOutcome, HabitStatusSync};
pub use types::{
    decode_status_map, encode_status_map, HabitStatus, HabitStatusMap, StoreNotification,
    HABIT_STATUS_KEY,
};
