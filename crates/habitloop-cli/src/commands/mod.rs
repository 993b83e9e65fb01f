pub mod config;
pub mod habit;
pub mod label;
pub mod task;

use habitloop_core::{CoreError, Habit, SnapshotStore, StoreDb};

/// Store key holding the serialized habit list.
pub const HABITS_KEY: &str = "habits";
/// Store key holding the serialized label list.
pub const LABELS_KEY: &str = "taskLabels";

/// Open the shared snapshot store backing all commands.
pub fn open_store() -> Result<SnapshotStore, CoreError> {
    Ok(SnapshotStore::new(StoreDb::open()?))
}

pub fn load_habits(store: &SnapshotStore) -> Result<Vec<Habit>, CoreError> {
    match store.get(HABITS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_habits(store: &SnapshotStore, habits: &[Habit]) -> Result<(), CoreError> {
    store.set(HABITS_KEY, &serde_json::to_string(habits)?)?;
    Ok(())
}
