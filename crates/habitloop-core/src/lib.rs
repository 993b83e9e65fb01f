//! # Habitloop Core Library
//!
//! This library provides the core state logic for Habitloop, a personal
//! habit/task tracker. It keeps UI-visible state eventually consistent with
//! a persisted store that other execution contexts may mutate, and offers
//! the timer-backed state machines the UI layer wraps around its widgets.
//!
//! ## Architecture
//!
//! - **Sync**: A snapshot store with subscribe/notify plus an equality-gated
//!   synchronizer that merges cross-context changes without feedback loops
//! - **Domain**: Habit records and their lossless Task view conversion
//! - **Timers**: Tick-driven debounce and celebration state machines that
//!   require the caller to periodically invoke `tick()` -- no internal threads
//! - **Storage**: SQLite-based key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`SnapshotStore`]: Persisted key-value store with change notifications
//! - [`HabitStatusSync`]: Cross-context synchronizer for habit completion state
//! - [`Debouncer`]: Generic quiet-window value propagator
//! - [`CelebrationTimer`]: Self-expiring celebration state machine
//! - [`LabelRegistry`]: Versioned task-label collection

pub mod celebration;
pub mod date;
pub mod debounce;
pub mod error;
pub mod events;
pub mod habit;
pub mod labels;
pub mod storage;
pub mod sync;
pub mod task;

pub use celebration::{CelebrationDurations, CelebrationState, CelebrationTier, CelebrationTimer};
pub use debounce::Debouncer;
pub use error::{ConfigError, CoreError, LabelError, StorageError, SyncError};
pub use events::Event;
pub use habit::Habit;
pub use labels::LabelRegistry;
pub use storage::{Config, StoreDb};
pub use sync::{
    ApplyOutcome, HabitStatus, HabitStatusMap, HabitStatusSync, SnapshotStore, StoreNotification,
    HABIT_STATUS_KEY,
};
pub use task::{Task, TaskLabel, TaskPriority};
