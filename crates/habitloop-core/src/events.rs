use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::celebration::CelebrationTier;

/// Every observable state change in the core produces an Event.
/// The CLI prints them; UI layers subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A habit's completion status was toggled and written to the store.
    HabitToggled {
        habit_id: String,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// The label list was replaced wholesale.
    LabelsReplaced {
        version: u64,
        count: usize,
        at: DateTime<Utc>,
    },
    CelebrationStarted {
        tier: CelebrationTier,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    CelebrationEnded {
        tier: CelebrationTier,
        at: DateTime<Utc>,
    },
}
