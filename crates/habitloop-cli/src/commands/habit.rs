//! Habit management commands for CLI.

use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use habitloop_core::{habit, CoreError, Habit, HabitStatusSync, StoreNotification, HABIT_STATUS_KEY};
use serde::Serialize;
use uuid::Uuid;

use super::{load_habits, open_store, save_habits};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Display color
        #[arg(long, default_value = "#3b82f6")]
        color: String,
        /// Time of day, e.g. "07:00"
        #[arg(long)]
        time: Option<String>,
    },
    /// List habits with their synced completion status
    List,
    /// Toggle a habit's completion status
    Toggle {
        /// Habit ID
        id: String,
    },
}

/// One row of `habit list` output: the habit record with its completion
/// flag taken from the synced status snapshot when an entry exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitListing {
    id: String,
    name: String,
    color: String,
    start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    completed: bool,
}

fn listing(habit: &Habit, sync: &HabitStatusSync) -> HabitListing {
    HabitListing {
        id: habit.id.clone(),
        name: habit.name.clone(),
        color: habit.color.clone(),
        start_date: habit.start_date,
        time: habit.time.clone(),
        completed: sync
            .status_of(&habit.id)
            .map(|s| s.completed)
            .unwrap_or(habit.completed),
    }
}

pub fn run(action: HabitAction) -> Result<(), CoreError> {
    let store = open_store()?;
    match action {
        HabitAction::Add { name, color, time } => {
            let habit = Habit {
                id: Uuid::new_v4().to_string(),
                name,
                color,
                start_date: Local::now().date_naive(),
                time,
                completed: false,
                completed_at: None,
            };
            let mut habits = load_habits(&store)?;
            habits.push(habit.clone());
            save_habits(&store, &habits)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let habits = load_habits(&store)?;
            let mut sync = HabitStatusSync::new();
            if let Some(raw) = store.get(HABIT_STATUS_KEY)? {
                sync.apply(&StoreNotification {
                    key: HABIT_STATUS_KEY.to_string(),
                    new_value: Some(raw),
                });
            }
            let rows: Vec<HabitListing> = habits.iter().map(|h| listing(h, &sync)).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Toggle { id } => {
            let event = habit::toggle_status(&store, &id, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitloop_core::{HabitStatus, HabitStatusMap};

    fn run_habit() -> Habit {
        Habit {
            id: "h1".into(),
            name: "Run".into(),
            color: "#0f0".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: None,
            completed: false,
            completed_at: None,
        }
    }

    #[test]
    fn listing_prefers_synced_status_over_habit_flag() {
        let mut map = HabitStatusMap::new();
        map.insert(
            "h1".into(),
            HabitStatus {
                completed: true,
                completed_at: None,
            },
        );
        let sync = HabitStatusSync::with_snapshot(map);

        let row = listing(&run_habit(), &sync);
        assert!(row.completed);
    }

    #[test]
    fn listing_falls_back_to_habit_flag_without_status_entry() {
        let sync = HabitStatusSync::new();
        let row = listing(&run_habit(), &sync);
        assert!(!row.completed);
    }

    #[test]
    fn listing_serializes_camel_case() {
        let sync = HabitStatusSync::new();
        let json = serde_json::to_value(listing(&run_habit(), &sync)).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert!(json.get("time").is_none());
    }
}
