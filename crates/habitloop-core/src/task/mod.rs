//! Task types and the Habit → Task view conversion.
//!
//! A Task derived from a Habit is a *view*, not a new entity: its id lives
//! in the reserved `"habit-"` namespace so it can never collide with a
//! natively created task, and converting the same Habit twice yields
//! structurally equal Tasks. The Habit stays the single source of truth for
//! completion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Id namespace prefix for habit-derived tasks.
pub const HABIT_ID_PREFIX: &str = "habit-";
/// Reserved label id for habit-derived tasks; never present in the registry.
pub const HABIT_LABEL_ID: &str = "habit";
/// Display name of the reserved habit label (source locale kept on the wire).
pub const HABIT_LABEL_NAME: &str = "Hábito";

/// Task type discriminator. Only one variant today; the tag is kept on the
/// wire so task-rendering collaborators can discriminate against other shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Task,
}

impl Default for TaskKind {
    fn default() -> Self {
        TaskKind::Task
    }
}

/// Task priority. Habit-derived tasks default to Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// A categorization label referenced by tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLabel {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub title: String,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub label: TaskLabel,
}

impl Task {
    /// Derive the Task view of a Habit.
    ///
    /// Total and pure: absent optional fields are valid, nothing is looked
    /// up. The label is synthesized with the reserved [`HABIT_LABEL_ID`]
    /// rather than read from the registry, so habit-derived tasks are never
    /// affected by registry mutations.
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            id: format!("{HABIT_ID_PREFIX}{}", habit.id),
            kind: TaskKind::Task,
            title: habit.name.clone(),
            priority: TaskPriority::Medium,
            due_date: habit.start_date,
            created_at: habit.start_date,
            time: habit.time.clone(),
            completed: habit.completed,
            completed_at: habit.completed_at,
            label: TaskLabel {
                id: HABIT_LABEL_ID.to_string(),
                name: HABIT_LABEL_NAME.to_string(),
                color: habit.color.clone(),
            },
        }
    }

    /// Display color, derived from the label.
    pub fn color(&self) -> &str {
        &self.label.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn run_habit() -> Habit {
        Habit {
            id: "h1".into(),
            name: "Run".into(),
            color: "#0f0".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: Some("07:00".into()),
            completed: true,
            completed_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 7, 10, 0).unwrap()),
        }
    }

    #[test]
    fn from_habit_maps_every_field() {
        let task = Task::from_habit(&run_habit());
        assert_eq!(task.id, "habit-h1");
        assert_eq!(task.kind, TaskKind::Task);
        assert_eq!(task.title, "Run");
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(task.created_at, task.due_date);
        assert_eq!(task.time.as_deref(), Some("07:00"));
        assert!(task.completed);
        assert_eq!(
            task.completed_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 7, 10, 0).unwrap())
        );
        assert_eq!(task.label.id, "habit");
        assert_eq!(task.label.name, "Hábito");
        assert_eq!(task.label.color, "#0f0");
        assert_eq!(task.color(), "#0f0");
    }

    #[test]
    fn absent_optionals_are_valid() {
        let mut habit = run_habit();
        habit.time = None;
        habit.completed = false;
        habit.completed_at = None;
        let task = Task::from_habit(&habit);
        assert!(task.time.is_none());
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn wire_format_uses_type_tag() {
        let json = serde_json::to_value(Task::from_habit(&run_habit())).unwrap();
        assert_eq!(json["type"], "task");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["dueDate"], "2024-01-01");
    }

    proptest! {
        #[test]
        fn conversion_is_idempotent_and_namespaced(
            id in "[a-z0-9]{1,12}",
            name in ".{0,40}",
            completed in any::<bool>(),
        ) {
            let habit = Habit {
                id: id.clone(),
                name,
                color: "#abc".into(),
                start_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                time: None,
                completed,
                completed_at: None,
            };
            let first = Task::from_habit(&habit);
            let second = Task::from_habit(&habit);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.id, format!("habit-{id}"));
        }
    }
}
