//! Task view commands for CLI.

use clap::Subcommand;
use habitloop_core::{date, CoreError, Task};

use super::{load_habits, open_store};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List the task views derived from habits
    List {
        /// Only tasks due on the current local day
        #[arg(long)]
        today: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), CoreError> {
    let store = open_store()?;
    match action {
        TaskAction::List { today } => {
            let today_key = date::today_key();
            let tasks: Vec<Task> = load_habits(&store)?
                .iter()
                .map(Task::from_habit)
                .filter(|task| !today || task.due_date.to_string() == today_key)
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
    }
    Ok(())
}
