//! Task label commands for CLI.

use clap::Subcommand;
use habitloop_core::{CoreError, LabelRegistry, TaskLabel};

use super::{open_store, LABELS_KEY};

#[derive(Subcommand)]
pub enum LabelAction {
    /// List the active labels
    List,
    /// Replace the whole label list with a JSON array
    Set {
        /// JSON array of labels, e.g. '[{"id":"work","name":"Work","color":"#f00"}]'
        json: String,
    },
}

pub fn run(action: LabelAction) -> Result<(), CoreError> {
    let store = open_store()?;
    match action {
        LabelAction::List => {
            let labels: Vec<TaskLabel> = match store.get(LABELS_KEY)? {
                Some(raw) => serde_json::from_str(&raw)?,
                None => Vec::new(),
            };
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        LabelAction::Set { json } => {
            let labels: Vec<TaskLabel> = serde_json::from_str(&json)?;
            // The registry enforces id uniqueness before anything persists.
            let mut registry = match store.get(LABELS_KEY)? {
                Some(raw) => LabelRegistry::with_labels(serde_json::from_str(&raw)?)?,
                None => LabelRegistry::new(),
            };
            let event = registry.update_labels(labels)?;
            store.set(LABELS_KEY, &serde_json::to_string(registry.labels())?)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
