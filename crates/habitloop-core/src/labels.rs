//! Versioned registry of task labels.
//!
//! The registry holds the mutable set of categorization labels available to
//! natively created tasks. Updates replace the list wholesale (never a
//! merge) and are immediately observable to subsequent reads. Replacement
//! lists carrying the same id twice are rejected, so identifier uniqueness
//! is an invariant of the held list.

use std::collections::HashSet;

use chrono::Utc;

use crate::error::LabelError;
use crate::events::Event;
use crate::task::TaskLabel;

/// Ordered collection of task labels with a replace-only update path.
///
/// Insertion order is preserved for display; it carries no other meaning.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    labels: Vec<TaskLabel>,
    version: u64,
}

impl LabelRegistry {
    /// Create an empty registry at version 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with an initial list.
    pub fn with_labels(labels: Vec<TaskLabel>) -> Result<Self, LabelError> {
        let mut registry = Self::new();
        registry.update_labels(labels)?;
        Ok(registry)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn labels(&self) -> &[TaskLabel] {
        &self.labels
    }

    /// Bumped once per successful replacement.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: &str) -> Option<&TaskLabel> {
        self.labels.iter().find(|label| label.id == id)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the whole label list.
    ///
    /// Rejects lists containing a duplicate id; the held list is left
    /// unchanged on failure.
    pub fn update_labels(&mut self, labels: Vec<TaskLabel>) -> Result<Event, LabelError> {
        if let Some(id) = find_duplicate(&labels) {
            return Err(LabelError::DuplicateId { id: id.to_string() });
        }
        self.labels = labels;
        self.version += 1;
        Ok(Event::LabelsReplaced {
            version: self.version,
            count: self.labels.len(),
            at: Utc::now(),
        })
    }
}

fn find_duplicate(labels: &[TaskLabel]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .find(|label| !seen.insert(label.id.as_str()))
        .map(|label| label.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, name: &str) -> TaskLabel {
        TaskLabel {
            id: id.into(),
            name: name.into(),
            color: "#888".into(),
        }
    }

    #[test]
    fn update_replaces_not_merges() {
        let mut registry =
            LabelRegistry::with_labels(vec![label("work", "Work"), label("home", "Home")]).unwrap();
        registry.update_labels(vec![label("sport", "Sport")]).unwrap();
        assert_eq!(registry.labels().len(), 1);
        assert_eq!(registry.labels()[0].id, "sport");
    }

    #[test]
    fn update_is_immediately_observable() {
        let mut registry = LabelRegistry::new();
        registry.update_labels(vec![label("work", "Work")]).unwrap();
        assert!(registry.get("work").is_some());
    }

    #[test]
    fn duplicate_id_is_rejected_and_list_kept() {
        let mut registry = LabelRegistry::with_labels(vec![label("work", "Work")]).unwrap();
        let err = registry
            .update_labels(vec![label("a", "A"), label("a", "Other A")])
            .unwrap_err();
        assert!(matches!(err, LabelError::DuplicateId { ref id } if id == "a"));
        assert_eq!(registry.labels().len(), 1);
        assert_eq!(registry.labels()[0].id, "work");
        assert_eq!(registry.version(), 1);
    }

    #[test]
    fn version_bumps_per_successful_replace() {
        let mut registry = LabelRegistry::new();
        assert_eq!(registry.version(), 0);
        registry.update_labels(vec![label("a", "A")]).unwrap();
        registry.update_labels(vec![label("b", "B")]).unwrap();
        assert_eq!(registry.version(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut registry = LabelRegistry::new();
        registry
            .update_labels(vec![label("z", "Z"), label("a", "A"), label("m", "M")])
            .unwrap();
        let ids: Vec<_> = registry.labels().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }
}
