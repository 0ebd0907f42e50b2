//! Goals with milestones and progress history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub completed: bool,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub progress_history: Vec<ProgressPoint>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(title: impl Into<String>) -> Self {
        Goal {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            target_date: None,
            completed: false,
            milestones: Vec::new(),
            progress_history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Flip exactly one milestone by index. Returns the new state, or `None`
    /// when the index is out of range.
    pub fn toggle_milestone(&mut self, index: usize) -> Option<bool> {
        let milestone = self.milestones.get_mut(index)?;
        milestone.completed = !milestone.completed;
        Some(milestone.completed)
    }

    /// Completed milestones out of the total.
    pub fn milestone_progress(&self) -> (usize, usize) {
        let done = self.milestones.iter().filter(|m| m.completed).count();
        (done, self.milestones.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub label: String,
    pub completed: bool,
}

impl Milestone {
    pub fn new(label: impl Into<String>) -> Self {
        Milestone {
            label: label.into(),
            completed: false,
        }
    }
}

/// A dated progress measurement (free scale, typically 0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_milestone_flips_only_the_target() {
        let mut goal = Goal::new("Learn Swedish");
        goal.milestones = vec![Milestone::new("A1"), Milestone::new("A2")];

        assert_eq!(goal.toggle_milestone(1), Some(true));
        assert!(!goal.milestones[0].completed);
        assert!(goal.milestones[1].completed);

        assert_eq!(goal.toggle_milestone(1), Some(false));
        assert!(!goal.milestones[1].completed);
    }

    #[test]
    fn toggle_milestone_out_of_range() {
        let mut goal = Goal::new("Learn Swedish");
        assert_eq!(goal.toggle_milestone(0), None);
    }

    #[test]
    fn milestone_progress_counts() {
        let mut goal = Goal::new("Ship the app");
        goal.milestones = vec![
            Milestone::new("MVP"),
            Milestone::new("Beta"),
            Milestone::new("Launch"),
        ];
        goal.toggle_milestone(0);

        assert_eq!(goal.milestone_progress(), (1, 3));
    }
}
