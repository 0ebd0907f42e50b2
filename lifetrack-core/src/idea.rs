//! Idea backlog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category id, if filed under one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: IdeaStatus,
    /// Free-form follow-up notes.
    #[serde(default)]
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Idea {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            category: None,
            status: IdeaStatus::Backlog,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Backlog,
    Active,
    Done,
    Dropped,
}

impl IdeaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Backlog => "backlog",
            IdeaStatus::Active => "active",
            IdeaStatus::Done => "done",
            IdeaStatus::Dropped => "dropped",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(IdeaStatus::Backlog),
            "active" => Some(IdeaStatus::Active),
            "done" => Some(IdeaStatus::Done),
            "dropped" => Some(IdeaStatus::Dropped),
            _ => None,
        }
    }
}

/// Categories seeded into a fresh journal.
pub fn default_idea_categories() -> Vec<Category> {
    vec![
        Category::new("Music", "#EC4899", "music"),
        Category::new("Projects", "#3B82F6", "briefcase"),
        Category::new("Apps", "#10B981", "smartphone"),
        Category::new("Business", "#F59E0B", "trending-up"),
        Category::new("Creative", "#8B5CF6", "palette"),
        Category::new("Improvements", "#14B8A6", "lightbulb"),
        Category::new("Other", "#6B7280", "folder"),
    ]
}
