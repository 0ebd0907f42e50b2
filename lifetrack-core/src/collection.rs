//! Free-form bookmark collection: saved links, articles, tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A category for collection items (also reused by the idea backlog).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(name: &str, color: &str, icon: &str) -> Self {
        Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: Some(color.to_string()),
            icon: Some(icon.to_string()),
        }
    }
}

/// A saved bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Category id, if filed under one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CollectionItem {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        CollectionItem {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            url: None,
            notes: None,
            category: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Categories seeded into a fresh journal.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Websites", "#3B82F6", "globe"),
        Category::new("Articles", "#10B981", "file-text"),
        Category::new("Videos", "#EF4444", "video"),
        Category::new("Tools", "#F59E0B", "wrench"),
        Category::new("Books", "#8B5CF6", "book"),
        Category::new("Podcasts", "#EC4899", "mic"),
        Category::new("Tutorials", "#14B8A6", "graduation-cap"),
        Category::new("Recipes", "#F97316", "utensils"),
        Category::new("Other", "#6B7280", "folder"),
    ]
}
