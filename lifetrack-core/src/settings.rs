//! User settings stored inside the journal document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether the `remind` command should post desktop notifications.
    #[serde(default)]
    pub reminders_enabled: bool,
    /// Which overview the user prefers to open first.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_view() -> String {
    "dashboard".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reminders_enabled: false,
            default_view: default_view(),
        }
    }
}
