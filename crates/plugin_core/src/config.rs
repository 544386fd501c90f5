use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Selection Plugin";

/// Panel configuration handed to the host when the UI surface is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Follow the host's light/dark theme.
    pub theme_colors: bool,
    pub height: u32,
    pub width: u32,
    pub title: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            theme_colors: true,
            height: 200,
            width: 400,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub ui: UiOptions,
    /// Session-wide host flag; instance children that are hidden are skipped
    /// by any later document traversal.
    pub skip_invisible_instance_children: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            skip_invisible_instance_children: true,
        }
    }
}
