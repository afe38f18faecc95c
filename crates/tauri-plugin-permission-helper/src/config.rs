//! Plugin configuration, read from `tauri.conf.json > plugins > permission-helper`.

use serde::Deserialize;

/// Configuration for the settings launcher. Every field is optional; a missing
/// `permission-helper` section means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// Adds `FLAG_ACTIVITY_NEW_TASK` to the intent. Needed when the registered context is the
    /// application rather than an activity.
    pub new_task: bool,
}

impl PluginConfig {
    /// Resolves the effective config from the (optional) `tauri.conf.json` section.
    pub fn from_plugin_config(configured: Option<PluginConfig>) -> Self {
        configured.unwrap_or_default()
    }
}
