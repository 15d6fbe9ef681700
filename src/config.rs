use crate::error::GuiResult;
use serde::Deserialize;

/// Settings for a [GuiBuilder](crate::gui::GuiBuilder).
///
/// ```json
/// { "registryKey": "flow-field", "capacity": 200, "persist": true, "initFromStorage": true }
/// ```
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuiConfig {
    /// Key of the registry inside stored and exported snapshots.
    pub registry_key: String,
    /// Maximum number of history entries; `0` means no limit.
    pub capacity: usize,
    /// Mirror the current entry to the store.
    pub persist: bool,
    /// Seed the history from the store at startup.
    pub init_from_storage: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            registry_key: "generator".to_string(),
            capacity: 0,
            persist: true,
            init_from_storage: true,
        }
    }
}

impl GuiConfig {
    pub fn from_json(json: &str) -> GuiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
