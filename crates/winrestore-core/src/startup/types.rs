use serde::{Deserialize, Serialize};

/// Persistent user settings kept next to the layouts file.
///
/// Keys this version does not know about are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Layout restored by `startup run`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_preset: Option<String>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
