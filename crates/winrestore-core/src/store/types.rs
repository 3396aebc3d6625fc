use serde::{Deserialize, Serialize};

use crate::window::WindowRecord;

/// A named, ordered set of window records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: String,
    pub name: String,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub windows: Vec<WindowRecord>,
}

impl Layout {
    pub fn new(name: impl Into<String>, windows: Vec<WindowRecord>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created: chrono::Local::now().to_rfc3339(),
            windows,
        }
    }

    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created: self.created.clone(),
            window_count: self.windows.len(),
        }
    }
}

/// Listing entry for a saved layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub id: String,
    pub name: String,
    pub created: String,
    pub window_count: usize,
}

/// On-disk shape of the layouts file
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct PresetsFile {
    #[serde(default)]
    pub presets: Vec<Layout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout_has_id_and_timestamp() {
        let layout = Layout::new("work", Vec::new());
        assert_eq!(layout.id.len(), 36);
        assert!(chrono::DateTime::parse_from_rfc3339(&layout.created).is_ok());
        assert_ne!(layout.id, Layout::new("work", Vec::new()).id);
    }

    #[test]
    fn test_summary_counts_windows() {
        let layout = Layout::new("empty", Vec::new());
        let summary = layout.summary();
        assert_eq!(summary.name, "empty");
        assert_eq!(summary.window_count, 0);
        assert_eq!(summary.id, layout.id);
    }
}
