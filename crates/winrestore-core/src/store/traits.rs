use super::errors::StoreError;
use super::types::{Layout, LayoutSummary};
use crate::window::WindowRecord;

/// Storage for named layouts.
///
/// Name lookups are case-insensitive. A store that does not exist yet is empty.
pub trait LayoutStore {
    /// Save `windows` under `name`. A taken name gets a ` (n)` suffix.
    fn save(&self, name: &str, windows: &[WindowRecord]) -> Result<LayoutSummary, StoreError>;

    fn load(&self, name: &str) -> Result<Option<Layout>, StoreError>;

    fn load_by_id(&self, id: &str) -> Result<Option<Layout>, StoreError>;

    /// Summaries in save order.
    fn list(&self) -> Result<Vec<LayoutSummary>, StoreError>;

    /// Returns whether a layout was removed.
    fn delete(&self, name: &str) -> Result<bool, StoreError>;

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError>;
}
