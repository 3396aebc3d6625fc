use crate::window::BrowserTab;

/// Source of open tabs for a browser window.
///
/// Implementations swallow every failure and return an empty list; the
/// caller never needs to know why tabs are missing.
pub trait TabSource: Send + Sync {
    /// Whether `executable` is a browser this source can query.
    fn supports(&self, executable: &str) -> bool;

    fn tabs(&self, title: &str, executable: &str) -> Vec<BrowserTab>;
}

/// Tab capture disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTabs;

impl TabSource for NoTabs {
    fn supports(&self, _executable: &str) -> bool {
        false
    }

    fn tabs(&self, _title: &str, _executable: &str) -> Vec<BrowserTab> {
        Vec::new()
    }
}
