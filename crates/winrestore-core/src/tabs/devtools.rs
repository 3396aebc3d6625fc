use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use super::browsers::Browser;
use super::traits::TabSource;
use crate::window::BrowserTab;

const DEFAULT_HOST: &str = "127.0.0.1";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
const READ_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct DevToolsTarget {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
}

/// Parse the target list served at `/json`, keeping page targets only.
pub fn parse_targets(body: &str) -> Result<Vec<BrowserTab>, serde_json::Error> {
    let targets: Vec<DevToolsTarget> = serde_json::from_str(body)?;
    Ok(targets
        .into_iter()
        .filter(|t| t.kind == "page" && !t.url.is_empty())
        .map(|t| BrowserTab {
            url: t.url,
            title: t.title,
        })
        .collect())
}

/// Reads open tabs from a browser's remote debugging endpoint.
///
/// Only works when the browser was started with remote debugging enabled;
/// otherwise the connection is refused and no tabs are reported.
pub struct DevToolsTabSource {
    agent: ureq::Agent,
    host: String,
}

impl Default for DevToolsTabSource {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl DevToolsTabSource {
    pub fn new(host: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            agent,
            host: host.into(),
        }
    }

    fn fetch(&self, browser: Browser) -> Result<String, String> {
        let url = format!("http://{}:{}/json", self.host, browser.debugging_port());
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| format!("GET {url}: {e}"))?;
        response
            .into_string()
            .map_err(|e| format!("read GET response body: {e}"))
    }
}

impl TabSource for DevToolsTabSource {
    fn supports(&self, executable: &str) -> bool {
        Browser::from_executable(executable).is_some()
    }

    fn tabs(&self, title: &str, executable: &str) -> Vec<BrowserTab> {
        let Some(browser) = Browser::from_executable(executable) else {
            return Vec::new();
        };

        let body = match self.fetch(browser) {
            Ok(body) => body,
            Err(e) => {
                debug!(
                    event = "core.tabs.fetch_failed",
                    browser = browser.name(),
                    window_title = %title,
                    error = %e
                );
                return Vec::new();
            }
        };

        match parse_targets(&body) {
            Ok(tabs) => {
                info!(
                    event = "core.tabs.capture_completed",
                    browser = browser.name(),
                    count = tabs.len()
                );
                tabs
            }
            Err(e) => {
                debug!(
                    event = "core.tabs.parse_failed",
                    browser = browser.name(),
                    error = %e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets_keeps_pages() {
        let body = r#"[
            {"id": "1", "type": "page", "title": "GitHub", "url": "https://github.com/"},
            {"id": "2", "type": "service_worker", "title": "sw", "url": "https://example.com/sw.js"},
            {"id": "3", "type": "page", "title": "Docs", "url": "https://docs.rs/"},
            {"id": "4", "type": "background_page", "url": "chrome-extension://abc/bg.html"}
        ]"#;
        let tabs = parse_targets(body).unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].url, "https://github.com/");
        assert_eq!(tabs[1].title, "Docs");
    }

    #[test]
    fn test_parse_targets_tolerates_missing_fields() {
        let tabs = parse_targets(r#"[{"type": "page", "url": "about:blank"}, {"title": "x"}]"#)
            .unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "");
    }

    #[test]
    fn test_parse_targets_rejects_garbage() {
        assert!(parse_targets("not json").is_err());
    }

    #[test]
    fn test_unsupported_executable_has_no_tabs() {
        let source = DevToolsTabSource::default();
        assert!(!source.supports(r"C:\Windows\notepad.exe"));
        assert!(source.tabs("notes", r"C:\Windows\notepad.exe").is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_yields_empty() {
        // Reserved TEST-NET address, nothing answers there
        let source = DevToolsTabSource::new("192.0.2.1");
        assert!(source.tabs("GitHub", "chrome.exe").is_empty());
    }
}
