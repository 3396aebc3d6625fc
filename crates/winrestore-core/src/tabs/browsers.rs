use crate::desktop::executable_name;

/// Remote debugging port the browsers are expected to listen on
pub const DEVTOOLS_PORT: u16 = 9222;

/// Browsers whose tabs can be captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Brave,
    Opera,
}

impl Browser {
    pub const ALL: [Browser; 5] = [
        Browser::Chrome,
        Browser::Edge,
        Browser::Firefox,
        Browser::Brave,
        Browser::Opera,
    ];

    /// Executable base name, lowercased.
    pub fn executable(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome.exe",
            Browser::Edge => "msedge.exe",
            Browser::Firefox => "firefox.exe",
            Browser::Brave => "brave.exe",
            Browser::Opera => "opera.exe",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Brave => "brave",
            Browser::Opera => "opera",
        }
    }

    pub fn debugging_port(&self) -> u16 {
        DEVTOOLS_PORT
    }

    /// Recognize a browser from an executable path or name.
    pub fn from_executable(executable: &str) -> Option<Browser> {
        let name = executable_name(executable);
        let stem = name.strip_suffix(".exe").unwrap_or(&name);
        Browser::ALL
            .into_iter()
            .find(|b| b.executable().trim_end_matches(".exe") == stem)
    }
}
