//! Access to the live desktop: monitors, top-level windows and window state changes.

mod backends;
mod errors;
#[cfg(test)]
mod fake;
mod registry;
mod traits;
mod types;

pub use backends::UnsupportedDesktop;
#[cfg(windows)]
pub use backends::Win32Desktop;
pub use errors::DesktopError;
#[cfg(test)]
pub use fake::{DesktopCall, FakeDesktop, FakeWindow};
pub use registry::detect_desktop;
pub use traits::Desktop;
pub use types::{KeyStroke, ProcessInfo, WindowHandle, WindowSnapshot, executable_name};
