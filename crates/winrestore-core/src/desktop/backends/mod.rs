//! Desktop backend implementations.

mod unsupported;
#[cfg(windows)]
mod win32;

pub use unsupported::UnsupportedDesktop;
#[cfg(windows)]
pub use win32::Win32Desktop;
