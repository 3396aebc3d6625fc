//! Starting applications that have no live window.

mod errors;
#[cfg(test)]
mod fake;
mod process;
mod traits;

pub use errors::LaunchError;
#[cfg(test)]
pub use fake::FakeLauncher;
pub use process::ProcessLauncher;
pub use traits::Launcher;
