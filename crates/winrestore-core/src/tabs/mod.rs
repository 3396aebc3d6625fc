//! Best-effort browser tab capture.

mod browsers;
mod devtools;
#[cfg(test)]
mod fake;
mod traits;

pub use browsers::{Browser, DEVTOOLS_PORT};
pub use devtools::{DevToolsTabSource, parse_targets};
#[cfg(test)]
pub use fake::StaticTabs;
pub use traits::{NoTabs, TabSource};
