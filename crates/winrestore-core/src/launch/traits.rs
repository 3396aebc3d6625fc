use super::errors::LaunchError;

/// Process-launch collaborator.
///
/// Only reports whether something started; the process lifecycle is not tracked.
pub trait Launcher: Send + Sync {
    /// Start `executable` and return the new process id.
    fn launch(&self, executable: &str) -> Result<u32, LaunchError>;
}
