use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{error, info};

use super::errors::LaunchError;
use super::traits::Launcher;

/// Launches applications as detached child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Resolve an executable to a path: an existing file as-is, otherwise a `PATH` lookup.
    pub fn resolve(executable: &str) -> Result<PathBuf, LaunchError> {
        let path = Path::new(executable);
        if path.is_file() {
            return Ok(path.to_path_buf());
        }

        which::which(executable).map_err(|_| LaunchError::ExecutableNotFound {
            executable: executable.to_string(),
        })
    }
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(windows))]
fn detach(_command: &mut Command) {}

impl Launcher for ProcessLauncher {
    fn launch(&self, executable: &str) -> Result<u32, LaunchError> {
        info!(event = "core.launch.spawn_started", executable = %executable);

        let path = Self::resolve(executable).inspect_err(|e| {
            error!(
                event = "core.launch.spawn_failed",
                executable = %executable,
                error = %e
            );
        })?;

        let mut command = Command::new(&path);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            command.current_dir(dir);
        }
        detach(&mut command);

        match command.spawn() {
            Ok(child) => {
                let pid = child.id();
                info!(
                    event = "core.launch.spawn_completed",
                    executable = %executable,
                    pid = pid
                );
                Ok(pid)
            }
            Err(source) => {
                error!(
                    event = "core.launch.spawn_failed",
                    executable = %executable,
                    error = %source
                );
                Err(LaunchError::SpawnFailed {
                    executable: executable.to_string(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_missing_executable() {
        let err = ProcessLauncher::resolve(r"C:\definitely\not\here\app-4f1c.exe").unwrap_err();
        assert!(matches!(err, LaunchError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_resolve_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tool.exe");
        std::fs::write(&path, b"").unwrap();

        let resolved = ProcessLauncher::resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_launch_missing_executable_fails() {
        let result = ProcessLauncher.launch("winrestore-test-no-such-binary-7d2e");
        assert!(matches!(
            result,
            Err(LaunchError::ExecutableNotFound { .. })
        ));
    }
}
