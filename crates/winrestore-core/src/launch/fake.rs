use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use super::errors::LaunchError;
use super::traits::Launcher;
use crate::desktop::{FakeDesktop, FakeWindow};

#[derive(Debug, Default)]
struct LaunchState {
    launches: Vec<String>,
    failing: HashSet<String>,
    spawns: HashMap<String, FakeWindow>,
    next_pid: u32,
}

/// Launcher double that records calls and can open a window on a [`FakeDesktop`].
#[derive(Debug, Default)]
pub struct FakeLauncher {
    desktop: Option<FakeDesktop>,
    state: Mutex<LaunchState>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows registered with [`FakeLauncher::spawning`] appear on `desktop`.
    pub fn with_desktop(mut self, desktop: FakeDesktop) -> Self {
        self.desktop = Some(desktop);
        self
    }

    /// Make launching `executable` fail as if it were missing.
    pub fn failing(self, executable: &str) -> Self {
        self.lock().failing.insert(executable.to_string());
        self
    }

    /// Add `window` to the desktop each time `executable` is launched.
    pub fn spawning(self, executable: &str, window: FakeWindow) -> Self {
        self.lock().spawns.insert(executable.to_string(), window);
        self
    }

    /// Executables launched so far, in order.
    pub fn launches(&self) -> Vec<String> {
        self.lock().launches.clone()
    }

    fn lock(&self) -> MutexGuard<'_, LaunchState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Launcher for FakeLauncher {
    fn launch(&self, executable: &str) -> Result<u32, LaunchError> {
        let mut state = self.lock();
        state.launches.push(executable.to_string());

        if state.failing.contains(executable) {
            return Err(LaunchError::ExecutableNotFound {
                executable: executable.to_string(),
            });
        }

        if let (Some(desktop), Some(window)) = (&self.desktop, state.spawns.get(executable)) {
            desktop.add_window(window.clone());
        }

        state.next_pid += 1;
        Ok(1000 + state.next_pid)
    }
}
