use tracing::{debug, info};

use super::errors::StartupError;
use super::persistence::SettingsFile;
use crate::store::{Layout, LayoutStore};

/// Remember `name` as the layout to restore at login.
///
/// The layout must exist. The stored value is the layout's own spelling of
/// the name, which is returned.
pub fn set_startup_preset(
    store: &dyn LayoutStore,
    settings: &SettingsFile,
    name: &str,
) -> Result<String, StartupError> {
    let layout = store.load(name)?.ok_or_else(|| StartupError::LayoutNotFound {
        name: name.to_string(),
    })?;

    let mut current = settings.load()?;
    current.startup_preset = Some(layout.name.clone());
    settings.save(&current)?;

    info!(event = "core.startup.preset_set", name = %layout.name);
    Ok(layout.name)
}

/// Forget the startup layout. Returns the name that was set, if any.
pub fn clear_startup_preset(settings: &SettingsFile) -> Result<Option<String>, StartupError> {
    let mut current = settings.load()?;
    let previous = current.startup_preset.take();
    if previous.is_some() {
        settings.save(&current)?;
        info!(event = "core.startup.preset_cleared", name = ?previous);
    }
    Ok(previous)
}

pub fn startup_preset(settings: &SettingsFile) -> Result<Option<String>, StartupError> {
    Ok(settings.load()?.startup_preset)
}

/// The layout to restore at login.
///
/// `Ok(None)` when no startup layout is configured. A configured name whose
/// layout has since been deleted is `LayoutNotFound`.
pub fn startup_layout(
    store: &dyn LayoutStore,
    settings: &SettingsFile,
) -> Result<Option<Layout>, StartupError> {
    let Some(name) = startup_preset(settings)? else {
        debug!(event = "core.startup.no_preset");
        return Ok(None);
    };

    store
        .load(&name)?
        .map(Some)
        .ok_or(StartupError::LayoutNotFound { name })
}
