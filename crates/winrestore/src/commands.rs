use clap::ArgMatches;
use tracing::{error, info, warn};

use winrestore_core::config::{WinrestoreConfig, load_config};
use winrestore_core::events;
use winrestore_core::startup::{
    SettingsFile, clear_startup_preset, set_startup_preset, startup_layout, startup_preset,
};
use winrestore_core::store::{JsonLayoutStore, Layout, LayoutStore, StoreError};
use winrestore_core::tabs::{DevToolsTabSource, NoTabs, TabSource};
use winrestore_core::{
    LayoutRestorer, ProcessLauncher, RestoreOptions, WindowEnumerator, detect_desktop,
    list_monitors, quadrant_selection,
};

use crate::color;
use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config_or_default();

    match matches.subcommand() {
        Some(("save", sub_matches)) => handle_save_command(sub_matches, &config),
        Some(("restore", sub_matches)) => handle_restore_command(sub_matches, &config),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("show", sub_matches)) => handle_show_command(sub_matches),
        Some(("delete", sub_matches)) => handle_delete_command(sub_matches),
        Some(("rename", sub_matches)) => handle_rename_command(sub_matches),
        Some(("capture", sub_matches)) => handle_capture_command(sub_matches, &config),
        Some(("monitors", sub_matches)) => handle_monitors_command(sub_matches),
        Some(("startup", sub_matches)) => handle_startup_command(sub_matches, &config),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// A broken config file should not block save or restore.
fn load_config_or_default() -> WinrestoreConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} {}",
                color::warning("Warning:"),
                color::warning(&format!("Could not load config ({}); using defaults", e))
            );
            warn!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            WinrestoreConfig::default()
        }
    }
}

fn capture_windows(
    config: &WinrestoreConfig,
    include_tabs: bool,
    include_minimized: bool,
) -> Vec<winrestore_core::WindowRecord> {
    let desktop = detect_desktop();
    let enumerator = WindowEnumerator::from_config(&config.capture);
    let tab_source: Box<dyn TabSource> = if include_tabs {
        Box::new(DevToolsTabSource::default())
    } else {
        Box::new(NoTabs)
    };
    enumerator.capture_all(
        desktop.as_ref(),
        tab_source.as_ref(),
        include_tabs,
        include_minimized,
    )
}

fn find_layout(store: &JsonLayoutStore, key: &str, by_id: bool) -> Result<Layout, StoreError> {
    let found = if by_id {
        store.load_by_id(key)?
    } else {
        store.load(key)?
    };
    found.ok_or_else(|| StoreError::NotFound {
        name: key.to_string(),
    })
}

fn handle_save_command(
    matches: &ArgMatches,
    config: &WinrestoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Layout name is required")?;
    let include_tabs = matches.get_flag("tabs") || config.capture.include_tabs;
    let include_minimized =
        matches.get_flag("include-minimized") || config.capture.include_minimized;
    let quadrants = matches.get_flag("quadrants");

    info!(
        event = "cli.save_started",
        name = %name,
        include_tabs = include_tabs,
        include_minimized = include_minimized,
        quadrants = quadrants
    );

    let mut windows = capture_windows(config, include_tabs, include_minimized);
    if quadrants {
        windows = quadrant_selection(windows);
    }

    let store = JsonLayoutStore::default();
    match store.save(name, &windows) {
        Ok(summary) => {
            println!(
                "{} Saved layout {} with {} window(s)",
                color::success("✓"),
                color::accent(&summary.name),
                summary.window_count
            );
            println!("  {}", color::muted(&format!("ID: {}", summary.id)));
            info!(
                event = "cli.save_completed",
                name = %summary.name,
                id = %summary.id,
                window_count = summary.window_count
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to save layout:"), e);
            error!(event = "cli.save_failed", name = %name, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_restore_command(
    matches: &ArgMatches,
    config: &WinrestoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("name")
        .ok_or("Layout name is required")?;
    let by_id = matches.get_flag("id");
    let json_output = matches.get_flag("json");

    info!(event = "cli.restore_started", key = %key, by_id = by_id);

    let store = JsonLayoutStore::default();
    let layout = match find_layout(&store, key, by_id) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to restore layout:"), e);
            error!(event = "cli.restore_failed", key = %key, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    restore_and_report(&layout, config, json_output)
}

/// Restore `layout` and print the outcome. Fails when no window came back.
fn restore_and_report(
    layout: &Layout,
    config: &WinrestoreConfig,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let desktop = detect_desktop();
    let launcher = ProcessLauncher;
    let restorer = LayoutRestorer::new(
        desktop.as_ref(),
        &launcher,
        RestoreOptions::from_config(&config.restore),
    );
    let report = restorer.restore_layout(&layout.windows);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in report.entries.iter().filter(|e| !e.is_restored()) {
            eprintln!(
                "  {} {} ({}): {}",
                color::warning("✗"),
                entry.title,
                color::muted(&entry.executable),
                entry.error.as_deref().unwrap_or("not restored")
            );
        }

        println!(
            "Restored {} windows from {}",
            color::restore_count(report.restored, report.attempted),
            color::accent(&layout.name)
        );
    }

    info!(
        event = "cli.restore_completed",
        name = %layout.name,
        attempted = report.attempted,
        restored = report.restored,
        failed = report.failed()
    );

    if !report.is_success() {
        error!(event = "cli.restore_nothing_restored", name = %layout.name);
        return Err(format!("No windows from '{}' could be restored", layout.name).into());
    }
    Ok(())
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let store = JsonLayoutStore::default();
    match store.list() {
        Ok(layouts) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&layouts)?);
            } else if layouts.is_empty() {
                println!("No saved layouts.");
                println!(
                    "  {}",
                    color::muted("Run `winrestore save <NAME>` to capture the current windows.")
                );
            } else {
                println!("Saved layouts:");
                table::print_layouts_table(&layouts);
            }

            info!(event = "cli.list_completed", count = layouts.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to list layouts:"), e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("name")
        .ok_or("Layout name is required")?;
    let by_id = matches.get_flag("id");
    let json_output = matches.get_flag("json");

    info!(event = "cli.show_started", key = %key, by_id = by_id);

    let store = JsonLayoutStore::default();
    match find_layout(&store, key, by_id) {
        Ok(layout) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!("{}: {}", color::bold("Layout"), color::accent(&layout.name));
                println!(
                    "{}: {}",
                    color::bold("Created"),
                    table::format_created(&layout.created)
                );
                println!("{}: {}", color::bold("ID"), color::muted(&layout.id));
                println!();
                table::print_records_table(&layout.windows);
            }

            info!(
                event = "cli.show_completed",
                name = %layout.name,
                window_count = layout.windows.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to show layout:"), e);
            error!(event = "cli.show_failed", key = %key, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_delete_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("name")
        .ok_or("Layout name is required")?;
    let by_id = matches.get_flag("id");

    info!(event = "cli.delete_started", key = %key, by_id = by_id);

    let store = JsonLayoutStore::default();
    let result = if by_id {
        store.delete_by_id(key)
    } else {
        store.delete(key)
    };

    match result {
        Ok(true) => {
            println!("{} Deleted layout {}", color::success("✓"), color::accent(key));
            info!(event = "cli.delete_completed", key = %key);
            Ok(())
        }
        Ok(false) => {
            let e = StoreError::NotFound {
                name: key.to_string(),
            };
            eprintln!("{} {}", color::error("Failed to delete layout:"), e);
            warn!(event = "cli.delete_not_found", key = %key);
            events::log_app_error(&e);
            Err(e.into())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to delete layout:"), e);
            error!(event = "cli.delete_failed", key = %key, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_rename_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let old_name = matches
        .get_one::<String>("old")
        .ok_or("Current layout name is required")?;
    let new_name = matches
        .get_one::<String>("new")
        .ok_or("New layout name is required")?;

    info!(
        event = "cli.rename_started",
        old_name = %old_name,
        new_name = %new_name
    );

    let store = JsonLayoutStore::default();
    match store.rename(old_name, new_name) {
        Ok(()) => {
            println!(
                "{} Renamed {} to {}",
                color::success("✓"),
                color::accent(old_name),
                color::accent(new_name.trim())
            );
            info!(event = "cli.rename_completed", new_name = %new_name);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to rename layout:"), e);
            error!(event = "cli.rename_failed", old_name = %old_name, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_capture_command(
    matches: &ArgMatches,
    config: &WinrestoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let include_tabs = matches.get_flag("tabs") || config.capture.include_tabs;
    let include_minimized =
        matches.get_flag("include-minimized") || config.capture.include_minimized;

    info!(
        event = "cli.capture_started",
        json_output = json_output,
        include_tabs = include_tabs
    );

    let windows = capture_windows(config, include_tabs, include_minimized);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else if windows.is_empty() {
        println!("No capturable windows found.");
    } else {
        println!("Capturable windows:");
        table::print_records_table(&windows);
    }

    info!(event = "cli.capture_completed", count = windows.len());
    Ok(())
}

fn handle_monitors_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.monitors_started", json_output = json_output);

    let desktop = detect_desktop();
    let monitors = list_monitors(desktop.as_ref());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&monitors)?);
    } else {
        println!("Monitors:");
        table::print_monitors_table(&monitors);
    }

    info!(event = "cli.monitors_completed", count = monitors.len());
    Ok(())
}

fn handle_startup_command(
    matches: &ArgMatches,
    config: &WinrestoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => handle_startup_set(sub_matches),
        Some(("clear", _)) => handle_startup_clear(),
        Some(("show", _)) => handle_startup_show(),
        Some(("run", sub_matches)) => handle_startup_run(sub_matches, config),
        _ => {
            error!(event = "cli.startup_subcommand_unknown");
            Err("Unknown startup subcommand".into())
        }
    }
}

fn handle_startup_set(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Layout name is required")?;

    info!(event = "cli.startup_set_started", name = %name);

    match set_startup_preset(&JsonLayoutStore::default(), &SettingsFile::default(), name) {
        Ok(stored) => {
            println!(
                "{} Startup layout set to {}",
                color::success("✓"),
                color::accent(&stored)
            );
            println!(
                "  {}",
                color::muted("Run `winrestore startup run` from your login items to restore it.")
            );
            info!(event = "cli.startup_set_completed", name = %stored);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to set startup layout:"), e);
            error!(event = "cli.startup_set_failed", name = %name, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_startup_clear() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.startup_clear_started");

    match clear_startup_preset(&SettingsFile::default()) {
        Ok(Some(previous)) => {
            println!(
                "{} Startup layout {} cleared",
                color::success("✓"),
                color::accent(&previous)
            );
            info!(event = "cli.startup_clear_completed", previous = %previous);
            Ok(())
        }
        Ok(None) => {
            println!("No startup layout was set.");
            info!(event = "cli.startup_clear_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to clear startup layout:"), e);
            error!(event = "cli.startup_clear_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_startup_show() -> Result<(), Box<dyn std::error::Error>> {
    match startup_preset(&SettingsFile::default()) {
        Ok(Some(name)) => {
            println!("{}: {}", color::bold("Startup layout"), color::accent(&name));
            Ok(())
        }
        Ok(None) => {
            println!("No startup layout set.");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to read settings:"), e);
            error!(event = "cli.startup_show_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_startup_run(
    matches: &ArgMatches,
    config: &WinrestoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.startup_run_started");

    match startup_layout(&JsonLayoutStore::default(), &SettingsFile::default()) {
        Ok(Some(layout)) => {
            info!(event = "cli.startup_run_restoring", name = %layout.name);
            restore_and_report(&layout, config, json_output)
        }
        Ok(None) => {
            info!(event = "cli.startup_run_skipped", reason = "no startup layout");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to restore startup layout:"), e);
            error!(event = "cli.startup_run_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<clap_complete::Shell>("shell")
        .ok_or("Shell is required")?;

    let mut cmd = crate::app::build_cli();
    clap_complete::generate(shell, &mut cmd, "winrestore", &mut std::io::stdout());

    info!(event = "cli.completions_generated", shell = %shell);
    Ok(())
}
