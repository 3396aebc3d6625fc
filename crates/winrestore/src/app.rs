use clap::{Arg, ArgAction, Command};

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output as JSON")
        .action(ArgAction::SetTrue)
}

fn tabs_arg() -> Arg {
    Arg::new("tabs")
        .long("tabs")
        .help("Capture open browser tabs (needs remote debugging on port 9222)")
        .action(ArgAction::SetTrue)
}

fn include_minimized_arg() -> Arg {
    Arg::new("include-minimized")
        .long("include-minimized")
        .help("Also capture minimized windows")
        .action(ArgAction::SetTrue)
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .help("Treat NAME as a layout id instead of a name")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("winrestore")
        .about("Save and restore desktop window layouts")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("save")
                .about("Capture the current windows and save them as a layout")
                .arg(
                    Arg::new("name")
                        .help("Name for the layout")
                        .required(true)
                        .index(1),
                )
                .arg(tabs_arg())
                .arg(include_minimized_arg())
                .arg(
                    Arg::new("quadrants")
                        .long("quadrants")
                        .help("Keep only the four windows nearest the top-left (4-quadrant layout)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("restore")
                .about("Restore a saved layout")
                .arg(
                    Arg::new("name")
                        .help("Name (or id with --id) of the layout")
                        .required(true)
                        .index(1),
                )
                .arg(id_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List saved layouts")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show the windows stored in a layout")
                .arg(
                    Arg::new("name")
                        .help("Name (or id with --id) of the layout")
                        .required(true)
                        .index(1),
                )
                .arg(id_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a saved layout")
                .arg(
                    Arg::new("name")
                        .help("Name (or id with --id) of the layout")
                        .required(true)
                        .index(1),
                )
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename a saved layout")
                .arg(
                    Arg::new("old")
                        .help("Current layout name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("new")
                        .help("New layout name")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("capture")
                .about("Show what would be saved, without saving")
                .arg(json_arg())
                .arg(tabs_arg())
                .arg(include_minimized_arg()),
        )
        .subcommand(
            Command::new("monitors")
                .about("List connected monitors and their work areas")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("startup")
                .about("Choose the layout restored at login")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set")
                        .about("Restore this layout at login")
                        .arg(
                            Arg::new("name")
                                .help("Name of an existing layout")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("clear").about("Stop restoring a layout at login"))
                .subcommand(Command::new("show").about("Show the configured startup layout"))
                .subcommand(
                    Command::new("run")
                        .about("Restore the configured startup layout (does nothing when none is set)")
                        .arg(json_arg()),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "winrestore");
        app.debug_assert();
    }

    #[test]
    fn test_save_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "save", "Work", "--tabs", "--quadrants"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "save");
        assert_eq!(sub.get_one::<String>("name").unwrap(), "Work");
        assert!(sub.get_flag("tabs"));
        assert!(sub.get_flag("quadrants"));
        assert!(!sub.get_flag("include-minimized"));
    }

    #[test]
    fn test_save_requires_name() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["winrestore", "save"])
                .is_err()
        );
    }

    #[test]
    fn test_restore_by_id() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "restore", "1234", "--id"])
            .unwrap();
        let sub = matches.subcommand_matches("restore").unwrap();
        assert!(sub.get_flag("id"));
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "list", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_rename_takes_two_names() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "rename", "Old", "New"])
            .unwrap();
        let sub = matches.subcommand_matches("rename").unwrap();
        assert_eq!(sub.get_one::<String>("old").unwrap(), "Old");
        assert_eq!(sub.get_one::<String>("new").unwrap(), "New");
    }

    #[test]
    fn test_restore_json_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "restore", "Work", "--json"])
            .unwrap();
        let sub = matches.subcommand_matches("restore").unwrap();
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_startup_subcommands() {
        let matches = build_cli()
            .try_get_matches_from(vec!["winrestore", "startup", "set", "Work"])
            .unwrap();
        let startup = matches.subcommand_matches("startup").unwrap();
        let set = startup.subcommand_matches("set").unwrap();
        assert_eq!(set.get_one::<String>("name").unwrap(), "Work");

        for action in ["clear", "show", "run"] {
            let matches = build_cli()
                .try_get_matches_from(vec!["winrestore", "startup", action])
                .unwrap();
            let startup = matches.subcommand_matches("startup").unwrap();
            assert_eq!(startup.subcommand_name(), Some(action));
        }
    }

    #[test]
    fn test_startup_set_requires_name() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["winrestore", "startup", "set"])
                .is_err()
        );
        assert!(
            build_cli()
                .try_get_matches_from(vec!["winrestore", "startup"])
                .is_err()
        );
    }

    #[test]
    fn test_completions_rejects_unknown_shell() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["winrestore", "completions", "tcsh"])
                .is_err()
        );
        assert!(
            build_cli()
                .try_get_matches_from(vec!["winrestore", "completions", "powershell"])
                .is_ok()
        );
    }
}
