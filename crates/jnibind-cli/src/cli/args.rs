//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Project file (positional).
pub fn config_path_arg() -> Arg {
    Arg::new("config_path")
        .value_name("CONFIG")
        .value_parser(value_parser!(PathBuf))
        .default_value("jnibind.json")
        .help("Project file")
}

/// Skip the build command (--no-build).
pub fn no_build_arg() -> Arg {
    Arg::new("no_build")
        .long("no-build")
        .action(ArgAction::SetTrue)
        .help("Write the bindings without running the build command")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log more (-v info, -vv debug)")
}
