//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jnibind")
        .about("Generate C bindings for Java classes over JNI")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Generate the header and implementation, then build.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Write the bindings and run the build command")
        .after_help(
            r#"EXAMPLES:
  jnibind generate                      # uses ./jnibind.json
  jnibind generate native/jnibind.json  # paths resolve against native/
  jnibind generate --no-build -vv       # write only, with debug logging"#,
        )
        .arg(config_path_arg())
        .arg(no_build_arg())
        .arg(verbose_arg())
}

/// Resolve and generate without touching the filesystem.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate the project without writing anything")
        .after_help(
            r#"EXAMPLES:
  jnibind check                 # silent on success
  jnibind check jnibind.json -v"#,
        )
        .arg(config_path_arg())
        .arg(verbose_arg())
}
