mod args;
mod commands;
mod dispatch;


use log::LevelFilter;

pub use commands::build_cli;
pub use dispatch::{CheckParams, GenerateParams};

/// Install the stderr logger. `RUST_LOG` overrides the `-v` count.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}
