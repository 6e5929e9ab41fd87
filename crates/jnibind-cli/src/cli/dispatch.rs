//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub config_path: PathBuf,
    pub no_build: bool,
    pub verbosity: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: parse_config_path(m),
            no_build: m.get_flag("no_build"),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            config_path: p.config_path,
            build: !p.no_build,
        }
    }
}

pub struct CheckParams {
    pub config_path: PathBuf,
    pub verbosity: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: parse_config_path(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            config_path: p.config_path,
        }
    }
}

fn parse_config_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("config_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("jnibind.json"))
}
