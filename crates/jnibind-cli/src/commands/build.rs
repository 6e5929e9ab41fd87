//! The project's build command, run after the bindings are written.

use std::path::Path;
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to start build command `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("build command `{program}` failed ({status})")]
    Failed { program: String, status: ExitStatus },
}

/// Run `argv` with inherited stdio, in `dir` when given.
///
/// An empty `argv` means there is nothing to build and returns `Ok(false)`.
pub fn run_builder(argv: &[String], dir: Option<&Path>) -> Result<bool, BuildError> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(false);
    };

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    log::info!("running {}", argv.join(" "));
    let status = command.status().map_err(|source| BuildError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(BuildError::Failed {
            program: program.clone(),
            status,
        });
    }
    Ok(true)
}
