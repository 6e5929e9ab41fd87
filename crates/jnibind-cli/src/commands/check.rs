use std::path::PathBuf;

use jnibind_codegen::generate;

use super::fail;
use super::project::Project;

pub struct CheckArgs {
    pub config_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let project = Project::load(&args.config_path).unwrap_or_else(|e| fail(&e));
    let class_path = project.class_path().unwrap_or_else(|e| fail(&e));

    if project.targets.is_empty() {
        log::warn!("{}: no classes to bind", args.config_path.display());
    }

    if let Err(e) = generate(&class_path, &project.targets, project.config()) {
        fail(&e);
    }

    // Silent on success (like cargo check)
}
