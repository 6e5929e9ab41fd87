use std::path::PathBuf;

use jnibind_codegen::generate;

use super::build::run_builder;
use super::fail;
use super::project::Project;

pub struct GenerateArgs {
    pub config_path: PathBuf,
    pub build: bool,
}

pub fn run(args: GenerateArgs) {
    let project = Project::load(&args.config_path).unwrap_or_else(|e| fail(&e));
    let class_path = project.class_path().unwrap_or_else(|e| fail(&e));

    let bindings =
        generate(&class_path, &project.targets, project.config()).unwrap_or_else(|e| fail(&e));

    if let Err(e) = bindings.write(&project.header_output, &project.impl_output) {
        eprintln!("error: failed to write bindings: {e}");
        std::process::exit(1);
    }
    log::info!(
        "wrote {} and {}",
        project.header_output.display(),
        project.impl_output.display()
    );

    if !args.build {
        return;
    }
    // Written files stay in place when the build fails.
    if let Err(e) = run_builder(&project.builders, project.builder_dir.as_deref()) {
        fail(&e);
    }
}
