//! Project file: where descriptors live, what to bind and where the output goes.
//!
//! ```json
//! {
//!   "classes": "build/descriptors",
//!   "classpath": ["jdk/descriptors"],
//!   "header_output": "native/jnibind.h",
//!   "impl_output": "native/jnibind.c",
//!   "structs": [{ "class": "com.example.Point" }],
//!   "exceptions": [{ "class": "com.example.BadInput", "only_public": true }],
//!   "builders": ["make", "-C", "native"]
//! }
//! ```
//!
//! Relative paths are taken relative to the directory holding the project file.

use std::fs;
use std::path::{Path, PathBuf};

use jnibind_codegen::{BindingTarget, Config, Targets};
use jnibind_core::{ClassPath, DescriptorDir};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("failed to read project file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project file '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("header_output '{}' has no file name", .0.display())]
    HeaderName(PathBuf),

    #[error(transparent)]
    Descriptors(#[from] jnibind_core::Error),
}

/// On-disk shape of the project file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    classes: PathBuf,
    #[serde(default)]
    classpath: Vec<PathBuf>,
    header_output: PathBuf,
    impl_output: PathBuf,
    header_include: Option<String>,
    prefix: Option<String>,
    #[serde(default)]
    structs: Vec<BindingTarget>,
    #[serde(default)]
    exceptions: Vec<BindingTarget>,
    #[serde(default)]
    builders: Vec<String>,
    builder_dir: Option<PathBuf>,
}

/// A loaded project with every path made absolute against the project directory.
#[derive(Debug)]
pub struct Project {
    pub classes: PathBuf,
    pub classpath: Vec<PathBuf>,
    pub header_output: PathBuf,
    pub impl_output: PathBuf,
    pub header_include: String,
    pub prefix: Option<String>,
    pub targets: Targets,
    pub builders: Vec<String>,
    pub builder_dir: Option<PathBuf>,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let content = fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ProjectFile =
            serde_json::from_str(&content).map_err(|source| ProjectError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let base = path.parent().unwrap_or(Path::new(""));
        Self::resolve(file, base)
    }

    fn resolve(file: ProjectFile, base: &Path) -> Result<Self, ProjectError> {
        let header_output = base.join(&file.header_output);
        let header_include = match file.header_include {
            Some(line) => line,
            None => {
                let name = header_output
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| ProjectError::HeaderName(file.header_output.clone()))?;
                format!("#include \"{name}\"")
            }
        };

        Ok(Self {
            classes: base.join(&file.classes),
            classpath: file.classpath.iter().map(|dir| base.join(dir)).collect(),
            header_output,
            impl_output: base.join(&file.impl_output),
            header_include,
            prefix: file.prefix,
            targets: Targets::from_lists(file.structs, file.exceptions),
            builders: file.builders,
            builder_dir: file.builder_dir.map(|dir| base.join(dir)),
        })
    }

    /// Generator settings for this project.
    pub fn config(&self) -> Config {
        let config = Config::new().header_include(self.header_include.clone());
        match &self.prefix {
            Some(prefix) => config.prefix(prefix.clone()),
            None => config,
        }
    }

    /// Descriptor lookup: the project's own classes first, then each fallback
    /// directory in order.
    pub fn class_path(&self) -> Result<ClassPath, ProjectError> {
        let mut path = ClassPath::new().with(DescriptorDir::open(&self.classes)?);
        for dir in &self.classpath {
            path.push(DescriptorDir::open(dir)?);
        }
        Ok(path)
    }
}
