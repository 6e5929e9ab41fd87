//! Descriptor lookup.
//!
//! A [`ClassSource`] answers "what does class X look like". [`ClassPath`] chains
//! several sources so that classes missing from the local compiled output can
//! be resolved from a secondary (platform) location.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{ClassDescriptor, DescriptorFile};
use crate::{Error, Result};

/// Provider of class descriptors.
pub trait ClassSource {
    /// Look up one class by fully-qualified dotted name.
    fn find(&self, name: &str) -> Result<Option<ClassDescriptor>>;
}

impl ClassSource for BTreeMap<String, ClassDescriptor> {
    fn find(&self, name: &str) -> Result<Option<ClassDescriptor>> {
        Ok(self.get(name).cloned())
    }
}

impl<S: ClassSource + ?Sized> ClassSource for &S {
    fn find(&self, name: &str) -> Result<Option<ClassDescriptor>> {
        (**self).find(name)
    }
}

/// Fetch descriptors for `names` from `source`, keyed and ordered by class name.
///
/// A name the source cannot supply is [`Error::ClassNotFound`].
pub fn resolve<S: ClassSource + ?Sized>(
    source: &S,
    names: &BTreeSet<String>,
) -> Result<BTreeMap<String, ClassDescriptor>> {
    let mut resolved = BTreeMap::new();
    for name in names {
        let class = source
            .find(name)?
            .ok_or_else(|| Error::ClassNotFound(name.clone()))?;
        resolved.insert(name.clone(), class);
    }
    Ok(resolved)
}

/// All descriptors found under one directory, indexed by class name.
#[derive(Debug, Clone, Default)]
pub struct DescriptorDir {
    classes: BTreeMap<String, ClassDescriptor>,
}

impl DescriptorDir {
    /// Load every `*.json` descriptor file below `root`.
    ///
    /// Files are visited in sorted path order; a class defined twice keeps the
    /// definition from the later file.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut files = Vec::new();
        collect_json_files(&root, &mut files)?;

        let mut classes = BTreeMap::new();
        for path in files {
            let content = fs::read_to_string(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let file: DescriptorFile =
                serde_json::from_str(&content).map_err(|source| Error::Json {
                    path: path.clone(),
                    source,
                })?;
            for class in file.into_classes() {
                log::debug!("{}: found {}", path.display(), class.name);
                classes.insert(class.name.clone(), class);
            }
        }

        Ok(Self { classes })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

impl ClassSource for DescriptorDir {
    fn find(&self, name: &str) -> Result<Option<ClassDescriptor>> {
        Ok(self.classes.get(name).cloned())
    }
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let read = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = read.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

/// Ordered chain of descriptor sources. Earlier sources win.
#[derive(Default)]
pub struct ClassPath {
    sources: Vec<Box<dyn ClassSource>>,
}

impl ClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: impl ClassSource + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn with(mut self, source: impl ClassSource + 'static) -> Self {
        self.push(source);
        self
    }

    /// Resolve every requested class, failing on the first one no source knows.
    pub fn resolve(&self, names: &BTreeSet<String>) -> Result<BTreeMap<String, ClassDescriptor>> {
        resolve(self, names)
    }
}

impl ClassSource for ClassPath {
    fn find(&self, name: &str) -> Result<Option<ClassDescriptor>> {
        for (idx, source) in self.sources.iter().enumerate() {
            if let Some(class) = source.find(name)? {
                if idx > 0 {
                    log::debug!("{name} resolved from fallback source #{idx}");
                }
                return Ok(Some(class));
            }
        }
        Ok(None)
    }
}
