//! Binding targets: which classes get bindings and which members to skip.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Supertypes whose members are served by the runtime helpers instead.
const SKIPPED_STRUCTS: [&str; 2] = ["java.lang.Enum", "java.lang.String"];

/// One class to generate bindings for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingTarget {
    /// Fully-qualified dotted class name.
    #[serde(alias = "classname")]
    pub class: String,

    /// Members to leave out. Fields are matched by name, methods by
    /// name + signature, constructors by signature alone or `<init>` + signature.
    #[serde(default)]
    pub filters: BTreeSet<String>,

    /// Skip members without the public flag.
    #[serde(default, alias = "onlyPublic")]
    pub only_public: bool,
}

impl BindingTarget {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn filter(mut self, key: impl Into<String>) -> Self {
        self.filters.insert(key.into());
        self
    }

    pub fn only_public(mut self, value: bool) -> Self {
        self.only_public = value;
        self
    }

    pub fn is_filtered(&self, key: &str) -> bool {
        self.filters.contains(key)
    }
}

/// Struct and exception targets keyed by class name.
///
/// A class listed twice in the same role keeps its last entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Targets {
    structs: BTreeMap<String, BindingTarget>,
    exceptions: BTreeMap<String, BindingTarget>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(
        structs: impl IntoIterator<Item = BindingTarget>,
        exceptions: impl IntoIterator<Item = BindingTarget>,
    ) -> Self {
        let mut targets = Self::new();
        for target in structs {
            targets.add_struct(target);
        }
        for target in exceptions {
            targets.add_exception(target);
        }
        targets
    }

    pub fn add_struct(&mut self, target: BindingTarget) {
        self.structs.insert(target.class.clone(), target);
    }

    pub fn add_exception(&mut self, target: BindingTarget) {
        self.exceptions.insert(target.class.clone(), target);
    }

    /// Struct targets in class-name order, without the runtime-served supertypes.
    pub fn structs(&self) -> impl Iterator<Item = &BindingTarget> {
        self.structs.values().filter(|target| {
            let skipped = SKIPPED_STRUCTS.contains(&target.class.as_str());
            if skipped {
                log::warn!("skipping struct target `{}`", target.class);
            }
            !skipped
        })
    }

    /// Exception targets in class-name order.
    pub fn exceptions(&self) -> impl Iterator<Item = &BindingTarget> {
        self.exceptions.values()
    }

    /// Names of the classes that get struct bindings.
    pub fn struct_classes(&self) -> BTreeSet<String> {
        self.structs
            .keys()
            .filter(|name| !SKIPPED_STRUCTS.contains(&name.as_str()))
            .cloned()
            .collect()
    }

    /// Every class some target refers to.
    pub fn all_classes(&self) -> BTreeSet<String> {
        let mut all = self.struct_classes();
        all.extend(self.exceptions.keys().cloned());
        all
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.exceptions.is_empty()
    }
}
