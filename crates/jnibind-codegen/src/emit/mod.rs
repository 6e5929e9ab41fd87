//! C emission from class descriptors.
//!
//! [`generate`] drives one run: resolve every targeted class, register each
//! class handle, emit struct bindings, then exception bindings, and finally
//! assemble header and implementation.

mod class;
mod exceptions;
mod fields;
mod generator;
mod methods;
mod prelude;
mod snippets;

#[cfg(test)]
mod methods_tests;
#[cfg(test)]
mod snippets_tests;

pub use generator::{Bindings, Generator};

use std::collections::BTreeMap;

use jnibind_core::ClassDescriptor;
use jnibind_core::classpath::{self, ClassSource};

use crate::naming::ClassSymbols;
use crate::target::{BindingTarget, Targets};
use crate::{Config, Error, Result};

impl Generator {
    /// Emit field, method and constructor bindings for a struct target.
    pub fn emit_struct(&mut self, class: &ClassDescriptor, target: &BindingTarget) -> Result<()> {
        let symbols = ClassSymbols::new(&class.name)?;
        self.register_class(&class.name)?;
        log::debug!("struct {}", class.name);

        self.emit_fields(class, target, &symbols)?;
        self.emit_methods(class, target, &symbols)
    }
}

/// Generate bindings for `targets`, reading descriptors from `source`.
///
/// Output depends only on the descriptors and targets, never on lookup order.
pub fn generate<S: ClassSource + ?Sized>(
    source: &S,
    targets: &Targets,
    config: Config,
) -> Result<Bindings> {
    let classes = classpath::resolve(source, &targets.all_classes())?;

    let mut generator = Generator::with_prelude(config);
    for name in classes.keys() {
        generator.register_class(name)?;
    }

    let mut structs = 0;
    for target in targets.structs() {
        generator.emit_struct(lookup(&classes, &target.class)?, target)?;
        structs += 1;
    }

    let mut exceptions = 0;
    for target in targets.exceptions() {
        generator.emit_exception(lookup(&classes, &target.class)?, target)?;
        exceptions += 1;
    }

    log::info!(
        "generated bindings for {} classes ({structs} structs, {exceptions} exceptions)",
        classes.len()
    );
    Ok(generator.finish())
}

fn lookup<'a>(
    classes: &'a BTreeMap<String, ClassDescriptor>,
    name: &str,
) -> Result<&'a ClassDescriptor> {
    classes
        .get(name)
        .ok_or_else(|| Error::MissingClass(name.to_string()))
}
