//! Member selection: which fields and methods of a class get bindings.
//!
//! Members are visited in (name, descriptor) order so that output and
//! overload ordinals do not depend on descriptor order. Ordinals are handed
//! out after filtering, so a filtered overload does not leave a gap.

use jnibind_core::{ClassDescriptor, FieldDescriptor, MethodDescriptor};

use crate::naming::Ordinals;
use crate::target::BindingTarget;

/// A method picked for emission together with its overload ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selected<'a> {
    pub method: &'a MethodDescriptor,
    pub ordinal: usize,
}

/// Fields bound for a struct target.
pub fn struct_fields<'a>(
    class: &'a ClassDescriptor,
    target: &BindingTarget,
) -> Vec<&'a FieldDescriptor> {
    let mut fields: Vec<_> = class
        .fields
        .iter()
        .filter(|f| !f.is_synthetic())
        .filter(|f| !target.only_public || f.is_public())
        .filter(|f| !target.is_filtered(&f.name))
        .collect();
    fields.sort_by(|a, b| (&a.name, &a.descriptor).cmp(&(&b.name, &b.descriptor)));
    fields
}

/// Methods and constructors bound for a struct target.
///
/// Enum classes lose their compiler-generated `values`/`valueOf`; the
/// generated enum accessors cover them.
pub fn struct_methods<'a>(class: &'a ClassDescriptor, target: &BindingTarget) -> Vec<Selected<'a>> {
    let is_enum = class.is_enum();
    let mut methods: Vec<_> = class
        .methods
        .iter()
        .filter(|m| !m.is_synthetic() && !m.is_static_initializer())
        .filter(|m| !(is_enum && (m.name == "values" || m.name == "valueOf")))
        .filter(|m| !target.only_public || m.is_public())
        .filter(|m| !is_method_filtered(m, target))
        .collect();
    methods.sort_by(|a, b| (&a.name, &a.descriptor).cmp(&(&b.name, &b.descriptor)));

    let mut ordinals = Ordinals::new();
    methods
        .into_iter()
        .map(|method| Selected {
            method,
            ordinal: ordinals.next(&method.name),
        })
        .collect()
}

/// Constructors bound for an exception target, in signature order.
pub fn exception_constructors<'a>(
    class: &'a ClassDescriptor,
    target: &BindingTarget,
) -> Vec<Selected<'a>> {
    let mut ctors: Vec<_> = class
        .constructors()
        .filter(|m| !m.is_static() && !m.is_synthetic())
        .filter(|m| !target.only_public || m.is_public())
        .filter(|m| !is_method_filtered(m, target))
        .collect();
    ctors.sort_by(|a, b| a.descriptor.cmp(&b.descriptor));

    ctors
        .into_iter()
        .enumerate()
        .map(|(ordinal, method)| Selected { method, ordinal })
        .collect()
}

fn is_method_filtered(method: &MethodDescriptor, target: &BindingTarget) -> bool {
    let key = format!("{}{}", method.name, method.descriptor);
    if target.is_filtered(&key) {
        return true;
    }
    method.is_constructor() && target.is_filtered(&method.descriptor)
}
