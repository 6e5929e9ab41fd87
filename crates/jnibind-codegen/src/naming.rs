//! Symbol naming for generated C code.
//!
//! Every public function and registry member is derived from the class's
//! short name (the part after the last package separator), so two classes
//! with the same short name in different packages collide.

use std::collections::HashMap;

use crate::{Error, Result};

/// Part of a qualified class name after the last `.` or `/`.
pub fn short_name(class: &str) -> Result<&str> {
    let short = match class.rfind(['.', '/']) {
        Some(idx) => &class[idx + 1..],
        None => class,
    };
    if short.is_empty() {
        return Err(Error::InvalidClassName(class.to_string()));
    }
    Ok(short)
}

/// JNI class path form: `java.lang.String` -> `java/lang/String`.
pub fn native_path(class: &str) -> String {
    class.replace('.', "/")
}

/// Suffix distinguishing overloads of a public function. The first overload has none.
pub fn ordinal_suffix(ordinal: usize) -> String {
    if ordinal == 0 {
        String::new()
    } else {
        format!("_{ordinal}")
    }
}

/// Names of every symbol generated for one class.
///
/// Registry members are returned bare; callers reach them through `reg.`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSymbols {
    short: String,
    native: String,
}

impl ClassSymbols {
    pub fn new(class: &str) -> Result<Self> {
        Ok(Self {
            short: short_name(class)?.to_string(),
            native: native_path(class),
        })
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn native(&self) -> &str {
        &self.native
    }

    pub fn class_handle(&self) -> String {
        format!("cls_{}", self.short)
    }

    pub fn field_handle(&self, field: &str) -> String {
        format!("fid_{}_{field}", self.short)
    }

    pub fn enum_constant(&self, field: &str) -> String {
        format!("obj_{}_{field}", self.short)
    }

    pub fn enum_values(&self) -> String {
        format!("values_{}", self.short)
    }

    pub fn constructor_handle(&self, ordinal: usize) -> String {
        format!("ctor_{}_{ordinal}", self.short)
    }

    pub fn method_handle(&self, method: &str, ordinal: usize) -> String {
        format!("mid_{}_{method}_{ordinal}", self.short)
    }

    pub fn exception_handle(&self, ordinal: usize) -> String {
        format!("exc_{}_{ordinal}", self.short)
    }

    pub fn instance_of(&self) -> String {
        format!("jinstanceof_{}", self.short)
    }

    pub fn getter(&self, field: &str) -> String {
        format!("jget_{}_{field}", self.short)
    }

    pub fn setter(&self, field: &str) -> String {
        format!("jset_{}_{field}", self.short)
    }

    pub fn array_setter(&self, field: &str) -> String {
        format!("jsetA_{}_{field}", self.short)
    }

    pub fn chars_setter(&self, field: &str) -> String {
        format!("jsetC_{}_{field}", self.short)
    }

    pub fn const_chars_setter(&self, field: &str) -> String {
        format!("jsetCC_{}_{field}", self.short)
    }

    pub fn wide_chars_setter(&self, field: &str) -> String {
        format!("jsetWC_{}_{field}", self.short)
    }

    pub fn enum_accessor(&self, constant: &str) -> String {
        format!("jenum_{}_{constant}", self.short)
    }

    pub fn enum_count(&self) -> String {
        format!("jenum_{}_count", self.short)
    }

    pub fn enum_values_accessor(&self) -> String {
        format!("jenum_{}_values", self.short)
    }

    pub fn constructor(&self, ordinal: usize) -> String {
        format!("jnew_{}{}", self.short, ordinal_suffix(ordinal))
    }

    pub fn call(&self, method: &str, ordinal: usize) -> String {
        format!("jcall_{}_{method}{}", self.short, ordinal_suffix(ordinal))
    }

    pub fn throw(&self, ordinal: usize) -> String {
        format!("jthrow_{}{}", self.short, ordinal_suffix(ordinal))
    }

    pub fn throw_chars(&self, ordinal: usize) -> String {
        format!("jthrowC_{}{}", self.short, ordinal_suffix(ordinal))
    }

    pub fn throw_const_chars(&self, ordinal: usize) -> String {
        format!("jthrowCC_{}{}", self.short, ordinal_suffix(ordinal))
    }
}

/// Per-class overload counters, one bucket per member name.
#[derive(Clone, Debug, Default)]
pub struct Ordinals {
    next: HashMap<String, usize>,
}

impl Ordinals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal for the next member named `name`, starting at 0.
    pub fn next(&mut self, name: &str) -> usize {
        let slot = self.next.entry(name.to_string()).or_insert(0);
        let ordinal = *slot;
        *slot += 1;
        ordinal
    }
}
