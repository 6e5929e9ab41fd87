#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! C binding generator for Java classes reached through JNI.
//!
//! Given class descriptors and a list of [`BindingTarget`]s, produces a header
//! and an implementation unit. The implementation caches every class, field and
//! method handle in one registry struct filled by `<prefix>_init` and released
//! by `<prefix>_destroy`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! use jnibind_codegen::{Config, Targets, generate};
//!
//! let targets = Targets::from_lists(structs, exceptions);
//! let bindings = generate(&classpath, &targets, Config::new())?;
//! bindings.write(Path::new("native/jnibind.h"), Path::new("native/jnibind.c"))?;
//! ```

pub mod config;
pub mod emission;
pub mod emit;
pub mod naming;
pub mod params;
pub mod select;
pub mod target;
pub mod types;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod types_tests;

pub use config::Config;
pub use emit::{Bindings, Generator, generate};
pub use target::{BindingTarget, Targets};

use jnibind_core::SignatureError;

/// Errors raised while generating bindings.
///
/// All of them are fatal: generation stops and no output is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Class name is empty or ends with a package separator.
    #[error("invalid class name `{0}`")]
    InvalidClassName(String),

    #[error("malformed descriptor `{descriptor}` on {class}.{member}")]
    Signature {
        class: String,
        member: String,
        descriptor: String,
        #[source]
        source: SignatureError,
    },

    /// `void` can only appear as a return type.
    #[error("type `{0}` has no jvalue member")]
    UnsupportedValueType(String),

    /// Two members map to the same C function name, e.g. overload `foo` #1
    /// and a method named `foo_1`.
    #[error("generated symbol `{0}` would be defined twice")]
    DuplicateSymbol(String),

    #[error("no descriptor was resolved for class `{0}`")]
    MissingClass(String),

    #[error(transparent)]
    Lookup(#[from] jnibind_core::Error),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
