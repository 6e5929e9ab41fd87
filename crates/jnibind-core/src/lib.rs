#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for jnibind.
//!
//! Three layers:
//! - **Descriptors** (`descriptor`): classes, fields and methods as reported by a
//!   classfile reader, deserialized from JSON
//! - **Signatures** (`signature`): raw JVM descriptors parsed into [`JavaType`]
//! - **Lookup** (`classpath`): directory-backed descriptor sources chained into a
//!   [`ClassPath`]

use std::path::PathBuf;

pub mod classpath;
pub mod descriptor;
pub mod signature;


pub use classpath::{ClassPath, ClassSource, DescriptorDir};
pub use descriptor::{
    AccessFlags, CONSTRUCTOR, ClassDescriptor, FieldDescriptor, MethodDescriptor,
    STATIC_INITIALIZER,
};
pub use signature::{JavaType, MethodSignature, SignatureError};

/// Errors raised while loading or resolving descriptors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid descriptor file '{}'", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Class is in neither the local output nor any fallback source.
    #[error("class `{0}` not found on the descriptor path")]
    ClassNotFound(String),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

/// Result type for descriptor operations.
pub type Result<T> = std::result::Result<T, Error>;
