//! Class, field and method descriptors.
//!
//! These are the read-only inputs of a generation run. They mirror what a
//! classfile reader reports (names, raw descriptors, access flags) and are
//! deserialized from JSON by [`crate::classpath::DescriptorDir`].

use serde::{Deserialize, Serialize};

use crate::signature::{JavaType, MethodSignature, SignatureError};

/// Name of instance initializers (constructors).
pub const CONSTRUCTOR: &str = "<init>";

/// Name of class static initializers.
pub const STATIC_INITIALIZER: &str = "<clinit>";

bitflags::bitflags! {
    /// JVM access flags, shared by classes, fields and methods.
    ///
    /// Overlapping bit values (`SUPER`/`SYNCHRONIZED`, `BRIDGE`/`VOLATILE`,
    /// `VARARGS`/`TRANSIENT`) are named after their field/method meaning.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
    }
}

impl Default for AccessFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Metadata for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully-qualified dotted name, e.g. `java.lang.String`.
    pub name: String,
    #[serde(default)]
    pub access: AccessFlags,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessFlags::PUBLIC,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Whether the class is an enum type.
    pub fn is_enum(&self) -> bool {
        self.access.contains(AccessFlags::ENUM)
    }

    /// Constructors declared by this class.
    pub fn constructors(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| m.is_constructor())
    }
}

/// Metadata for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Raw field descriptor, e.g. `I` or `[B`.
    pub descriptor: String,
    #[serde(default)]
    pub access: AccessFlags,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        descriptor: impl Into<String>,
        access: AccessFlags,
    ) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            access,
        }
    }

    pub fn is_public(&self) -> bool {
        self.access.contains(AccessFlags::PUBLIC)
    }

    pub fn is_static(&self) -> bool {
        self.access.contains(AccessFlags::STATIC)
    }

    /// Whether this field holds an enum constant.
    pub fn is_enum(&self) -> bool {
        self.access.contains(AccessFlags::ENUM)
    }

    pub fn is_synthetic(&self) -> bool {
        self.access.contains(AccessFlags::SYNTHETIC)
    }

    pub fn java_type(&self) -> Result<JavaType, SignatureError> {
        JavaType::parse(&self.descriptor)
    }
}

/// Metadata for one method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name; constructors use [`CONSTRUCTOR`].
    pub name: String,
    /// Raw method descriptor, e.g. `(IJ)V`.
    pub descriptor: String,
    #[serde(default)]
    pub access: AccessFlags,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        descriptor: impl Into<String>,
        access: AccessFlags,
    ) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            access,
        }
    }

    pub fn constructor(descriptor: impl Into<String>, access: AccessFlags) -> Self {
        Self::new(CONSTRUCTOR, descriptor, access)
    }

    pub fn is_public(&self) -> bool {
        self.access.contains(AccessFlags::PUBLIC)
    }

    pub fn is_static(&self) -> bool {
        self.access.contains(AccessFlags::STATIC)
    }

    pub fn is_synthetic(&self) -> bool {
        self.access.contains(AccessFlags::SYNTHETIC)
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }

    pub fn is_static_initializer(&self) -> bool {
        self.name == STATIC_INITIALIZER
    }

    pub fn signature(&self) -> Result<MethodSignature, SignatureError> {
        MethodSignature::parse(&self.descriptor)
    }
}

/// Contents of one descriptor file: a single class or a list of classes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DescriptorFile {
    One(ClassDescriptor),
    Many(Vec<ClassDescriptor>),
}

impl DescriptorFile {
    pub fn into_classes(self) -> Vec<ClassDescriptor> {
        match self {
            Self::One(class) => vec![class],
            Self::Many(classes) => classes,
        }
    }
}
