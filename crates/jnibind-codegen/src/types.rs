//! Java to JNI type taxonomy.
//!
//! Three views of a [`JavaType`]:
//! - [`CType`]: the C type used in generated signatures
//! - [`Accessor`]: the JNI call family (`Get<X>Field`, `Call<X>Method`)
//! - [`ValueTag`]: the `jvalue` union member used for packed arguments

use std::fmt;

use jnibind_core::JavaType;

use crate::{Error, Result};

/// C type of a value crossing the JNI boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CType {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    BooleanArray,
    ByteArray,
    CharArray,
    ShortArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
    /// Multi-dimensional arrays and arrays of objects.
    Array,
    String,
    Weak,
    Class,
    Object,
}

impl CType {
    pub fn of(ty: &JavaType) -> Self {
        match ty {
            JavaType::Void => Self::Void,
            JavaType::Boolean => Self::Boolean,
            JavaType::Byte => Self::Byte,
            JavaType::Char => Self::Char,
            JavaType::Short => Self::Short,
            JavaType::Int => Self::Int,
            JavaType::Long => Self::Long,
            JavaType::Float => Self::Float,
            JavaType::Double => Self::Double,
            JavaType::Object(_) => match ty.class_name().as_deref() {
                Some("java.lang.String") => Self::String,
                Some("java.lang.ref.WeakReference") => Self::Weak,
                Some("java.lang.Class") => Self::Class,
                _ => Self::Object,
            },
            JavaType::Array(_) if ty.dimensions() > 1 => Self::Array,
            JavaType::Array(_) => match ty.element() {
                JavaType::Boolean => Self::BooleanArray,
                JavaType::Byte => Self::ByteArray,
                JavaType::Char => Self::CharArray,
                JavaType::Short => Self::ShortArray,
                JavaType::Int => Self::IntArray,
                JavaType::Long => Self::LongArray,
                JavaType::Float => Self::FloatArray,
                JavaType::Double => Self::DoubleArray,
                _ => Self::Array,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "jboolean",
            Self::Byte => "jbyte",
            Self::Char => "jchar",
            Self::Short => "jshort",
            Self::Int => "jint",
            Self::Long => "jlong",
            Self::Float => "jfloat",
            Self::Double => "jdouble",
            Self::BooleanArray => "jbooleanArray",
            Self::ByteArray => "jbyteArray",
            Self::CharArray => "jcharArray",
            Self::ShortArray => "jshortArray",
            Self::IntArray => "jintArray",
            Self::LongArray => "jlongArray",
            Self::FloatArray => "jfloatArray",
            Self::DoubleArray => "jdoubleArray",
            Self::Array => "jarray",
            Self::String => "jstring",
            Self::Weak => "jweak",
            Self::Class => "jclass",
            Self::Object => "jobject",
        }
    }

    pub fn is_string(self) -> bool {
        self == Self::String
    }

    /// Cast needed when a value of the accessor's type is returned as `self`.
    ///
    /// Only the object family returns a plain `jobject` that may need narrowing.
    pub fn cast_from(self, accessor: Accessor) -> String {
        if accessor == Accessor::Object && self != Self::Object {
            format!("({}) ", self.as_str())
        } else {
            String::new()
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JNI accessor family; the `X` in `Get<X>Field` and `Call<X>Method`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accessor {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Object,
}

impl Accessor {
    pub fn of(ty: &JavaType) -> Self {
        match ty {
            JavaType::Void => Self::Void,
            JavaType::Boolean => Self::Boolean,
            JavaType::Byte => Self::Byte,
            JavaType::Char => Self::Char,
            JavaType::Short => Self::Short,
            JavaType::Int => Self::Int,
            JavaType::Long => Self::Long,
            JavaType::Float => Self::Float,
            JavaType::Double => Self::Double,
            JavaType::Object(_) | JavaType::Array(_) => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Object => "Object",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member of the `jvalue` union holding an argument of a given type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Z,
    B,
    C,
    S,
    I,
    J,
    F,
    D,
    L,
}

impl ValueTag {
    pub fn of(ty: &JavaType) -> Result<Self> {
        Ok(match ty {
            JavaType::Boolean => Self::Z,
            JavaType::Byte => Self::B,
            JavaType::Char => Self::C,
            JavaType::Short => Self::S,
            JavaType::Int => Self::I,
            JavaType::Long => Self::J,
            JavaType::Float => Self::F,
            JavaType::Double => Self::D,
            JavaType::Object(_) | JavaType::Array(_) => Self::L,
            JavaType::Void => return Err(Error::UnsupportedValueType(ty.to_string())),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Z => "z",
            Self::B => "b",
            Self::C => "c",
            Self::S => "s",
            Self::I => "i",
            Self::J => "j",
            Self::F => "f",
            Self::D => "d",
            Self::L => "l",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
