//! JVM type and method descriptor parsing.
//!
//! Descriptors arrive as raw strings (`I`, `[B`, `Ljava/lang/String;`, `(IJ)V`).
//! Parsing turns them into the closed [`JavaType`] enumeration; anything outside
//! the descriptor grammar is a [`SignatureError`].

use std::fmt;

/// A JVM type as written in a field or method descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum JavaType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
    /// Reference type, stored in internal (slash separated) form.
    Object(String),
    Array(Box<JavaType>),
}

/// Errors produced while parsing descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("empty descriptor")]
    Empty,

    #[error("unknown type code `{code}` at offset {offset} in `{descriptor}`")]
    UnknownCode {
        descriptor: String,
        code: char,
        offset: usize,
    },

    #[error("unterminated object type in `{0}`")]
    UnterminatedObject(String),

    #[error("`void` is only valid as a method return type in `{0}`")]
    MisplacedVoid(String),

    #[error("trailing characters after type in `{0}`")]
    Trailing(String),

    #[error("`{0}` is not a method descriptor")]
    NotAMethod(String),
}

impl JavaType {
    /// Parse a complete field descriptor such as `[I` or `Ljava/lang/Object;`.
    pub fn parse(descriptor: &str) -> Result<Self, SignatureError> {
        if descriptor.is_empty() {
            return Err(SignatureError::Empty);
        }
        let (ty, next) = parse_at(descriptor, 0)?;
        if next != descriptor.len() {
            return Err(SignatureError::Trailing(descriptor.to_string()));
        }
        if ty == JavaType::Void {
            return Err(SignatureError::MisplacedVoid(descriptor.to_string()));
        }
        Ok(ty)
    }

    /// Number of array dimensions (`0` for non-array types).
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Array(inner) => 1 + inner.dimensions(),
            _ => 0,
        }
    }

    /// Innermost element type of an array, or the type itself.
    pub fn element(&self) -> &JavaType {
        match self {
            Self::Array(inner) => inner.element(),
            other => other,
        }
    }

    /// Fully-qualified dotted class name for reference types.
    pub fn class_name(&self) -> Option<String> {
        match self {
            Self::Object(internal) => Some(internal.replace('/', ".")),
            _ => None,
        }
    }

    /// Render back into descriptor form.
    pub fn descriptor(&self) -> String {
        match self {
            Self::Boolean => "Z".into(),
            Self::Byte => "B".into(),
            Self::Char => "C".into(),
            Self::Short => "S".into(),
            Self::Int => "I".into(),
            Self::Long => "J".into(),
            Self::Float => "F".into(),
            Self::Double => "D".into(),
            Self::Void => "V".into(),
            Self::Object(name) => format!("L{};", name),
            Self::Array(inner) => format!("[{}", inner.descriptor()),
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Byte => f.write_str("byte"),
            Self::Char => f.write_str("char"),
            Self::Short => f.write_str("short"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Void => f.write_str("void"),
            Self::Object(name) => f.write_str(&name.replace('/', ".")),
            Self::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

/// Parsed method descriptor: ordered argument types plus return type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub args: Vec<JavaType>,
    pub ret: JavaType,
}

impl MethodSignature {
    /// Parse a method descriptor such as `(ILjava/lang/String;)V`.
    pub fn parse(descriptor: &str) -> Result<Self, SignatureError> {
        if descriptor.is_empty() {
            return Err(SignatureError::Empty);
        }
        if !descriptor.starts_with('(') {
            return Err(SignatureError::NotAMethod(descriptor.to_string()));
        }
        let close = descriptor
            .find(')')
            .ok_or_else(|| SignatureError::NotAMethod(descriptor.to_string()))?;

        let mut args = Vec::new();
        let mut pos = 1;
        while pos < close {
            let (ty, next) = parse_at(descriptor, pos)?;
            if ty == JavaType::Void {
                return Err(SignatureError::MisplacedVoid(descriptor.to_string()));
            }
            args.push(ty);
            pos = next;
        }
        if pos != close {
            return Err(SignatureError::NotAMethod(descriptor.to_string()));
        }

        if close + 1 >= descriptor.len() {
            return Err(SignatureError::NotAMethod(descriptor.to_string()));
        }
        let (ret, next) = parse_at(descriptor, close + 1)?;
        if next != descriptor.len() {
            return Err(SignatureError::Trailing(descriptor.to_string()));
        }

        Ok(Self { args, ret })
    }
}

/// Parse one type starting at byte offset `pos`, returning the type and the next offset.
fn parse_at(descriptor: &str, pos: usize) -> Result<(JavaType, usize), SignatureError> {
    let bytes = descriptor.as_bytes();
    let Some(&code) = bytes.get(pos) else {
        return Err(SignatureError::Trailing(descriptor.to_string()));
    };

    let simple = |ty: JavaType| -> Result<(JavaType, usize), SignatureError> { Ok((ty, pos + 1)) };
    match code {
        b'Z' => simple(JavaType::Boolean),
        b'B' => simple(JavaType::Byte),
        b'C' => simple(JavaType::Char),
        b'S' => simple(JavaType::Short),
        b'I' => simple(JavaType::Int),
        b'J' => simple(JavaType::Long),
        b'F' => simple(JavaType::Float),
        b'D' => simple(JavaType::Double),
        b'V' => simple(JavaType::Void),
        b'L' => {
            let rest = &descriptor[pos + 1..];
            let semi = rest
                .find(';')
                .ok_or_else(|| SignatureError::UnterminatedObject(descriptor.to_string()))?;
            if semi == 0 {
                return Err(SignatureError::UnterminatedObject(descriptor.to_string()));
            }
            let name = &rest[..semi];
            Ok((JavaType::Object(name.to_string()), pos + 1 + semi + 1))
        }
        b'[' => {
            let (inner, next) = parse_at(descriptor, pos + 1)?;
            if inner == JavaType::Void {
                return Err(SignatureError::MisplacedVoid(descriptor.to_string()));
            }
            Ok((JavaType::Array(Box::new(inner)), next))
        }
        _ => Err(SignatureError::UnknownCode {
            descriptor: descriptor.to_string(),
            code: descriptor[pos..].chars().next().unwrap_or('?'),
            offset: pos,
        }),
    }
}
