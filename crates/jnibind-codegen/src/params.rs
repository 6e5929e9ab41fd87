//! Parameter lists of generated functions.
//!
//! Parameters are named `p0`, `p1`, ... and always follow `JNIEnv * env`
//! (and the receiver, if any), so both lists start with `, `.

use jnibind_core::JavaType;

use crate::types::CType;

/// How `java.lang.String` parameters are spelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringParams {
    /// `jstring`
    Runtime,
    /// `char *`
    Chars,
    /// `const char *`
    ConstChars,
}

impl StringParams {
    fn spell(self, ctype: CType) -> &'static str {
        match self {
            _ if !ctype.is_string() => ctype.as_str(),
            Self::Runtime => ctype.as_str(),
            Self::Chars => "char *",
            Self::ConstChars => "const char *",
        }
    }
}

/// Parameter declarations: `, jint p0, jstring p1`.
pub fn declare(args: &[JavaType], strings: StringParams) -> String {
    args.iter()
        .enumerate()
        .map(|(i, ty)| format!(", {} p{i}", strings.spell(CType::of(ty))))
        .collect()
}

/// Arguments forwarded to another call: `, p0, p1`.
///
/// With `const_strings`, string arguments are cast to `const char *`.
pub fn forward(args: &[JavaType], const_strings: bool) -> String {
    args.iter()
        .enumerate()
        .map(|(i, ty)| {
            if const_strings && CType::of(ty).is_string() {
                format!(", (const char *) p{i}")
            } else {
                format!(", p{i}")
            }
        })
        .collect()
}

/// True if any argument is a `java.lang.String`.
pub fn has_string(args: &[JavaType]) -> bool {
    args.iter().any(|ty| CType::of(ty).is_string())
}
