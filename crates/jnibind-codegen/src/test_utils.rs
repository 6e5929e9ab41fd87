//! Descriptor fixtures shared by the generator tests.

use std::collections::BTreeMap;

use jnibind_core::{AccessFlags, ClassDescriptor, FieldDescriptor, MethodDescriptor};

pub const PUBLIC: AccessFlags = AccessFlags::PUBLIC;
pub const PUBLIC_STATIC: AccessFlags = AccessFlags::PUBLIC.union(AccessFlags::STATIC);
pub const ENUM_CONSTANT: AccessFlags = AccessFlags::PUBLIC
    .union(AccessFlags::STATIC)
    .union(AccessFlags::FINAL)
    .union(AccessFlags::ENUM);

pub fn field(name: &str, descriptor: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, descriptor, PUBLIC)
}

pub fn static_field(name: &str, descriptor: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, descriptor, PUBLIC_STATIC)
}

pub fn method(name: &str, descriptor: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, descriptor, PUBLIC)
}

pub fn static_method(name: &str, descriptor: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, descriptor, PUBLIC_STATIC)
}

pub fn ctor(descriptor: &str) -> MethodDescriptor {
    MethodDescriptor::constructor(descriptor, PUBLIC)
}

/// `pkg.Point { public int x; public int y; }`
pub fn point() -> ClassDescriptor {
    ClassDescriptor::new("pkg.Point")
        .with_field(field("y", "I"))
        .with_field(field("x", "I"))
}

/// `pkg.MyException` with `()` and `(String)` constructors.
pub fn my_exception() -> ClassDescriptor {
    ClassDescriptor::new("pkg.MyException")
        .with_method(ctor("(Ljava/lang/String;)V"))
        .with_method(ctor("()V"))
}

/// `pkg.Settings { public static byte[] data; }`
pub fn settings() -> ClassDescriptor {
    ClassDescriptor::new("pkg.Settings").with_field(static_field("data", "[B"))
}

/// `enum pkg.Color { RED, GREEN, BLUE }` as javac compiles it.
pub fn color() -> ClassDescriptor {
    ClassDescriptor::new("pkg.Color")
        .with_access(AccessFlags::PUBLIC | AccessFlags::FINAL | AccessFlags::ENUM)
        .with_field(FieldDescriptor::new("RED", "Lpkg/Color;", ENUM_CONSTANT))
        .with_field(FieldDescriptor::new("GREEN", "Lpkg/Color;", ENUM_CONSTANT))
        .with_field(FieldDescriptor::new("BLUE", "Lpkg/Color;", ENUM_CONSTANT))
        .with_field(FieldDescriptor::new(
            "$VALUES",
            "[Lpkg/Color;",
            AccessFlags::PRIVATE | AccessFlags::STATIC | AccessFlags::FINAL | AccessFlags::SYNTHETIC,
        ))
        .with_method(static_method("values", "()[Lpkg/Color;"))
        .with_method(static_method("valueOf", "(Ljava/lang/String;)Lpkg/Color;"))
        .with_method(MethodDescriptor::new("<clinit>", "()V", AccessFlags::STATIC))
        .with_method(MethodDescriptor::constructor(
            "(Ljava/lang/String;I)V",
            AccessFlags::PRIVATE,
        ))
}

/// In-memory descriptor source.
pub fn classes(
    list: impl IntoIterator<Item = ClassDescriptor>,
) -> BTreeMap<String, ClassDescriptor> {
    list.into_iter()
        .map(|class| (class.name.clone(), class))
        .collect()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
