use jnibind_core::JavaType;

use crate::Error;
use crate::types::{Accessor, CType, ValueTag};

fn ty(descriptor: &str) -> JavaType {
    JavaType::parse(descriptor).unwrap()
}

fn ctype(descriptor: &str) -> &'static str {
    CType::of(&ty(descriptor)).as_str()
}

#[test]
fn primitives() {
    assert_eq!(ctype("Z"), "jboolean");
    assert_eq!(ctype("B"), "jbyte");
    assert_eq!(ctype("C"), "jchar");
    assert_eq!(ctype("S"), "jshort");
    assert_eq!(ctype("I"), "jint");
    assert_eq!(ctype("J"), "jlong");
    assert_eq!(ctype("F"), "jfloat");
    assert_eq!(ctype("D"), "jdouble");
    assert_eq!(CType::of(&JavaType::Void).as_str(), "void");
}

#[test]
fn one_dimensional_primitive_arrays_are_typed() {
    assert_eq!(ctype("[Z"), "jbooleanArray");
    assert_eq!(ctype("[B"), "jbyteArray");
    assert_eq!(ctype("[C"), "jcharArray");
    assert_eq!(ctype("[S"), "jshortArray");
    assert_eq!(ctype("[I"), "jintArray");
    assert_eq!(ctype("[J"), "jlongArray");
    assert_eq!(ctype("[F"), "jfloatArray");
    assert_eq!(ctype("[D"), "jdoubleArray");
}

#[test]
fn other_arrays_are_generic() {
    assert_eq!(ctype("[[B"), "jarray");
    assert_eq!(ctype("[Ljava/lang/String;"), "jarray");
    assert_eq!(ctype("[[Ljava/lang/Object;"), "jarray");
    assert_eq!(ctype("[[[I"), "jarray");
}

#[test]
fn well_known_objects() {
    assert_eq!(ctype("Ljava/lang/String;"), "jstring");
    assert_eq!(ctype("Ljava/lang/ref/WeakReference;"), "jweak");
    assert_eq!(ctype("Ljava/lang/Class;"), "jclass");
    assert_eq!(ctype("Ljava/lang/Object;"), "jobject");
    assert_eq!(ctype("Lpkg/Point;"), "jobject");
    assert_eq!(ctype("Ljava/lang/StringBuilder;"), "jobject");
}

#[test]
fn accessor_family_collapses_references() {
    assert_eq!(Accessor::of(&ty("I")), Accessor::Int);
    assert_eq!(Accessor::of(&ty("J")), Accessor::Long);
    assert_eq!(Accessor::of(&ty("Z")), Accessor::Boolean);
    assert_eq!(Accessor::of(&ty("[B")), Accessor::Object);
    assert_eq!(Accessor::of(&ty("Ljava/lang/String;")), Accessor::Object);
    assert_eq!(Accessor::of(&JavaType::Void), Accessor::Void);
    assert_eq!(Accessor::Double.to_string(), "Double");
}

#[test]
fn casts_only_narrow_object_results() {
    let string = CType::of(&ty("Ljava/lang/String;"));
    assert_eq!(string.cast_from(Accessor::Object), "(jstring) ");

    let bytes = CType::of(&ty("[B"));
    assert_eq!(bytes.cast_from(Accessor::Object), "(jbyteArray) ");

    assert_eq!(CType::Object.cast_from(Accessor::Object), "");
    assert_eq!(CType::Int.cast_from(Accessor::Int), "");
}

#[test]
fn value_tags() {
    let tags: Vec<_> = ["Z", "B", "C", "S", "I", "J", "F", "D", "Lpkg/A;", "[I"]
        .into_iter()
        .map(|d| ValueTag::of(&ty(d)).unwrap().as_str())
        .collect();

    assert_eq!(tags, ["z", "b", "c", "s", "i", "j", "f", "d", "l", "l"]);
}

#[test]
fn void_has_no_value_tag() {
    let err = ValueTag::of(&JavaType::Void).unwrap_err();

    assert!(matches!(err, Error::UnsupportedValueType(name) if name == "void"));
}
