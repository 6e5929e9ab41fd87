use jnibind_core::{AccessFlags, ClassDescriptor, MethodDescriptor};

use crate::test_utils::{count, ctor, method, static_method};
use crate::{BindingTarget, Config, Error, Generator};

fn emit(class: &ClassDescriptor, target: &BindingTarget) -> Generator {
    let mut generator = Generator::new(Config::new());
    generator.emit_struct(class, target).unwrap();
    generator
}

fn shape() -> ClassDescriptor {
    ClassDescriptor::new("pkg.Shape")
        .with_method(method("scale", "(I)V"))
        .with_method(method("scale", "(D)V"))
        .with_method(method("scale", "(F)V"))
        .with_method(ctor("(I)V"))
        .with_method(ctor("()V"))
        .with_method(static_method("area", "()D"))
        .with_method(method("name", "()Ljava/lang/String;"))
}

#[test]
fn constructor_and_method() {
    let class = ClassDescriptor::new("pkg.Counter")
        .with_method(method("next", "()I"))
        .with_method(ctor("()V"));
    let generator = emit(&class, &BindingTarget::new("pkg.Counter"));
    let out = generator.emission();

    insta::assert_snapshot!(out.declarations(), @r"
    jboolean jinstanceof_Counter(JNIEnv * env, jobject value);
    jobject jnew_Counter(JNIEnv * env);
    jint jcall_Counter_next(JNIEnv * env, jobject instance);
    ");
    insta::assert_snapshot!(out.definitions(), @r#"
    jboolean jinstanceof_Counter(JNIEnv * env, jobject value) {
        return (*env)->IsInstanceOf(env, value, reg.cls_Counter);
    }

    jobject jnew_Counter(JNIEnv * env) {
        jobject obj = (*env)->NewObject(env, reg.cls_Counter, reg.ctor_Counter_0);
        if (obj == 0) {
            throw_internal_OutOfMemoryError(env, "NewObject");
        }
        return obj;
    }

    jint jcall_Counter_next(JNIEnv * env, jobject instance) {
        return (*env)->CallIntMethod(env, instance, reg.mid_Counter_next_0);
    }
    "#);
    assert!(out.init_steps().contains(
        "    reg.ctor_Counter_0 = (*env)->GetMethodID(env, reg.cls_Counter, \"<init>\", \"()V\");\n"
    ));
    assert!(out.init_steps().contains("\"cant find method pkg/Counter.<init>()V\""));
    assert!(out.init_steps().contains("\"cant find method pkg/Counter.next()I\""));
}

#[test]
fn overloads_get_ordinal_suffixes() {
    let generator = emit(&shape(), &BindingTarget::new("pkg.Shape"));
    let decls = generator.emission().declarations();

    assert!(decls.contains("jobject jnew_Shape(JNIEnv * env);"));
    assert!(decls.contains("jobject jnew_Shape_1(JNIEnv * env, jint p0);"));
    assert!(decls.contains("void jcall_Shape_scale(JNIEnv * env, jobject instance, jdouble p0);"));
    assert!(decls.contains("void jcall_Shape_scale_1(JNIEnv * env, jobject instance, jfloat p0);"));
    assert!(decls.contains("void jcall_Shape_scale_2(JNIEnv * env, jobject instance, jint p0);"));
    assert!(!decls.contains("jcall_Shape_scale_3"));
    assert!(!decls.contains("jnew_Shape_2"));

    let registry = generator.emission().registry();
    assert!(registry.contains("    jmethodID ctor_Shape_1;\n"));
    assert!(registry.contains("    jmethodID mid_Shape_scale_2;\n"));
}

#[test]
fn constructor_forwards_arguments() {
    let generator = emit(&shape(), &BindingTarget::new("pkg.Shape"));

    assert!(generator.emission().definitions().contains(
        "    jobject obj = (*env)->NewObject(env, reg.cls_Shape, reg.ctor_Shape_1, p0);\n"
    ));
}

#[test]
fn static_method_has_no_receiver() {
    let generator = emit(&shape(), &BindingTarget::new("pkg.Shape"));
    let out = generator.emission();

    assert!(out.declarations().contains("jdouble jcall_Shape_area(JNIEnv * env);"));
    assert!(out.definitions().contains(
        "    return (*env)->CallStaticDoubleMethod(env, reg.cls_Shape, reg.mid_Shape_area_0);\n"
    ));
    assert!(out.init_steps().contains(
        "(*env)->GetStaticMethodID(env, reg.cls_Shape, \"area\", \"()D\")"
    ));
}

#[test]
fn void_call_has_no_return() {
    let generator = emit(&shape(), &BindingTarget::new("pkg.Shape"));

    assert!(generator.emission().definitions().contains(
        "{\n    (*env)->CallVoidMethod(env, instance, reg.mid_Shape_scale_0, p0);\n}\n"
    ));
}

#[test]
fn object_results_are_cast() {
    let generator = emit(&shape(), &BindingTarget::new("pkg.Shape"));
    let out = generator.emission();

    assert!(out.declarations().contains("jstring jcall_Shape_name(JNIEnv * env, jobject instance);"));
    assert!(out.definitions().contains(
        "    return (jstring) (*env)->CallObjectMethod(env, instance, reg.mid_Shape_name_0);\n"
    ));
}

#[test]
fn filtered_overload_leaves_no_gap() {
    let target = BindingTarget::new("pkg.Shape").filter("scale(D)V");
    let generator = emit(&shape(), &target);
    let out = generator.emission();

    assert!(out.declarations().contains("void jcall_Shape_scale(JNIEnv * env, jobject instance, jfloat p0);"));
    assert!(out.declarations().contains("void jcall_Shape_scale_1(JNIEnv * env, jobject instance, jint p0);"));
    assert!(!out.declarations().contains("jdouble p0"));
    assert!(!out.registry().contains("mid_Shape_scale_2"));
}

#[test]
fn public_only_drops_private_members() {
    let class = shape()
        .with_method(MethodDescriptor::new("secret", "()V", AccessFlags::PRIVATE))
        .with_method(MethodDescriptor::constructor("(J)V", AccessFlags::PROTECTED));

    let all = emit(&class, &BindingTarget::new("pkg.Shape"));
    assert_eq!(count(all.emission().declarations(), "jcall_Shape_secret"), 1);
    assert!(all.emission().declarations().contains("jnew_Shape_2"));

    let public = emit(&class, &BindingTarget::new("pkg.Shape").only_public(true));
    assert!(!public.emission().declarations().contains("secret"));
    assert!(!public.emission().declarations().contains("jlong"));
    assert!(!public.emission().registry().contains("ctor_Shape_2"));
}

#[test]
fn malformed_method_descriptor_is_fatal() {
    let class = ClassDescriptor::new("pkg.Broken").with_method(method("run", "(I"));
    let mut generator = Generator::new(Config::new());

    let err = generator
        .emit_struct(&class, &BindingTarget::new("pkg.Broken"))
        .unwrap_err();

    assert!(matches!(err, Error::Signature { ref member, .. } if member == "run"));
}

#[test]
fn overload_suffix_clashing_with_method_name_is_fatal() {
    let class = ClassDescriptor::new("pkg.Big")
        .with_method(method("foo", "()I"))
        .with_method(method("foo", "(I)I"))
        .with_method(method("foo_1", "()I"));
    let mut generator = Generator::new(Config::new());

    let err = generator
        .emit_struct(&class, &BindingTarget::new("pkg.Big"))
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateSymbol(ref name) if name == "jcall_Big_foo_1"));
}
