use std::fs;
use std::path::Path;

use indoc::indoc;
use jnibind_codegen::generate;

use super::project::{Project, ProjectError};
use super::render;

const PROJECT: &str = indoc! {r#"
    {
        "classes": "descriptors",
        "classpath": ["platform"],
        "header_output": "native/geometry.h",
        "impl_output": "native/geometry.c",
        "prefix": "geometry",
        "structs": [{ "class": "pkg.Point", "filters": ["y"] }],
        "exceptions": [{ "classname": "java.lang.IllegalStateException", "onlyPublic": true }],
        "builders": ["make", "-C", "native"],
        "builder_dir": "native"
    }
"#};

const POINT: &str = indoc! {r#"
    {
        "name": "pkg.Point",
        "access": "PUBLIC",
        "fields": [
            { "name": "x", "descriptor": "I", "access": "PUBLIC" },
            { "name": "y", "descriptor": "I", "access": "PUBLIC" }
        ]
    }
"#};

const ILLEGAL_STATE: &str = indoc! {r#"
    {
        "name": "java.lang.IllegalStateException",
        "access": "PUBLIC",
        "methods": [
            { "name": "<init>", "descriptor": "(Ljava/lang/String;)V", "access": "PUBLIC" }
        ]
    }
"#};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn paths_resolve_against_project_dir() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jnibind.json", PROJECT);

    let project = Project::load(&dir.path().join("jnibind.json")).unwrap();

    assert_eq!(project.classes, dir.path().join("descriptors"));
    assert_eq!(project.classpath, [dir.path().join("platform")]);
    assert_eq!(project.header_output, dir.path().join("native/geometry.h"));
    assert_eq!(project.impl_output, dir.path().join("native/geometry.c"));
    assert_eq!(project.builder_dir, Some(dir.path().join("native")));
    assert_eq!(project.builders, ["make", "-C", "native"]);
}

#[test]
fn header_include_derived_from_header_name() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jnibind.json", PROJECT);

    let project = Project::load(&dir.path().join("jnibind.json")).unwrap();
    let config = project.config();

    assert_eq!(project.header_include, "#include \"geometry.h\"");
    assert_eq!(config.header_include_str(), "#include \"geometry.h\"");
    assert_eq!(config.prefix_str(), "geometry");
}

#[test]
fn explicit_header_include_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "p.json",
        indoc! {r##"
            {
                "classes": "out",
                "header_output": "b.h",
                "impl_output": "b.c",
                "header_include": "#include <bindings/b.h>"
            }
        "##},
    );

    let project = Project::load(&dir.path().join("p.json")).unwrap();

    assert_eq!(project.config().header_include_str(), "#include <bindings/b.h>");
    assert_eq!(project.config().prefix_str(), "jnibind");
    assert!(project.classpath.is_empty());
    assert!(project.builders.is_empty());
    assert!(project.builder_dir.is_none());
    assert!(project.targets.is_empty());
}

#[test]
fn targets_accept_both_key_styles() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jnibind.json", PROJECT);

    let project = Project::load(&dir.path().join("jnibind.json")).unwrap();
    let structs: Vec<_> = project.targets.structs().collect();
    let exceptions: Vec<_> = project.targets.exceptions().collect();

    assert_eq!(structs.len(), 1);
    assert!(structs[0].is_filtered("y"));
    assert!(!structs[0].only_public);
    assert_eq!(exceptions[0].class, "java.lang.IllegalStateException");
    assert!(exceptions[0].only_public);
}

#[test]
fn fallback_directory_supplies_missing_classes() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jnibind.json", PROJECT);
    write(dir.path(), "descriptors/pkg/Point.json", POINT);
    write(dir.path(), "platform/java/lang/IllegalStateException.json", ILLEGAL_STATE);

    let project = Project::load(&dir.path().join("jnibind.json")).unwrap();
    let class_path = project.class_path().unwrap();
    let bindings = generate(&class_path, &project.targets, project.config()).unwrap();

    assert!(bindings.source.starts_with("// Generated by jnibind. Do not edit.\n#include \"geometry.h\"\n"));
    assert!(bindings.header.contains("jint jget_Point_x(JNIEnv * env, jobject instance);"));
    assert!(!bindings.header.contains("jget_Point_y"));
    assert!(bindings.header.contains("void jthrow_IllegalStateException(JNIEnv * env, jstring p0);"));
    assert!(bindings.header.contains("jboolean geometry_init(JNIEnv * env);"));
}

#[test]
fn missing_descriptor_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jnibind.json", PROJECT);

    let project = Project::load(&dir.path().join("jnibind.json")).unwrap();
    let Err(err) = project.class_path() else {
        panic!("descriptor directory should be missing");
    };

    assert!(matches!(err, ProjectError::Descriptors(jnibind_core::Error::Io { .. })));
    assert!(render(&err).starts_with("failed to read '"));
}

#[test]
fn missing_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = Project::load(&path).unwrap_err();

    assert!(matches!(err, ProjectError::Read { .. }));
    assert!(render(&err).contains("absent.json"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "jnibind.json",
        r#"{ "classes": "c", "header_output": "a.h", "impl_output": "a.c", "prefx": "x" }"#,
    );

    let err = Project::load(&dir.path().join("jnibind.json")).unwrap_err();

    assert!(matches!(err, ProjectError::Parse { .. }));
    let message = render(&err);
    assert!(message.starts_with("invalid project file '"));
    assert!(message.contains("prefx"));
}

#[test]
fn header_output_without_file_name() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "jnibind.json",
        r#"{ "classes": "c", "header_output": "..", "impl_output": "a.c" }"#,
    );

    let err = Project::load(&dir.path().join("jnibind.json")).unwrap_err();

    assert!(matches!(err, ProjectError::HeaderName(_)));
}
