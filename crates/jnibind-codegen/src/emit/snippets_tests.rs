use super::snippets::{checked_init, indent, release_global, reset_id};

#[test]
fn indent_skips_blank_lines() {
    assert_eq!(indent("a;\n\nb;\n"), "    a;\n\n    b;\n");
    assert_eq!(indent("a;"), "    a;");
}

#[test]
fn checked_init_jumps_to_fail() {
    let step = checked_init("fid_Point_x", "lookup()", "cant find field");

    let lines: Vec<_> = step.lines().collect();
    assert_eq!(
        lines,
        [
            "    reg.fid_Point_x = lookup();",
            "    if (reg.fid_Point_x == 0) {",
            "        (*env)->ExceptionClear(env);",
            "        (*env)->ThrowNew(env, reg.internal_Exception, \"cant find field\");",
            "        goto fail;",
            "    }",
            "",
        ]
    );
}

#[test]
fn release_global_is_guarded() {
    let step = release_global("cls_Point");

    let lines: Vec<_> = step.lines().collect();
    assert_eq!(
        lines,
        [
            "    if (reg.cls_Point != 0) {",
            "        (*env)->DeleteGlobalRef(env, reg.cls_Point);",
            "        reg.cls_Point = 0;",
            "    }",
        ]
    );
}

#[test]
fn reset_id_zeroes_member() {
    assert_eq!(reset_id("mid_Point_scale_0"), "    reg.mid_Point_scale_0 = 0;");
}
