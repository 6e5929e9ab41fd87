//! C fragments shared by the class, member and prelude emitters.

use indoc::formatdoc;

/// Indent every non-empty line by one level (four spaces).
pub(super) fn indent(block: &str) -> String {
    let mut out = String::with_capacity(block.len() + 16);
    for line in block.split_inclusive('\n') {
        if line != "\n" {
            out.push_str("    ");
        }
        out.push_str(line);
    }
    out
}

/// Init step storing `expr` into a registry member.
///
/// A zero result clears the pending exception, raises `java.lang.Exception`
/// with `message` and jumps to the rollback label.
pub(super) fn checked_init(member: &str, expr: &str, message: &str) -> String {
    indent(&formatdoc! {r#"
        reg.{member} = {expr};
        if (reg.{member} == 0) {{
            (*env)->ExceptionClear(env);
            (*env)->ThrowNew(env, reg.internal_Exception, "{message}");
            goto fail;
        }}

    "#})
}

/// Teardown step for a global reference member.
pub(super) fn release_global(member: &str) -> String {
    indent(&formatdoc! {"
        if (reg.{member} != 0) {{
            (*env)->DeleteGlobalRef(env, reg.{member});
            reg.{member} = 0;
        }}
    "})
}

/// Teardown step for a field or method id member.
pub(super) fn reset_id(member: &str) -> String {
    format!("    reg.{member} = 0;")
}

/// Registry member declaration.
pub(super) fn member(ctype: &str, name: &str) -> String {
    format!("    {ctype} {name};")
}
