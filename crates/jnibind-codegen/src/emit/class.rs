//! Class registration: the class handle and `jinstanceof_<C>`.

use indoc::formatdoc;

use super::Generator;
use super::snippets::{checked_init, member, release_global};
use crate::Result;
use crate::naming::ClassSymbols;

impl Generator {
    /// Emit the class handle and instance check for `class` once.
    ///
    /// Returns `false` without emitting anything if the class was already registered.
    pub fn register_class(&mut self, class: &str) -> Result<bool> {
        let symbols = ClassSymbols::new(class)?;
        if !self.out.register_class(class) {
            return Ok(false);
        }
        log::debug!("registering class {class}");
        let instance_of = symbols.instance_of();
        self.claim(&instance_of)?;

        let handle = symbols.class_handle();
        let native = symbols.native();
        self.out.member(&member("jclass", &handle));
        self.out.init(&checked_init(
            &handle,
            &format!("makeGlobalClassRef(env, \"{native}\")"),
            &format!("cant find class {native}"),
        ));
        self.out.teardown(&release_global(&handle));

        self.out.declare(&format!(
            "jboolean {instance_of}(JNIEnv * env, jobject value);"
        ));
        self.out.define(&formatdoc! {"
            jboolean {instance_of}(JNIEnv * env, jobject value) {{
                return (*env)->IsInstanceOf(env, value, reg.{handle});
            }}

        "});
        Ok(true)
    }
}
