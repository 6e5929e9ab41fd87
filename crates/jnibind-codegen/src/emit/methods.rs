//! Method and constructor bindings: `jnew_<C>[_k]` and `jcall_<C>_<m>[_k]`.

use indoc::formatdoc;
use jnibind_core::{ClassDescriptor, MethodDescriptor, MethodSignature};

use super::Generator;
use super::snippets::{checked_init, member, reset_id};
use crate::naming::ClassSymbols;
use crate::params::{self, StringParams};
use crate::select::{self, Selected};
use crate::target::BindingTarget;
use crate::types::{Accessor, CType};
use crate::{Error, Result};

impl Generator {
    pub(super) fn emit_methods(
        &mut self,
        class: &ClassDescriptor,
        target: &BindingTarget,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        for selected in select::struct_methods(class, target) {
            let signature = parse_signature(class, selected.method)?;
            if selected.method.is_constructor() {
                self.emit_constructor(selected, &signature, symbols)?;
            } else {
                self.emit_method(selected, &signature, symbols)?;
            }
        }
        Ok(())
    }

    fn emit_constructor(
        &mut self,
        selected: Selected<'_>,
        signature: &MethodSignature,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let Selected { method, ordinal } = selected;
        log::debug!("  constructor #{ordinal} {}", method.descriptor);
        let handle = symbols.constructor_handle(ordinal);
        self.emit_method_handle(&handle, method, symbols);

        let function = symbols.constructor(ordinal);
        self.claim(&function)?;
        let class_handle = symbols.class_handle();
        let params = params::declare(&signature.args, StringParams::Runtime);
        let args = params::forward(&signature.args, false);

        self.out
            .declare(&format!("jobject {function}(JNIEnv * env{params});"));
        self.out.define(&formatdoc! {r#"
            jobject {function}(JNIEnv * env{params}) {{
                jobject obj = (*env)->NewObject(env, reg.{class_handle}, reg.{handle}{args});
                if (obj == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewObject");
                }}
                return obj;
            }}

        "#});
        Ok(())
    }

    fn emit_method(
        &mut self,
        selected: Selected<'_>,
        signature: &MethodSignature,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let Selected { method, ordinal } = selected;
        log::debug!("  method {}{} #{ordinal}", method.name, method.descriptor);
        let handle = symbols.method_handle(&method.name, ordinal);
        self.emit_method_handle(&handle, method, symbols);

        let function = symbols.call(&method.name, ordinal);
        self.claim(&function)?;
        let ret = CType::of(&signature.ret);
        let accessor = Accessor::of(&signature.ret);
        let params = params::declare(&signature.args, StringParams::Runtime);
        let args = params::forward(&signature.args, false);
        let (receiver_param, receiver, infix) = if method.is_static() {
            (String::new(), format!("reg.{}", symbols.class_handle()), "Static")
        } else {
            (", jobject instance".to_string(), "instance".to_string(), "")
        };
        let result = if ret == CType::Void {
            String::new()
        } else {
            format!("return {}", ret.cast_from(accessor))
        };

        self.out.declare(&format!(
            "{ret} {function}(JNIEnv * env{receiver_param}{params});"
        ));
        self.out.define(&formatdoc! {"
            {ret} {function}(JNIEnv * env{receiver_param}{params}) {{
                {result}(*env)->Call{infix}{accessor}Method(env, {receiver}, reg.{handle}{args});
            }}

        "});
        Ok(())
    }

    /// Registry member plus init and teardown for one method id.
    pub(super) fn emit_method_handle(
        &mut self,
        handle: &str,
        method: &MethodDescriptor,
        symbols: &ClassSymbols,
    ) {
        let lookup = if method.is_static() {
            "GetStaticMethodID"
        } else {
            "GetMethodID"
        };
        let class_handle = symbols.class_handle();
        let (name, descriptor, native) = (&method.name, &method.descriptor, symbols.native());

        self.out.member(&member("jmethodID", handle));
        self.out.init(&checked_init(
            handle,
            &format!("(*env)->{lookup}(env, reg.{class_handle}, \"{name}\", \"{descriptor}\")"),
            &format!("cant find method {native}.{name}{descriptor}"),
        ));
        self.out.teardown(&reset_id(handle));
    }
}

pub(super) fn parse_signature(
    class: &ClassDescriptor,
    method: &MethodDescriptor,
) -> Result<MethodSignature> {
    method.signature().map_err(|source| Error::Signature {
        class: class.name.clone(),
        member: method.name.clone(),
        descriptor: method.descriptor.clone(),
        source,
    })
}
