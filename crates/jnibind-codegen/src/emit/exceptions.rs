//! Exception bindings: `jthrow_<C>[_k]` per constructor, plus `jthrowC_`/`jthrowCC_`
//! variants taking native strings.

use indoc::formatdoc;
use jnibind_core::{ClassDescriptor, JavaType, MethodSignature};

use super::Generator;
use super::methods::parse_signature;
use super::snippets::indent;
use crate::Result;
use crate::naming::ClassSymbols;
use crate::params::{self, StringParams};
use crate::select::{self, Selected};
use crate::target::BindingTarget;
use crate::types::{CType, ValueTag};

/// Constructor that `ThrowNew` can call directly.
const MESSAGE_CONSTRUCTOR: &str = "(Ljava/lang/String;)V";

impl Generator {
    /// Emit throw helpers for every selected constructor of an exception class.
    pub fn emit_exception(
        &mut self,
        class: &ClassDescriptor,
        target: &BindingTarget,
    ) -> Result<()> {
        let symbols = ClassSymbols::new(&class.name)?;
        self.register_class(&class.name)?;
        log::debug!("exception {}", class.name);

        for selected in select::exception_constructors(class, target) {
            let signature = parse_signature(class, selected.method)?;
            self.emit_throw(selected, &signature, &symbols)?;
        }
        Ok(())
    }

    fn emit_throw(
        &mut self,
        selected: Selected<'_>,
        signature: &MethodSignature,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let Selected { method, ordinal } = selected;
        log::debug!("  throw #{ordinal} {}", method.descriptor);
        let handle = symbols.exception_handle(ordinal);
        self.emit_method_handle(&handle, method, symbols);

        let function = symbols.throw(ordinal);
        self.claim(&function)?;
        let class_handle = symbols.class_handle();
        let params = params::declare(&signature.args, StringParams::Runtime);
        let args = params::forward(&signature.args, false);

        self.out
            .declare(&format!("void {function}(JNIEnv * env{params});"));
        self.out.define(&formatdoc! {r#"
            void {function}(JNIEnv * env{params}) {{
                if ((*env)->ExceptionCheck(env)) {{
                    return;
                }}
                jobject obj = (*env)->NewObject(env, reg.{class_handle}, reg.{handle}{args});
                if (obj == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewObject");
                    return;
                }}
                (*env)->Throw(env, (jthrowable) obj);
            }}

        "#});

        if params::has_string(&signature.args) {
            self.emit_native_string_throws(
                &method.descriptor,
                ordinal,
                signature,
                &handle,
                symbols,
            )?;
        }
        Ok(())
    }

    fn emit_native_string_throws(
        &mut self,
        descriptor: &str,
        ordinal: usize,
        signature: &MethodSignature,
        handle: &str,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let chars = symbols.throw_chars(ordinal);
        let const_chars = symbols.throw_const_chars(ordinal);
        self.claim(&chars)?;
        self.claim(&const_chars)?;
        let class_handle = symbols.class_handle();
        let chars_params = params::declare(&signature.args, StringParams::Chars);
        let const_params = params::declare(&signature.args, StringParams::ConstChars);
        let cast_args = params::forward(&signature.args, true);

        self.out.declare(&formatdoc! {"
            void {chars}(JNIEnv * env{chars_params});
            void {const_chars}(JNIEnv * env{const_params});
        "});

        if descriptor == MESSAGE_CONSTRUCTOR {
            self.out.define(&formatdoc! {"
                void {const_chars}(JNIEnv * env{const_params}) {{
                    if ((*env)->ExceptionCheck(env)) {{
                        return;
                    }}
                    (*env)->ThrowNew(env, reg.{class_handle}, p0);
                }}

            "});
        } else {
            let count = signature.args.len();
            let packing = pack_arguments(&signature.args)?;
            self.out.define(&formatdoc! {r#"
                void {const_chars}(JNIEnv * env{const_params}) {{
                    if ((*env)->ExceptionCheck(env)) {{
                        return;
                    }}
                    jvalue parameters[{count}];
                {packing}    jobject obj = (*env)->NewObjectA(env, reg.{class_handle}, reg.{handle}, (const jvalue *) parameters);
                    if (obj == 0) {{
                        throw_internal_OutOfMemoryError(env, "NewObjectA");
                        return;
                    }}
                    (*env)->Throw(env, (jthrowable) obj);
                }}

            "#});
        }

        self.out.define(&formatdoc! {"
            void {chars}(JNIEnv * env{chars_params}) {{
                {const_chars}(env{cast_args});
            }}

        "});
        Ok(())
    }
}

/// Statements filling `parameters[]`, converting native strings with `NewStringUTF`.
fn pack_arguments(args: &[JavaType]) -> Result<String> {
    let mut out = String::new();
    for (i, ty) in args.iter().enumerate() {
        let statement = if CType::of(ty).is_string() {
            formatdoc! {r#"
                if (p{i} == 0) {{
                    parameters[{i}].l = 0;
                }} else {{
                    parameters[{i}].l = (*env)->NewStringUTF(env, p{i});
                    if (parameters[{i}].l == 0) {{
                        throw_internal_OutOfMemoryError(env, "NewStringUTF");
                        return;
                    }}
                }}
            "#}
        } else {
            let tag = ValueTag::of(ty)?;
            format!("parameters[{i}].{tag} = p{i};\n")
        };
        out.push_str(&indent(&statement));
    }
    Ok(out)
}
