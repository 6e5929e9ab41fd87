//! Field bindings: getters, setters, convenience setters and enum constants.

use indoc::formatdoc;
use jnibind_core::{ClassDescriptor, FieldDescriptor, JavaType};

use super::Generator;
use super::snippets::{checked_init, indent, member, release_global, reset_id};
use crate::naming::ClassSymbols;
use crate::select;
use crate::target::BindingTarget;
use crate::types::{Accessor, CType};
use crate::{Error, Result};

/// How an accessor reaches the field: through an instance or the class handle.
struct Receiver {
    /// Parameter following `JNIEnv * env`, if any
    param: &'static str,
    /// Object argument of the JNI accessor call
    target: String,
    /// `Static` infix of the JNI accessor name
    infix: &'static str,
}

impl Receiver {
    fn of(field: &FieldDescriptor, symbols: &ClassSymbols) -> Self {
        if field.is_static() {
            Self {
                param: "",
                target: format!("reg.{}", symbols.class_handle()),
                infix: "Static",
            }
        } else {
            Self {
                param: ", jobject instance",
                target: "instance".to_string(),
                infix: "",
            }
        }
    }
}

impl Generator {
    pub(super) fn emit_fields(
        &mut self,
        class: &ClassDescriptor,
        target: &BindingTarget,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let mut constants = Vec::new();
        for field in select::struct_fields(class, target) {
            let ty = field.java_type().map_err(|source| Error::Signature {
                class: class.name.clone(),
                member: field.name.clone(),
                descriptor: field.descriptor.clone(),
                source,
            })?;

            if field.is_enum() {
                self.emit_enum_constant(field, symbols)?;
                constants.push(symbols.enum_constant(&field.name));
            } else {
                self.emit_field(field, &ty, symbols)?;
            }
        }

        if !constants.is_empty() {
            self.emit_enum_values(&constants, symbols)?;
        }
        Ok(())
    }

    fn emit_field(
        &mut self,
        field: &FieldDescriptor,
        ty: &JavaType,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        log::debug!("  field {} {}", field.name, field.descriptor);
        let fid = symbols.field_handle(&field.name);
        let class_handle = symbols.class_handle();
        let lookup = if field.is_static() {
            "GetStaticFieldID"
        } else {
            "GetFieldID"
        };
        let (name, descriptor, native) = (&field.name, &field.descriptor, symbols.native());

        self.out.member(&member("jfieldID", &fid));
        self.out.init(&checked_init(
            &fid,
            &format!("(*env)->{lookup}(env, reg.{class_handle}, \"{name}\", \"{descriptor}\")"),
            &format!("cant find field {native}.{name} {descriptor}"),
        ));
        self.out.teardown(&reset_id(&fid));

        let recv = Receiver::of(field, symbols);
        let ctype = CType::of(ty);
        let accessor = Accessor::of(ty);
        let cast = ctype.cast_from(accessor);
        let (param, target, infix) = (recv.param, recv.target.as_str(), recv.infix);

        let getter = symbols.getter(name);
        self.claim(&getter)?;
        self.out
            .declare(&format!("{ctype} {getter}(JNIEnv * env{param});"));
        self.out.define(&formatdoc! {"
            {ctype} {getter}(JNIEnv * env{param}) {{
                return {cast}(*env)->Get{infix}{accessor}Field(env, {target}, reg.{fid});
            }}

        "});

        let setter = symbols.setter(name);
        self.claim(&setter)?;
        self.out
            .declare(&format!("void {setter}(JNIEnv * env{param}, {ctype} value);"));
        self.out.define(&formatdoc! {"
            void {setter}(JNIEnv * env{param}, {ctype} value) {{
                (*env)->Set{infix}{accessor}Field(env, {target}, reg.{fid}, value);
            }}

        "});

        match ctype {
            CType::ByteArray => self.emit_array_setter(name, "Byte", &fid, &recv, symbols),
            CType::LongArray => self.emit_array_setter(name, "Long", &fid, &recv, symbols),
            CType::String => self.emit_string_setters(name, &fid, &recv, symbols),
            _ => Ok(()),
        }
    }

    /// `jsetA_`: copy a native buffer into a new Java array and store it.
    fn emit_array_setter(
        &mut self,
        field: &str,
        element: &str,
        fid: &str,
        recv: &Receiver,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let setter = symbols.array_setter(field);
        self.claim(&setter)?;
        let elem = format!("j{}", element.to_ascii_lowercase());
        let (param, target, infix) = (recv.param, recv.target.as_str(), recv.infix);

        self.out.declare(&format!(
            "jboolean {setter}(JNIEnv * env{param}, const {elem} * value, jsize len);"
        ));
        self.out.define(&formatdoc! {r#"
            jboolean {setter}(JNIEnv * env{param}, const {elem} * value, jsize len) {{
                if (value == 0) {{
                    (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, 0);
                    return JNI_TRUE;
                }}
                if (len < 0) {{
                    len = 0;
                }}
                {elem}Array tmp = (*env)->New{element}Array(env, len);
                if (tmp == 0) {{
                    throw_internal_OutOfMemoryError(env, "New{element}Array");
                    return JNI_FALSE;
                }}
                if (len > 0) {{
                    (*env)->Set{element}ArrayRegion(env, tmp, 0, len, value);
                }}
                (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, tmp);
                (*env)->DeleteLocalRef(env, tmp);
                return JNI_TRUE;
            }}

        "#});
        Ok(())
    }

    /// `jsetC_`, `jsetCC_` and `jsetWC_`: store a native string as a Java string.
    fn emit_string_setters(
        &mut self,
        field: &str,
        fid: &str,
        recv: &Receiver,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        let chars = symbols.chars_setter(field);
        let const_chars = symbols.const_chars_setter(field);
        let wide = symbols.wide_chars_setter(field);
        for symbol in [&chars, &const_chars, &wide] {
            self.claim(symbol)?;
        }
        let (param, target, infix) = (recv.param, recv.target.as_str(), recv.infix);
        let forward = if param.is_empty() { "" } else { ", instance" };

        self.out.declare(&formatdoc! {"
            jboolean {chars}(JNIEnv * env{param}, char * value);
            jboolean {const_chars}(JNIEnv * env{param}, const char * value);
            jboolean {wide}(JNIEnv * env{param}, const wchar_t * value);
        "});

        self.out.define(&formatdoc! {r#"
            jboolean {chars}(JNIEnv * env{param}, char * value) {{
                return {const_chars}(env{forward}, (const char *) value);
            }}

            jboolean {const_chars}(JNIEnv * env{param}, const char * value) {{
                if (value == 0) {{
                    (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, 0);
                    return JNI_TRUE;
                }}
                jstring tmp = (*env)->NewStringUTF(env, value);
                if (tmp == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewStringUTF");
                    return JNI_FALSE;
                }}
                (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, tmp);
                (*env)->DeleteLocalRef(env, tmp);
                return JNI_TRUE;
            }}

            jboolean {wide}(JNIEnv * env{param}, const wchar_t * value) {{
                if (value == 0) {{
                    (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, 0);
                    return JNI_TRUE;
                }}
                jstring tmp;
                if (sizeof(wchar_t) == sizeof(jchar)) {{
                    tmp = (*env)->NewString(env, (const jchar *) value, (jsize) wcslen(value));
                }} else {{
                    size_t units = 0;
                    for (size_t i = 0; value[i] != 0; i++) {{
                        unsigned long cp = (unsigned long) value[i];
                        units += (cp > 0xFFFF && cp <= 0x10FFFF) ? 2 : 1;
                    }}
                    jchar stackBuf[256];
                    jchar * buf = stackBuf;
                    if (units > 256) {{
                        buf = (jchar *) malloc(units * sizeof(jchar));
                        if (buf == 0) {{
                            throw_internal_OutOfMemoryError(env, "malloc");
                            return JNI_FALSE;
                        }}
                    }}
                    size_t j = 0;
                    for (size_t i = 0; value[i] != 0; i++) {{
                        unsigned long cp = (unsigned long) value[i];
                        if (cp > 0x10FFFF) {{
                            cp = 0xFFFD;
                        }}
                        if (cp > 0xFFFF) {{
                            cp -= 0x10000;
                            buf[j++] = (jchar) (0xD800 + (cp >> 10));
                            buf[j++] = (jchar) (0xDC00 + (cp & 0x3FF));
                        }} else {{
                            buf[j++] = (jchar) cp;
                        }}
                    }}
                    tmp = (*env)->NewString(env, buf, (jsize) units);
                    if (buf != stackBuf) {{
                        free(buf);
                    }}
                }}
                if (tmp == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewString");
                    return JNI_FALSE;
                }}
                (*env)->Set{infix}ObjectField(env, {target}, reg.{fid}, tmp);
                (*env)->DeleteLocalRef(env, tmp);
                return JNI_TRUE;
            }}

        "#});
        Ok(())
    }

    /// Cache one enum constant as a global reference.
    fn emit_enum_constant(
        &mut self,
        field: &FieldDescriptor,
        symbols: &ClassSymbols,
    ) -> Result<()> {
        log::debug!("  enum constant {}", field.name);
        let obj = symbols.enum_constant(&field.name);
        let class_handle = symbols.class_handle();
        let (name, descriptor, native) = (&field.name, &field.descriptor, symbols.native());

        self.out.member(&member("jobject", &obj));
        self.out.init(&indent(&formatdoc! {r#"
            {{
                jfieldID fid = (*env)->GetStaticFieldID(env, reg.{class_handle}, "{name}", "{descriptor}");
                if (fid == 0) {{
                    (*env)->ExceptionClear(env);
                    (*env)->ThrowNew(env, reg.internal_Exception, "cant find field {native}.{name} {descriptor}");
                    goto fail;
                }}
                jobject local = (*env)->GetStaticObjectField(env, reg.{class_handle}, fid);
                if (local == 0) {{
                    (*env)->ExceptionClear(env);
                    (*env)->ThrowNew(env, reg.internal_Exception, "cant get enum constant {native}.{name}");
                    goto fail;
                }}
                reg.{obj} = (*env)->NewGlobalRef(env, local);
                (*env)->DeleteLocalRef(env, local);
                if (reg.{obj} == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewGlobalRef");
                    goto fail;
                }}
            }}

        "#}));
        self.out.teardown(&release_global(&obj));

        let accessor = symbols.enum_accessor(name);
        self.claim(&accessor)?;
        self.out.declare(&format!("jobject {accessor}(void);"));
        self.out.define(&formatdoc! {"
            jobject {accessor}(void) {{
                return reg.{obj};
            }}

        "});
        Ok(())
    }

    /// The per-class constant table behind `jenum_<C>_count` and `jenum_<C>_values`.
    fn emit_enum_values(&mut self, constants: &[String], symbols: &ClassSymbols) -> Result<()> {
        let count_fn = symbols.enum_count();
        let values_fn = symbols.enum_values_accessor();
        self.claim(&count_fn)?;
        self.claim(&values_fn)?;

        let values = symbols.enum_values();
        let count = constants.len();

        self.out.member(&format!("    jobject {values}[{count}];"));
        let mut fill = String::new();
        for (idx, constant) in constants.iter().enumerate() {
            fill.push_str(&format!("    reg.{values}[{idx}] = reg.{constant};\n"));
        }
        fill.push('\n');
        self.out.init(&fill);
        self.out.teardown(&indent(&formatdoc! {"
            for (int i = 0; i < {count}; i++) {{
                reg.{values}[i] = 0;
            }}
        "}));

        self.out.declare(&formatdoc! {"
            jsize {count_fn}(void);
            jobject * {values_fn}(void);
        "});
        self.out.define(&formatdoc! {"
            jsize {count_fn}(void) {{
                return {count};
            }}

            jobject * {values_fn}(void) {{
                return reg.{values};
            }}

        "});
        Ok(())
    }
}
