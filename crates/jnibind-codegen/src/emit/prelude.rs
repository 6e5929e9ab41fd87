//! Runtime support emitted once per run: lifecycle prototypes, runtime class
//! handles and the helper functions every binding relies on.

use indoc::formatdoc;

use super::Generator;
use super::snippets::{checked_init, indent, member, release_global, reset_id};

/// Runtime classes resolved before any bound class: (member, class path).
const RUNTIME_CLASSES: [(&str, &str); 5] = [
    ("internal_Exception", "java/lang/Exception"),
    ("internal_OutOfMemoryError", "java/lang/OutOfMemoryError"),
    (
        "internal_IllegalArgumentException",
        "java/lang/IllegalArgumentException",
    ),
    (
        "internal_NullPointerException",
        "java/lang/NullPointerException",
    ),
    ("internal_Enum", "java/lang/Enum"),
];

/// `java.lang.Enum` methods backing `jenum_ordinal` and `jenum_name`: (member, name, signature).
const ENUM_METHODS: [(&str, &str, &str); 2] = [
    ("internal_Enum_ordinal", "ordinal", "()I"),
    ("internal_Enum_name", "name", "()Ljava/lang/String;"),
];

const THROW_HELPERS: [&str; 3] = [
    "OutOfMemoryError",
    "IllegalArgumentException",
    "NullPointerException",
];

impl Generator {
    pub(super) fn emit_prelude(&mut self) {
        self.emit_prelude_declarations();
        self.emit_runtime_handles();
        self.emit_helpers();
    }

    fn emit_prelude_declarations(&mut self) {
        let init = self.config.init_fn();
        let destroy = self.config.destroy_fn();
        self.out.declare(&formatdoc! {"
            /**
             * Resolves every class, field and method handle used by the bindings.
             * Call once before any other function, typically from JNI_OnLoad.
             * On failure returns JNI_FALSE with a pending exception; handles acquired
             * so far are released again.
             */
            jboolean {init}(JNIEnv * env);

            /**
             * Releases every handle acquired by {init}. Safe to call more than once,
             * and {init} may be called again afterwards.
             */
            void {destroy}(JNIEnv * env);

            /**
             * Same as (*env)->ExceptionCheck(env).
             */
            jboolean jerr(JNIEnv * env);

            /**
             * Copies len bytes from buffer into a new Java byte array.
             * Returns NULL with a pending exception if len is negative, if buffer is
             * NULL while len is positive, or if the array cannot be allocated.
             */
            jbyteArray jarrayB(JNIEnv * env, const jbyte * buffer, jsize len);

            /**
             * Ordinal of an enum constant, or -1 if value is NULL.
             */
            jint jenum_ordinal(JNIEnv * env, jobject value);

            /**
             * Name of an enum constant, or NULL if value is NULL.
             */
            jstring jenum_name(JNIEnv * env, jobject value);

        "});
    }

    fn emit_runtime_handles(&mut self) {
        for (name, path) in RUNTIME_CLASSES {
            self.out.member(&member("jclass", name));
            // internal_Exception itself may be missing, so no ThrowNew here.
            self.out.init(&indent(&formatdoc! {r#"
                reg.{name} = makeGlobalClassRef(env, "{path}");
                if (reg.{name} == 0) {{
                    goto fail;
                }}

            "#}));
            self.out.teardown(&release_global(name));
        }

        for (name, method, signature) in ENUM_METHODS {
            self.out.member(&member("jmethodID", name));
            let expr = format!(
                "(*env)->GetMethodID(env, reg.internal_Enum, \"{method}\", \"{signature}\")"
            );
            let message = format!("cant find method java/lang/Enum.{method}{signature}");
            self.out.init(&checked_init(name, &expr, &message));
            self.out.teardown(&reset_id(name));
        }
    }

    fn emit_helpers(&mut self) {
        self.out.define(&formatdoc! {"
            static jclass makeGlobalClassRef(JNIEnv * env, const char * name) {{
                jclass local = (*env)->FindClass(env, name);
                if (local == 0) {{
                    return 0;
                }}
                jclass global = (jclass) (*env)->NewGlobalRef(env, local);
                (*env)->DeleteLocalRef(env, local);
                return global;
            }}

        "});

        for exception in THROW_HELPERS {
            self.out.define(&formatdoc! {"
                static void throw_internal_{exception}(JNIEnv * env, const char * message) {{
                    if (!(*env)->ExceptionCheck(env)) {{
                        (*env)->ThrowNew(env, reg.internal_{exception}, message);
                    }}
                }}

            "});
        }

        self.out.define(&formatdoc! {r#"
            jboolean jerr(JNIEnv * env) {{
                return (*env)->ExceptionCheck(env);
            }}

            jbyteArray jarrayB(JNIEnv * env, const jbyte * buffer, jsize len) {{
                if (len < 0) {{
                    throw_internal_IllegalArgumentException(env, "jarrayB len < 0");
                    return 0;
                }}
                if (len > 0 && buffer == 0) {{
                    throw_internal_NullPointerException(env, "jarrayB buffer = NULL");
                    return 0;
                }}
                jbyteArray res = (*env)->NewByteArray(env, len);
                if (res == 0) {{
                    throw_internal_OutOfMemoryError(env, "NewByteArray");
                    return 0;
                }}
                if (len > 0) {{
                    (*env)->SetByteArrayRegion(env, res, 0, len, buffer);
                }}
                return res;
            }}

            jint jenum_ordinal(JNIEnv * env, jobject value) {{
                if (value == 0) {{
                    return -1;
                }}
                return (*env)->CallIntMethod(env, value, reg.internal_Enum_ordinal);
            }}

            jstring jenum_name(JNIEnv * env, jobject value) {{
                if (value == 0) {{
                    return 0;
                }}
                return (jstring) (*env)->CallObjectMethod(env, value, reg.internal_Enum_name);
            }}

        "#});
    }
}
