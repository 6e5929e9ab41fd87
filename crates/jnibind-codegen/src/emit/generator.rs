//! Generator state and the finisher that assembles the two output files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use indoc::formatdoc;
use tempfile::NamedTempFile;

use crate::emission::Emission;
use crate::{Config, Error, Result};

/// Generated header and implementation text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bindings {
    pub header: String,
    pub source: String,
}

impl Bindings {
    /// Write the header, then the implementation, replacing existing files.
    ///
    /// Both files are staged next to their targets and renamed into place.
    /// A failed write leaves existing outputs untouched.
    pub fn write(&self, header_path: &Path, source_path: &Path) -> io::Result<()> {
        let header = stage(header_path, &self.header)?;
        let source = stage(source_path, &self.source)?;
        header.persist(header_path).map_err(|err| err.error)?;
        source.persist(source_path).map_err(|err| err.error)?;
        Ok(())
    }
}

fn stage(path: &Path, content: &str) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    Ok(file)
}

/// C binding generator.
///
/// Owns the emission buffers for one run. Class, member and exception
/// emitters live in sibling modules as further `impl` blocks.
pub struct Generator {
    pub(super) config: Config,
    pub(super) out: Emission,
}

impl Generator {
    /// Generator with empty buffers; see [`Generator::with_prelude`].
    pub fn new(config: Config) -> Self {
        Self {
            config,
            out: Emission::new(),
        }
    }

    /// Generator whose buffers already hold the runtime support code.
    pub fn with_prelude(config: Config) -> Self {
        let mut generator = Self::new(config);
        generator.emit_prelude();
        generator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn emission(&self) -> &Emission {
        &self.out
    }

    /// Reserve a public function name, failing if another member already produced it.
    pub(super) fn claim(&mut self, symbol: &str) -> Result<()> {
        if self.out.claim_symbol(symbol) {
            Ok(())
        } else {
            Err(Error::DuplicateSymbol(symbol.to_string()))
        }
    }

    /// Stitch the buffers into the header and the implementation unit.
    pub fn finish(self) -> Bindings {
        let guard = self.config.header_guard();
        let declarations = self.out.declarations();
        let header = formatdoc! {"
            // Generated by jnibind. Do not edit.
            #ifndef {guard}
            #define {guard}

            #include <jni.h>
            #include <stddef.h>
            #include <wchar.h>

            {declarations}
            #endif /* {guard} */
        "};

        let include = self.config.header_include_str();
        let registry = self.config.registry_struct();
        let init = self.config.init_fn();
        let destroy = self.config.destroy_fn();
        let members = self.out.registry();
        let definitions = self.out.definitions().trim_end();
        let teardown = self.out.teardown_steps();
        let steps = self.out.init_steps();
        let source = formatdoc! {"
            // Generated by jnibind. Do not edit.
            {include}
            #include <stdlib.h>

            struct {registry} {{
            {members}}};

            static struct {registry} reg;

            {definitions}

            void {destroy}(JNIEnv * env) {{
            {teardown}}}

            jboolean {init}(JNIEnv * env) {{
            {steps}    return JNI_TRUE;

            fail:
                {destroy}(env);
                return JNI_FALSE;
            }}
        "};

        log::debug!(
            "finished bindings: {} header bytes, {} source bytes",
            header.len(),
            source.len()
        );
        Bindings { header, source }
    }
}
