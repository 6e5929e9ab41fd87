//! Configuration for C emission.

/// Configuration for C emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prefix of the lifecycle symbols and the registry struct
    pub(crate) prefix: String,
    /// Include line at the top of the implementation unit
    pub(crate) header_include: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "jnibind".to_string(),
            header_include: "#include \"jnibind.h\"".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol prefix (`<prefix>_init`, `<prefix>_destroy`, `struct <prefix>_registry`).
    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefix = value.into();
        self
    }

    /// Set the include line emitted at the top of the implementation unit.
    pub fn header_include(mut self, value: impl Into<String>) -> Self {
        self.header_include = value.into();
        self
    }

    /// Use `#include "<file>"` as the implementation's include line.
    pub fn include_header_file(self, file: &str) -> Self {
        self.header_include(format!("#include \"{file}\""))
    }

    pub fn prefix_str(&self) -> &str {
        &self.prefix
    }

    pub fn header_include_str(&self) -> &str {
        &self.header_include
    }

    pub(crate) fn init_fn(&self) -> String {
        format!("{}_init", self.prefix)
    }

    pub(crate) fn destroy_fn(&self) -> String {
        format!("{}_destroy", self.prefix)
    }

    pub(crate) fn registry_struct(&self) -> String {
        format!("{}_registry", self.prefix)
    }

    pub(crate) fn header_guard(&self) -> String {
        let mut guard: String = self
            .prefix
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        guard.push_str("_H");
        guard
    }
}
