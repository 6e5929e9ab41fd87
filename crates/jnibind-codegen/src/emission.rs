//! Output streams accumulated during one generation run.
//!
//! Generators append text blocks to five streams which the finisher stitches
//! into the header and the implementation unit:
//! - declarations: public prototypes for the header
//! - registry: members of the handle registry struct
//! - init: steps of `<prefix>_init`
//! - teardown: steps of `<prefix>_destroy`
//! - definitions: function bodies
//!
//! Every appended block ends with a newline. Public function names are
//! tracked so that a name cannot be emitted twice.

use std::collections::BTreeSet;

/// Emission buffers plus the set of classes already registered.
#[derive(Clone, Debug, Default)]
pub struct Emission {
    declarations: String,
    registry: String,
    init: String,
    teardown: String,
    definitions: String,
    classes: BTreeSet<String>,
    symbols: BTreeSet<String>,
}

impl Emission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, text: &str) {
        append(&mut self.declarations, text);
    }

    pub fn member(&mut self, text: &str) {
        append(&mut self.registry, text);
    }

    pub fn init(&mut self, text: &str) {
        append(&mut self.init, text);
    }

    pub fn teardown(&mut self, text: &str) {
        append(&mut self.teardown, text);
    }

    pub fn define(&mut self, text: &str) {
        append(&mut self.definitions, text);
    }

    /// Record `class` as registered. Returns `false` if it already was.
    pub fn register_class(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_string())
    }

    /// Record a public function name. Returns `false` if it is already taken.
    pub fn claim_symbol(&mut self, symbol: &str) -> bool {
        self.symbols.insert(symbol.to_string())
    }

    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn init_steps(&self) -> &str {
        &self.init
    }

    pub fn teardown_steps(&self) -> &str {
        &self.teardown
    }

    pub fn definitions(&self) -> &str {
        &self.definitions
    }
}

fn append(buf: &mut String, text: &str) {
    buf.push_str(text);
    if !text.ends_with('\n') {
        buf.push('\n');
    }
}
