//! `InterpreterBuilder` for creating Interpreter instances.

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};
use fwjs_ir::{SharedArena, StringInterner};

/// Builder for creating Interpreter instances.
///
/// The interner and the arena holding the program are required; the print
/// handler defaults to stdout.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        Self {
            interner,
            arena,
            print_handler: None,
        }
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
        }
    }
}
