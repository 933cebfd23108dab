#![deny(clippy::arithmetic_side_effects)]
//! FWJS Eval - Tree-walking evaluator for Featherweight JavaScript.
//!
//! Evaluates expression trees built with `fwjs_ir::ExprBuilder`.
//!
//! # Architecture
//!
//! - `Value`: bools, ints, null and closures; closures live behind `Heap`
//! - `Environment`: shared, mutable scope frames linked to their outer frame
//! - `evaluate_binary`: enum-based binary operator dispatch
//! - `Interpreter`: one evaluation rule per `ExprKind`, built with
//!   `InterpreterBuilder`
//! - `PrintHandlerImpl`: where `print` output goes
//!
//! # Example
//!
//! ```
//! use fwjs_eval::{buffer_handler, Environment, InterpreterBuilder};
//! use fwjs_ir::{BinaryOp, ExprBuilder, StringInterner};
//!
//! let interner = StringInterner::new();
//! let mut b = ExprBuilder::new(&interner);
//! let two = b.int(2);
//! let three = b.int(3);
//! let sum = b.binary(BinaryOp::Add, two, three);
//! let program = b.print(sum);
//! let arena = b.finish();
//!
//! let mut interpreter = InterpreterBuilder::new(&interner, arena)
//!     .print_handler(buffer_handler())
//!     .build();
//! let result = interpreter.evaluate(program, &Environment::new_global());
//! assert_eq!(result, Ok(fwjs_eval::Value::int(5)));
//! assert_eq!(interpreter.get_print_output(), "5\n");
//! ```

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod value;

use std::sync::Once;

pub use environment::{DeclareError, Environment, LocalScope, Scope};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{ClosureValue, Heap, Value, ValueDisplay};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Only installs a subscriber when `RUST_LOG` is set. Calling it more than
/// once is harmless.
///
/// ```bash
/// RUST_LOG=fwjs_eval=debug cargo test -p fwjs_eval
/// RUST_LOG=fwjs_eval=trace cargo test -p fwjs_eval -- closures
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
