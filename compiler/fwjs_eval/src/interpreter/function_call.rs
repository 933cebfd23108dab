//! Function application.

use fwjs_ir::{ExprId, ExprRange, SharedArena};

use super::Interpreter;
use crate::errors::{arity_mismatch, duplicate_declaration, not_callable, EvalResult};
use crate::{ClosureValue, Environment, Heap, Value};

impl<'a> Interpreter<'a> {
    /// Evaluate a call expression.
    ///
    /// The callee is checked before any argument is evaluated. Arguments
    /// are evaluated left to right in the caller's frame.
    pub(super) fn eval_call_expr(
        &mut self,
        func: ExprId,
        args: ExprRange,
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval(func, env)?;
        let Value::Closure(closure) = &callee else {
            return Err(not_callable(callee.type_name()));
        };
        let arena = self.arena.clone();
        let arg_values = arena
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        self.apply(closure, arg_values)
    }

    /// Apply a function value to already-evaluated arguments.
    ///
    /// Same rules as a call expression; fails if `callee` is not a closure.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Closure(closure) => self.apply(closure, args),
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run a closure body in a fresh frame whose outer frame is the one the
    /// closure captured, not the caller's.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len(), depth = self.call_depth))]
    fn apply(&mut self, closure: &Heap<ClosureValue>, args: Vec<Value>) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(arity_mismatch(closure.arity(), args.len()));
        }

        let local = closure.env.child();
        for (&param, arg) in closure.params.iter().zip(args) {
            local
                .declare(param, arg)
                .map_err(|_| duplicate_declaration(self.interner.lookup(param)))?;
        }

        let mut callee = self.create_function_interpreter(closure.arena.clone());
        callee
            .eval(closure.body, &local)
            .map_err(|err| {
                err.with_note(format!("in call to {}", closure.signature(self.interner)))
            })
    }

    /// Child interpreter for a callee whose body lives in `arena`.
    fn create_function_interpreter(&self, arena: SharedArena) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena,
            print_handler: self.print_handler.clone(),
            call_depth: self.call_depth.saturating_add(1),
        }
    }
}
