//! Tree-walking interpreter.
//!
//! `eval` dispatches on `ExprKind`, one rule per node kind. Operands and
//! arguments are evaluated left to right and nothing short-circuits.
//! Variable state lives in the `Environment` chain passed down the
//! recursion; the interpreter itself only holds the tree and the output
//! channel.
//!
//! # Arena Threading
//!
//! A closure body is an `ExprId` into the arena the closure was built in,
//! which is not necessarily the arena of the caller. Calls therefore run on
//! a child interpreter created with `create_function_interpreter()` from the
//! closure's own `SharedArena`.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use fwjs_ir::{ExprId, ExprKind, Name, NameRange, SharedArena, StringInterner};

use crate::errors::{duplicate_declaration, non_bool_condition, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, SharedPrintHandler, Value};

/// Evaluates expression trees against an environment.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    print_handler: SharedPrintHandler,
    /// Number of enclosing function applications.
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Shorthand for `InterpreterBuilder::new(interner, arena).build()`.
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate a whole program.
    ///
    /// `env` is normally a fresh `Environment::new_global()`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, program: ExprId, env: &Environment) -> EvalResult {
        self.eval(program, env)
    }

    /// Evaluate one expression of this interpreter's arena.
    pub fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        match self.arena.get_expr(id) {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Ident(name) => Ok(env.resolve(name).unwrap_or(Value::Null)),
            ExprKind::Print(inner) => self.eval_print(inner, env),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch, env),
            ExprKind::While { cond, body } => self.eval_while(cond, body, env),
            ExprKind::Seq { first, second } => {
                self.eval(first, env)?;
                self.eval(second, env)
            }
            ExprKind::VarDecl { name, init } => self.eval_var_decl(name, init, env),
            ExprKind::Assign { name, value } => self.eval_assign(name, value, env),
            ExprKind::Function { params, body } => Ok(self.make_closure(params, body, env)),
            ExprKind::Call { func, args } => self.eval_call_expr(func, args, env),
        }
    }

    fn eval_print(&mut self, inner: ExprId, env: &Environment) -> EvalResult {
        let value = self.eval(inner, env)?;
        let line = value.display(self.interner).to_string();
        self.print_handler.println(&line);
        Ok(value)
    }

    /// Evaluate a loop or branch condition, which must be a bool.
    fn eval_condition(
        &mut self,
        cond: ExprId,
        env: &Environment,
        construct: &'static str,
    ) -> Result<bool, EvalError> {
        let value = self.eval(cond, env)?;
        value
            .as_bool()
            .ok_or_else(|| non_bool_condition(construct, value.type_name()))
    }

    fn eval_if(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
        env: &Environment,
    ) -> EvalResult {
        if self.eval_condition(cond, env, "if")? {
            self.eval(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch, env)
        } else {
            Ok(Value::Null)
        }
    }

    /// The body runs in `env` itself; a loop opens no frame. The result is
    /// the last body value, or null when the body never ran.
    fn eval_while(&mut self, cond: ExprId, body: ExprId, env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        let mut iterations: u64 = 0;
        while self.eval_condition(cond, env, "while")? {
            last = self.eval(body, env)?;
            iterations = iterations.saturating_add(1);
        }
        tracing::trace!(iterations, "loop finished");
        Ok(last)
    }

    fn eval_var_decl(&mut self, name: Name, init: ExprId, env: &Environment) -> EvalResult {
        let value = self.eval(init, env)?;
        env.declare(name, value.clone())
            .map_err(|_| duplicate_declaration(self.interner.lookup(name)))?;
        tracing::trace!(name = self.interner.lookup(name), "declared");
        Ok(value)
    }

    /// Assignment to a name no frame binds declares it in the global frame,
    /// whatever frame the assignment runs in.
    fn eval_assign(&mut self, name: Name, value: ExprId, env: &Environment) -> EvalResult {
        let value = self.eval(value, env)?;
        if env.resolve(name).is_some() {
            env.update(name, value.clone());
        } else {
            tracing::debug!(
                name = self.interner.lookup(name),
                "assignment to undeclared name creates a global"
            );
            env.global()
                .declare(name, value.clone())
                .map_err(|_| duplicate_declaration(self.interner.lookup(name)))?;
        }
        Ok(value)
    }

    fn make_closure(&self, params: NameRange, body: ExprId, env: &Environment) -> Value {
        let params = self.arena.get_name_list(params).to_vec();
        Value::closure(params, body, self.arena.clone(), env.clone())
    }

    /// Get all print output (for testing with buffer handler).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }
}

#[cfg(test)]
mod tests;
