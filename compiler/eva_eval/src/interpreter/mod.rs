//! Tree-walking interpreter.
//!
//! `eval_in` is a single exhaustive match over `Expr`. Classification
//! already happened when the tree was lowered, so the precedence between
//! literals, special forms, symbols and calls is fixed by `Expr::lower`.

mod builder;
mod function_call;
mod objects;

use std::rc::Rc;

use eva_ir::{transform, Expr, SetTarget, Sexp};

use crate::errors::{type_mismatch, unimplemented_form};
use crate::{Environment, EvalError, EvalResult, SharedPrintHandler, Value};

pub use builder::InterpreterBuilder;

/// Evaluator for Eva expressions.
///
/// Owns its global environment, so separate interpreters never observe
/// each other's definitions.
pub struct Interpreter {
    /// Scope used when no environment is given.
    global: Environment,
    /// Destination of the default `print` native.
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with the default globals, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The global environment.
    pub fn global(&self) -> &Environment {
        &self.global
    }

    /// Evaluate `expr` in the global environment.
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        self.eval_in(expr, &self.global)
    }

    /// Lower a raw tree and evaluate it in the global environment.
    pub fn eval_sexp(&self, sexp: &Sexp) -> EvalResult {
        self.eval(&Expr::lower(sexp))
    }

    /// Evaluate a program: each expression in order, directly in the global
    /// environment, so top-level definitions persist. Returns the last value,
    /// or null for an empty program.
    pub fn eval_global(&self, program: &[Expr]) -> EvalResult {
        self.eval_block(program, &self.global)
    }

    /// Evaluate `expr` in `env`.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn eval_in(&self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(Rc::clone(s))),
            Expr::Block(body) => self.eval_block(body, &env.child()),
            Expr::Var { name, value } => {
                let value = self.eval_in(value, env)?;
                Ok(env.define(name.clone(), value))
            }
            Expr::Set { target, value } => self.eval_set(target, value, env),
            Expr::If {
                condition,
                consequent,
                alternative,
            } => {
                if self.eval_in(condition, env)?.is_truthy() {
                    self.eval_in(consequent, env)
                } else if let Some(alternative) = alternative {
                    self.eval_in(alternative, env)
                } else {
                    Ok(Value::Null)
                }
            }
            Expr::Switch(clauses) => self.eval_in(&transform::switch_to_if(clauses), env),
            Expr::While { condition, body } => {
                let mut result = Value::Null;
                while self.eval_in(condition, env)?.is_truthy() {
                    result = self.eval_in(body, env)?;
                }
                Ok(result)
            }
            Expr::Def { name, params, body } => {
                self.eval_in(&transform::def_to_lambda(name, params, body), env)
            }
            Expr::Lambda { params, body } => Ok(Value::closure(params, body, env)),
            Expr::Class { name, parent, body } => {
                self.eval_class(name, parent.as_deref(), body, env)
            }
            Expr::Super(class) => self.eval_super(class, env),
            Expr::New { class, args } => self.eval_new(class, args, env),
            Expr::Prop { object, name } => self.eval_object(object, env)?.lookup(name.as_str()),
            Expr::Symbol(name) => env.lookup(name.as_str()),
            Expr::Call { callee, args } => {
                let callee = self.eval_in(callee, env)?;
                let args = self.eval_args(args, env)?;
                self.apply(&callee, &args)
            }
            Expr::Unimplemented(form) => Err(unimplemented_form(form)),
        }
    }

    /// Evaluate each expression in `env` itself; no new scope is created.
    fn eval_block(&self, body: &[Expr], env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for expr in body {
            result = self.eval_in(expr, env)?;
        }
        Ok(result)
    }

    /// Evaluate a function or class body in `env`. A `begin` body runs its
    /// statements directly in `env` rather than in a nested block scope.
    fn eval_body(&self, body: &Expr, env: &Environment) -> EvalResult {
        match body {
            Expr::Block(statements) => self.eval_block(statements, env),
            other => self.eval_in(other, env),
        }
    }

    /// Evaluate arguments left to right.
    fn eval_args(&self, args: &[Expr], env: &Environment) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval_in(arg, env)).collect()
    }

    fn eval_set(&self, target: &SetTarget, value: &Expr, env: &Environment) -> EvalResult {
        match target {
            SetTarget::Variable(name) => {
                let value = self.eval_in(value, env)?;
                env.assign(name.as_str(), value)
            }
            // Fields are created on first assignment: define, not assign.
            SetTarget::Property { object, name } => {
                let object = self.eval_object(object, env)?;
                let value = self.eval_in(value, env)?;
                Ok(object.define(name.clone(), value))
            }
        }
    }

    /// Evaluate `expr` and require an object (class or instance).
    fn eval_object(&self, expr: &Expr, env: &Environment) -> Result<Environment, EvalError> {
        match self.eval_in(expr, env)? {
            Value::Object(object) => Ok(object),
            other => Err(type_mismatch("object", other.type_name())),
        }
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Discard output captured by a buffer print handler.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
