//! Class, instance and `super` evaluation.
//!
//! Classes and instances are plain environments; these forms only decide
//! which environment becomes whose parent.

use eva_ir::{Expr, Name};

use super::Interpreter;
use crate::errors::type_mismatch;
use crate::{Environment, EvalResult, Value};

/// Name of the method `new` invokes on a fresh instance.
const CONSTRUCTOR: &str = "constructor";

impl Interpreter {
    /// `(class Name Parent body)`
    ///
    /// The class environment's parent is the evaluated `Parent`, or the
    /// current scope when `Parent` is absent or falsy (e.g. `null`). The body
    /// runs directly in the class environment, so its `var` and `def` forms
    /// install fields and methods there.
    pub(super) fn eval_class(
        &self,
        name: &Name,
        parent: Option<&Expr>,
        body: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let parent_env = match parent {
            Some(parent) => match self.eval_in(parent, env)? {
                Value::Object(parent_env) => parent_env,
                value if !value.is_truthy() => env.clone(),
                other => return Err(type_mismatch("class", other.type_name())),
            },
            None => env.clone(),
        };
        let class_env = parent_env.child();
        self.eval_body(body, &class_env)?;
        tracing::debug!(class = %name, "declared class");
        Ok(env.define(name.clone(), Value::Object(class_env)))
    }

    /// `(super Class)`: the parent environment of a class, or null at the
    /// root.
    pub(super) fn eval_super(&self, class: &Expr, env: &Environment) -> EvalResult {
        let class_env = self.eval_object(class, env)?;
        Ok(class_env.parent().map_or(Value::Null, Value::Object))
    }

    /// `(new Class args*)`
    ///
    /// Creates the instance environment, evaluates the arguments in the
    /// calling scope, then calls `constructor` (found through the class
    /// chain) with the instance prepended as the first argument. The
    /// constructor's own result is discarded.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_new(&self, class: &Expr, args: &[Expr], env: &Environment) -> EvalResult {
        let class_env = self.eval_object(class, env)?;
        let instance = class_env.child();
        let args = self.eval_args(args, env)?;
        let constructor = class_env.lookup(CONSTRUCTOR)?;

        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(Value::Object(instance.clone()));
        call_args.extend(args);
        self.apply(&constructor, &call_args)?;

        Ok(Value::Object(instance))
    }
}
