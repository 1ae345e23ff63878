//! Function call evaluation methods for the Interpreter.

use super::Interpreter;
use crate::errors::not_callable;
use crate::{Closure, EvalResult, Value};

impl Interpreter {
    /// Call a native function or closure with already evaluated arguments.
    pub fn apply(&self, callee: &Value, args: &[Value]) -> EvalResult {
        match callee {
            Value::Native(native) => native.call(args),
            Value::Closure(closure) => self.call_closure(closure, args),
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run `closure` in a fresh activation environment chained to the
    /// environment it captured.
    ///
    /// Arguments bind to parameters in order. Extra arguments are ignored;
    /// parameters without an argument stay unbound, so referring to one
    /// fails with `UndefinedVariable` (or finds an outer binding of the same
    /// name in the captured chain).
    #[tracing::instrument(level = "debug", skip_all)]
    fn call_closure(&self, closure: &Closure, args: &[Value]) -> EvalResult {
        if args.len() != closure.params.len() {
            tracing::debug!(
                signature = %closure.signature(),
                expected = closure.params.len(),
                got = args.len(),
                "argument count differs from parameter count"
            );
        }
        let activation = closure.env.child();
        for (param, arg) in closure.params.iter().zip(args) {
            activation.define(param.clone(), arg.clone());
        }
        self.eval_body(&closure.body, &activation)
    }
}
