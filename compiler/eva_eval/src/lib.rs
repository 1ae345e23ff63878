//! Eva Eval - Tree-walking evaluator for the Eva language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a shared, parent-chained scope used for blocks, function
//!   activations, classes and instances alike
//! - `Interpreter`: a single exhaustive dispatch over `eva_ir::Expr`
//! - `eva_ir::transform`: desugaring of `def` and `switch` before evaluation
//! - `builtins::default_globals`: the native function table, built per
//!   interpreter rather than shared
//!
//! # Object model
//!
//! There is no separate method table. A class is an environment whose parent
//! is its superclass; an instance is an environment whose parent is its
//! class. `(prop obj name)` is an ordinary chain lookup on `obj`, so
//! inherited methods resolve without any extra mechanism.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod print_handler;
mod value;

#[cfg(test)]
mod test_helpers;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Closure, NativeFn, NativeFunction, Value};
