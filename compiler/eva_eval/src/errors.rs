//! Evaluation errors.
//!
//! Every failure the evaluator or a native function can produce is an
//! `EvalError`. Construct them through the factory functions in this module
//! so the structured `kind` and the rendered `message` always agree.
//!
//! Two kinds belong to the evaluator itself:
//! - `UndefinedVariable`: a name was looked up or assigned but no
//!   environment in the chain owns it
//! - `UnimplementedForm`: an expression matched no evaluation rule
//!
//! The rest are runtime type errors raised by natives and by operations
//! applied to values of the wrong shape.

use std::fmt;

use eva_ir::Sexp;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Number of arguments a native function accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    /// Inclusive range.
    Between(usize, usize),
}

impl Arity {
    /// Whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
        match *self {
            Arity::Exactly(n) => write!(f, "{n} {}", plural(n)),
            Arity::AtLeast(n) => write!(f, "at least {n} {}", plural(n)),
            Arity::Between(lo, hi) => write!(f, "{lo} or {hi} arguments"),
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Evaluator
    UndefinedVariable {
        name: String,
    },
    UnimplementedForm {
        form: Sexp,
    },

    // Runtime types
    TypeMismatch {
        expected: String,
        got: String,
    },
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },
    DivisionByZero,
    NotCallable {
        type_name: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Variable \"{name}\" is not defined."),
            Self::UnimplementedForm { form } => write!(f, "Unimplemented: {form}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "{name} expects {expected}, got {got}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, rendered from `kind`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Whether this is one of the two evaluator failures rather than a
    /// runtime type error.
    pub fn is_evaluator_error(&self) -> bool {
        matches!(
            self.kind,
            EvalErrorKind::UndefinedVariable { .. } | EvalErrorKind::UnimplementedForm { .. }
        )
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// No environment in the chain owns `name`.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// The expression matched no evaluation rule.
#[cold]
pub fn unimplemented_form(form: &Sexp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnimplementedForm { form: form.clone() })
}

/// A value of the wrong type was supplied.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// A native function received the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Division with a zero divisor.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Call of a value that is neither a native nor a closure.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}
