//! Runtime values.

use std::fmt;
use std::rc::Rc;

use eva_ir::{Expr, Name};

use crate::{Environment, EvalResult};

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Null,
    /// Function implemented by the host.
    Native(NativeFunction),
    /// User-defined function.
    Closure(Rc<Closure>),
    /// A class or an instance: both are environments.
    Object(Environment),
}

impl Value {
    /// String value.
    pub fn string(text: &str) -> Self {
        Value::Str(Rc::from(text))
    }

    /// Closure over `env`.
    pub fn closure(params: &Rc<[Name]>, body: &Rc<Expr>, env: &Environment) -> Self {
        Value::Closure(Rc::new(Closure::new(params, body, env)))
    }

    /// Truthiness used by `if`, `while` and `class` parents.
    ///
    /// Falsy: `0`, `NaN`, `""`, `null`, `false`. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::Native(_) | Value::Closure(_) | Value::Object(_) => true,
        }
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Native(_) => "native",
            Value::Closure(_) => "lambda",
            Value::Object(_) => "object",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Environment> {
        match self {
            Value::Object(env) => Some(env),
            _ => None,
        }
    }
}

/// Numbers, strings, booleans and null compare by value; functions and
/// objects by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Native(a), Value::Native(b)) => a.ptr_eq(b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Native(native) => write!(f, "<native {}>", native.name()),
            Value::Closure(closure) => write!(f, "<lambda {}>", closure.signature()),
            Value::Object(_) => f.write_str("<object>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Native(native) => write!(f, "Native({})", native.name()),
            Value::Closure(closure) => write!(f, "Closure{}", closure.signature()),
            Value::Object(env) => write!(f, "Object({env:?})"),
        }
    }
}

/// A host function with a name for diagnostics.
#[derive(Clone)]
pub struct NativeFunction {
    name: Name,
    func: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new(name: &str, func: impl Fn(&[Value]) -> EvalResult + 'static) -> Self {
        NativeFunction {
            name: Name::new(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

/// A lambda paired with the environment it was created in.
///
/// `env` is fixed at creation. Each call evaluates `body` in a fresh
/// activation environment whose parent is `env`, never the caller's scope.
pub struct Closure {
    pub params: Rc<[Name]>,
    pub body: Rc<Expr>,
    pub env: Environment,
}

impl Closure {
    pub fn new(params: &Rc<[Name]>, body: &Rc<Expr>, env: &Environment) -> Self {
        Closure {
            params: Rc::clone(params),
            body: Rc::clone(body),
            env: env.clone(),
        }
    }

    /// Parameter list as written, e.g. `(x y)`.
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(Name::as_str).collect();
        format!("({})", params.join(" "))
    }
}
