//! Native functions and literal bindings of the default global environment.
//!
//! The table is built on demand by `default_globals`; there is no shared
//! global instance, so each interpreter owns and may mutate its own copy.

use eva_ir::Name;

use crate::errors::{division_by_zero, type_mismatch, wrong_arg_count, Arity};
use crate::{Environment, EvalError, EvalResult, NativeFunction, SharedPrintHandler, Value};

/// Value bound to `VERSION`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a fresh global environment with the literal bindings and native
/// functions. `print` writes through `print_handler`.
pub fn default_globals(print_handler: SharedPrintHandler) -> Environment {
    let literals = [
        ("null", Value::Null),
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("VERSION", Value::string(VERSION)),
    ];
    let natives = [
        NativeFunction::new("+", add),
        NativeFunction::new("*", multiply),
        NativeFunction::new("-", subtract),
        NativeFunction::new("/", divide),
        NativeFunction::new(">", |args| compare(">", args, |o| o.is_gt())),
        NativeFunction::new("<", |args| compare("<", args, |o| o.is_lt())),
        NativeFunction::new(">=", |args| compare(">=", args, |o| o.is_ge())),
        NativeFunction::new("<=", |args| compare("<=", args, |o| o.is_le())),
        NativeFunction::new("=", |args| equality("=", args, true)),
        NativeFunction::new("<>", |args| equality("<>", args, false)),
        NativeFunction::new("!=", |args| equality("!=", args, false)),
        NativeFunction::new("print", move |args| print(&print_handler, args)),
    ];

    let bindings = literals
        .into_iter()
        .map(|(name, value)| (Name::new(name), value))
        .chain(
            natives
                .into_iter()
                .map(|native| (native.name().clone(), Value::Native(native))),
        );
    Environment::with_bindings(bindings)
}

fn check_arity(name: &str, args: &[Value], arity: Arity) -> Result<(), EvalError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(wrong_arg_count(name, arity, args.len()))
    }
}

fn number(value: &Value) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch("number", value.type_name()))
}

fn numbers(name: &str, args: &[Value], arity: Arity) -> Result<Vec<f64>, EvalError> {
    check_arity(name, args, arity)?;
    args.iter().map(number).collect()
}

/// Sum of numbers, or concatenation of strings.
fn add(args: &[Value]) -> EvalResult {
    check_arity("+", args, Arity::AtLeast(1))?;
    if let Value::Str(_) = args[0] {
        let mut joined = String::new();
        for arg in args {
            match arg {
                Value::Str(s) => joined.push_str(s),
                other => return Err(type_mismatch("string", other.type_name())),
            }
        }
        return Ok(Value::string(&joined));
    }
    let operands = numbers("+", args, Arity::AtLeast(1))?;
    Ok(Value::Number(operands.iter().sum()))
}

fn multiply(args: &[Value]) -> EvalResult {
    let operands = numbers("*", args, Arity::AtLeast(1))?;
    Ok(Value::Number(operands.iter().product()))
}

/// Negation with one operand, subtraction with two.
fn subtract(args: &[Value]) -> EvalResult {
    match numbers("-", args, Arity::Between(1, 2))?.as_slice() {
        [operand] => Ok(Value::Number(-operand)),
        [left, right] => Ok(Value::Number(left - right)),
        _ => Err(wrong_arg_count("-", Arity::Between(1, 2), args.len())),
    }
}

fn divide(args: &[Value]) -> EvalResult {
    let operands = numbers("/", args, Arity::Exactly(2))?;
    let [left, right] = operands[..] else {
        return Err(wrong_arg_count("/", Arity::Exactly(2), args.len()));
    };
    if right == 0.0 {
        return Err(division_by_zero());
    }
    Ok(Value::Number(left / right))
}

/// Ordering over two numbers or two strings.
fn compare(name: &str, args: &[Value], holds: fn(std::cmp::Ordering) -> bool) -> EvalResult {
    check_arity(name, args, Arity::Exactly(2))?;
    let ordering = match (&args[0], &args[1]) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Number(_), other) => return Err(type_mismatch("number", other.type_name())),
        (Value::Str(_), other) => return Err(type_mismatch("string", other.type_name())),
        (other, _) => return Err(type_mismatch("number or string", other.type_name())),
    };
    // NaN operands are unordered: every comparison is false.
    Ok(Value::Bool(ordering.is_some_and(holds)))
}

fn equality(name: &str, args: &[Value], equal: bool) -> EvalResult {
    check_arity(name, args, Arity::Exactly(2))?;
    Ok(Value::Bool((args[0] == args[1]) == equal))
}

fn print(handler: &SharedPrintHandler, args: &[Value]) -> EvalResult {
    let line: Vec<String> = args.iter().map(ToString::to_string).collect();
    handler.println(&line.join(" "));
    Ok(Value::Null)
}
