//! Eva IR - Expression representation for the Eva evaluator.
//!
//! This crate provides:
//! - `Sexp`: the structured input tree handed to the evaluator by a reader
//! - `Name`: cheaply clonable identifiers used as environment keys
//! - `Expr`: the closed, classified form of a `Sexp`, built once by `Expr::lower`
//! - `transform`: pure desugaring of `def` and `switch` into primitive forms
//!
//! # Design
//!
//! Classification happens once, when the tree is lowered. The evaluator then
//! dispatches with a single exhaustive `match` over `Expr` instead of probing
//! the leading token of every compound form at run time.
//!
//! Nothing in this crate knows about environments or runtime values, so the
//! transformer can be used and tested without an evaluator.

mod expr;
mod name;
mod sexp;
pub mod transform;

pub use expr::{Expr, SetTarget, SpecialForm, SwitchClause, SwitchCondition, ELSE};
pub use name::Name;
pub use sexp::{is_symbol, string_literal, Sexp, QUOTE};
