//! Classified expressions.
//!
//! `Expr::lower` turns a `Sexp` into a closed set of variants once, in the
//! fixed precedence order the evaluator relies on:
//!
//! 1. numeric literal
//! 2. quoted string literal
//! 3. special forms, selected by the leading tag (`begin`, `var`, `set`,
//!    `if`, `switch`, `while`, `def`, `lambda`, `class`, `super`, `new`,
//!    `prop`)
//! 4. symbol reference
//! 5. any other compound form is a call
//!
//! Anything else, including a special form with malformed operands, lowers
//! to `Expr::Unimplemented` and fails only when evaluated.

use std::rc::Rc;

use crate::sexp::{is_symbol, string_literal};
use crate::{Name, Sexp};

/// Condition marker for the catch-all clause of a `switch`.
pub const ELSE: &str = "else";

/// Leading tags that select a special form rather than a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialForm {
    Begin,
    Var,
    Set,
    If,
    Switch,
    While,
    Def,
    Lambda,
    Class,
    Super,
    New,
    Prop,
}

impl SpecialForm {
    /// Resolve a leading tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "begin" => SpecialForm::Begin,
            "var" => SpecialForm::Var,
            "set" => SpecialForm::Set,
            "if" => SpecialForm::If,
            "switch" => SpecialForm::Switch,
            "while" => SpecialForm::While,
            "def" => SpecialForm::Def,
            "lambda" => SpecialForm::Lambda,
            "class" => SpecialForm::Class,
            "super" => SpecialForm::Super,
            "new" => SpecialForm::New,
            "prop" => SpecialForm::Prop,
            _ => return None,
        })
    }

    /// The tag as written in source.
    pub fn as_tag(self) -> &'static str {
        match self {
            SpecialForm::Begin => "begin",
            SpecialForm::Var => "var",
            SpecialForm::Set => "set",
            SpecialForm::If => "if",
            SpecialForm::Switch => "switch",
            SpecialForm::While => "while",
            SpecialForm::Def => "def",
            SpecialForm::Lambda => "lambda",
            SpecialForm::Class => "class",
            SpecialForm::Super => "super",
            SpecialForm::New => "new",
            SpecialForm::Prop => "prop",
        }
    }
}

/// A classified expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// String literal, delimiters already stripped.
    Str(Rc<str>),
    /// `(begin e*)`: evaluated in a fresh child scope.
    Block(Vec<Expr>),
    /// `(var name value)`
    Var { name: Name, value: Box<Expr> },
    /// `(set name value)` or `(set (prop object name) value)`
    Set { target: SetTarget, value: Box<Expr> },
    /// `(if condition consequent alternative?)`
    If {
        condition: Box<Expr>,
        consequent: Box<Expr>,
        /// Absent alternative evaluates to null.
        alternative: Option<Box<Expr>>,
    },
    /// `(switch (condition block)+)`, desugared to `If` before evaluation.
    Switch(Vec<SwitchClause>),
    /// `(while condition body)`
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
    /// `(def name (params) body)`, desugared to `Var` + `Lambda`.
    Def {
        name: Name,
        params: Rc<[Name]>,
        body: Rc<Expr>,
    },
    /// `(lambda (params) body)`
    Lambda { params: Rc<[Name]>, body: Rc<Expr> },
    /// `(class Name Parent? body)`
    Class {
        name: Name,
        parent: Option<Box<Expr>>,
        body: Box<Expr>,
    },
    /// `(super Class)`
    Super(Box<Expr>),
    /// `(new Class args*)`
    New { class: Box<Expr>, args: Vec<Expr> },
    /// `(prop object name)`
    Prop { object: Box<Expr>, name: Name },
    /// Variable reference.
    Symbol(Name),
    /// `(callee args*)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// A shape no rule accepts; evaluating it fails.
    Unimplemented(Sexp),
}

/// Target of a `set` form.
#[derive(Clone, Debug, PartialEq)]
pub enum SetTarget {
    /// Assign through the scope chain.
    Variable(Name),
    /// Create or update a field directly on an object.
    Property { object: Box<Expr>, name: Name },
}

/// One `(condition block)` clause of a `switch`.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchClause {
    pub condition: SwitchCondition,
    pub body: Expr,
}

/// Condition of a switch clause.
#[derive(Clone, Debug, PartialEq)]
pub enum SwitchCondition {
    /// The `else` marker.
    Else,
    /// Any other condition expression.
    When(Expr),
}

impl Expr {
    /// Classify a raw tree.
    pub fn lower(sexp: &Sexp) -> Expr {
        match sexp {
            Sexp::Number(n) => Expr::Number(*n),
            Sexp::Atom(text) => {
                if let Some(s) = string_literal(text) {
                    Expr::Str(Rc::from(s))
                } else if is_symbol(text) {
                    Expr::Symbol(Name::new(text))
                } else {
                    Expr::Unimplemented(sexp.clone())
                }
            }
            Sexp::List(items) => lower_compound(sexp, items),
        }
    }

    /// Symbol reference.
    pub fn symbol(name: &str) -> Expr {
        Expr::Symbol(Name::new(name))
    }
}

impl From<&Sexp> for Expr {
    fn from(sexp: &Sexp) -> Self {
        Expr::lower(sexp)
    }
}

fn lower_compound(sexp: &Sexp, items: &[Sexp]) -> Expr {
    let Some((head, operands)) = items.split_first() else {
        return Expr::Unimplemented(sexp.clone());
    };
    let Some(form) = head.as_symbol().and_then(SpecialForm::from_tag) else {
        return Expr::Call {
            callee: Box::new(Expr::lower(head)),
            args: lower_all(operands),
        };
    };
    let lowered = match form {
        SpecialForm::Begin => Some(Expr::Block(lower_all(operands))),
        SpecialForm::Var => lower_var(operands),
        SpecialForm::Set => lower_set(operands),
        SpecialForm::If => lower_if(operands),
        SpecialForm::Switch => lower_switch(operands),
        SpecialForm::While => lower_while(operands),
        SpecialForm::Def => lower_def(operands),
        SpecialForm::Lambda => lower_lambda(operands),
        SpecialForm::Class => lower_class(operands),
        SpecialForm::Super => lower_super(operands),
        SpecialForm::New => lower_new(operands),
        SpecialForm::Prop => lower_prop(operands),
    };
    lowered.unwrap_or_else(|| Expr::Unimplemented(sexp.clone()))
}

fn lower_all(items: &[Sexp]) -> Vec<Expr> {
    items.iter().map(Expr::lower).collect()
}

fn lower_boxed(sexp: &Sexp) -> Box<Expr> {
    Box::new(Expr::lower(sexp))
}

fn name_of(sexp: &Sexp) -> Option<Name> {
    sexp.as_symbol().map(Name::new)
}

fn params_of(sexp: &Sexp) -> Option<Rc<[Name]>> {
    let Sexp::List(items) = sexp else {
        return None;
    };
    items.iter().map(name_of).collect()
}

fn lower_var(operands: &[Sexp]) -> Option<Expr> {
    let [name, value] = operands else {
        return None;
    };
    Some(Expr::Var {
        name: name_of(name)?,
        value: lower_boxed(value),
    })
}

fn lower_set(operands: &[Sexp]) -> Option<Expr> {
    let [target, value] = operands else {
        return None;
    };
    let target = if let Some(name) = name_of(target) {
        SetTarget::Variable(name)
    } else {
        let Expr::Prop { object, name } = Expr::lower(target) else {
            return None;
        };
        SetTarget::Property { object, name }
    };
    Some(Expr::Set {
        target,
        value: lower_boxed(value),
    })
}

fn lower_if(operands: &[Sexp]) -> Option<Expr> {
    match operands {
        [condition, consequent] => Some(Expr::If {
            condition: lower_boxed(condition),
            consequent: lower_boxed(consequent),
            alternative: None,
        }),
        [condition, consequent, alternative] => Some(Expr::If {
            condition: lower_boxed(condition),
            consequent: lower_boxed(consequent),
            alternative: Some(lower_boxed(alternative)),
        }),
        _ => None,
    }
}

fn lower_switch(operands: &[Sexp]) -> Option<Expr> {
    if operands.is_empty() {
        return None;
    }
    let last = operands.len() - 1;
    let mut clauses = Vec::with_capacity(operands.len());
    for (idx, clause) in operands.iter().enumerate() {
        let Sexp::List(parts) = clause else {
            return None;
        };
        let [condition, body] = parts.as_slice() else {
            return None;
        };
        let condition = if condition.is_symbol_named(ELSE) {
            // `else` is only meaningful as the final clause.
            if idx != last {
                return None;
            }
            SwitchCondition::Else
        } else {
            SwitchCondition::When(Expr::lower(condition))
        };
        clauses.push(SwitchClause {
            condition,
            body: Expr::lower(body),
        });
    }
    Some(Expr::Switch(clauses))
}

fn lower_while(operands: &[Sexp]) -> Option<Expr> {
    let [condition, body] = operands else {
        return None;
    };
    Some(Expr::While {
        condition: lower_boxed(condition),
        body: lower_boxed(body),
    })
}

fn lower_def(operands: &[Sexp]) -> Option<Expr> {
    let [name, params, body] = operands else {
        return None;
    };
    Some(Expr::Def {
        name: name_of(name)?,
        params: params_of(params)?,
        body: Rc::new(Expr::lower(body)),
    })
}

fn lower_lambda(operands: &[Sexp]) -> Option<Expr> {
    let [params, body] = operands else {
        return None;
    };
    Some(Expr::Lambda {
        params: params_of(params)?,
        body: Rc::new(Expr::lower(body)),
    })
}

fn lower_class(operands: &[Sexp]) -> Option<Expr> {
    let (name, parent, body) = match operands {
        [name, body] => (name, None, body),
        [name, parent, body] => (name, Some(lower_boxed(parent)), body),
        _ => return None,
    };
    Some(Expr::Class {
        name: name_of(name)?,
        parent,
        body: lower_boxed(body),
    })
}

fn lower_super(operands: &[Sexp]) -> Option<Expr> {
    let [class] = operands else {
        return None;
    };
    Some(Expr::Super(lower_boxed(class)))
}

fn lower_new(operands: &[Sexp]) -> Option<Expr> {
    let (class, args) = operands.split_first()?;
    Some(Expr::New {
        class: lower_boxed(class),
        args: lower_all(args),
    })
}

fn lower_prop(operands: &[Sexp]) -> Option<Expr> {
    let [object, name] = operands else {
        return None;
    };
    Some(Expr::Prop {
        object: lower_boxed(object),
        name: name_of(name)?,
    })
}

#[cfg(test)]
mod tests;
