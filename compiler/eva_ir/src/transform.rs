//! Desugaring of convenience forms into primitive forms.
//!
//! Both rewrites are pure: they read the sugar form and build a new tree,
//! with no access to environments or runtime values.

use std::rc::Rc;

use crate::{Expr, Name, SwitchClause, SwitchCondition};

/// `(def name params body)` → `(var name (lambda params body))`.
///
/// Parameters and body are shared with the `def` form, not copied.
pub fn def_to_lambda(name: &Name, params: &Rc<[Name]>, body: &Rc<Expr>) -> Expr {
    Expr::Var {
        name: name.clone(),
        value: Box::new(Expr::Lambda {
            params: Rc::clone(params),
            body: Rc::clone(body),
        }),
    }
}

/// `(switch (c1 b1) (c2 b2) ... (else bn))` → `(if c1 b1 (if c2 b2 ... bn))`.
///
/// Clauses keep their order. An `else` clause becomes the innermost
/// alternative; clauses after it could never run and are dropped. Without an
/// `else` clause the innermost `if` has no alternative, so a switch where no
/// condition holds evaluates to null. A switch consisting only of an `else`
/// clause is its block. No clauses at all yields an empty block.
pub fn switch_to_if(clauses: &[SwitchClause]) -> Expr {
    let mut alternative: Option<Box<Expr>> = None;
    for clause in clauses.iter().rev() {
        let node = match &clause.condition {
            SwitchCondition::Else => clause.body.clone(),
            SwitchCondition::When(condition) => Expr::If {
                condition: Box::new(condition.clone()),
                consequent: Box::new(clause.body.clone()),
                alternative: alternative.take(),
            },
        };
        alternative = Some(Box::new(node));
    }
    alternative.map_or_else(|| Expr::Block(Vec::new()), |expr| *expr)
}
