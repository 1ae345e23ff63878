use super::*;
use pretty_assertions::assert_eq;

fn sym(text: &str) -> Sexp {
    Sexp::atom(text)
}

fn num(n: f64) -> Sexp {
    Sexp::number(n)
}

fn list<const N: usize>(items: [Sexp; N]) -> Sexp {
    Sexp::list(items)
}

fn names(items: &[&str]) -> Rc<[Name]> {
    items.iter().map(|s| Name::new(s)).collect()
}

#[test]
fn atoms_lower_to_literals_and_symbols() {
    assert_eq!(Expr::lower(&num(42.0)), Expr::Number(42.0));
    assert_eq!(Expr::lower(&Sexp::string("hello")), Expr::Str(Rc::from("hello")));
    assert_eq!(Expr::lower(&sym("x")), Expr::symbol("x"));
    assert_eq!(Expr::lower(&sym("+")), Expr::symbol("+"));
}

#[test]
fn atom_that_is_neither_string_nor_symbol_is_unimplemented() {
    let bad = sym("not a symbol");
    assert_eq!(Expr::lower(&bad), Expr::Unimplemented(bad.clone()));
}

#[test]
fn empty_list_is_unimplemented() {
    let empty = Sexp::list([]);
    assert_eq!(Expr::lower(&empty), Expr::Unimplemented(empty.clone()));
}

#[test]
fn bare_tag_is_a_symbol_reference() {
    assert_eq!(Expr::lower(&sym("begin")), Expr::symbol("begin"));
}

#[test]
fn tagged_list_selects_special_form() {
    let sexp = list([sym("var"), sym("x"), num(10.0)]);
    assert_eq!(
        Expr::lower(&sexp),
        Expr::Var {
            name: Name::new("x"),
            value: Box::new(Expr::Number(10.0)),
        }
    );
}

#[test]
fn untagged_list_is_a_call() {
    let sexp = list([sym("+"), num(1.0), num(5.0)]);
    assert_eq!(
        Expr::lower(&sexp),
        Expr::Call {
            callee: Box::new(Expr::symbol("+")),
            args: vec![Expr::Number(1.0), Expr::Number(5.0)],
        }
    );
}

#[test]
fn call_head_may_be_compound() {
    let sexp = list([list([sym("make")]), num(1.0)]);
    let Expr::Call { callee, args } = Expr::lower(&sexp) else {
        panic!("expected a call");
    };
    assert_eq!(
        *callee,
        Expr::Call {
            callee: Box::new(Expr::symbol("make")),
            args: vec![],
        }
    );
    assert_eq!(args, vec![Expr::Number(1.0)]);
}

#[test]
fn set_on_symbol_targets_variable() {
    let sexp = list([sym("set"), sym("x"), num(1.0)]);
    assert_eq!(
        Expr::lower(&sexp),
        Expr::Set {
            target: SetTarget::Variable(Name::new("x")),
            value: Box::new(Expr::Number(1.0)),
        }
    );
}

#[test]
fn set_on_prop_targets_property() {
    let sexp = list([
        sym("set"),
        list([sym("prop"), sym("this"), sym("x")]),
        sym("x"),
    ]);
    assert_eq!(
        Expr::lower(&sexp),
        Expr::Set {
            target: SetTarget::Property {
                object: Box::new(Expr::symbol("this")),
                name: Name::new("x"),
            },
            value: Box::new(Expr::symbol("x")),
        }
    );
}

#[test]
fn set_on_literal_is_unimplemented() {
    let sexp = list([sym("set"), num(1.0), num(2.0)]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn if_alternative_is_optional() {
    let sexp = list([sym("if"), sym("c"), num(1.0)]);
    assert_eq!(
        Expr::lower(&sexp),
        Expr::If {
            condition: Box::new(Expr::symbol("c")),
            consequent: Box::new(Expr::Number(1.0)),
            alternative: None,
        }
    );
}

#[test]
fn lambda_and_def_share_parameter_lists() {
    let lambda = list([
        sym("lambda"),
        list([sym("x"), sym("y")]),
        list([sym("+"), sym("x"), sym("y")]),
    ]);
    let Expr::Lambda { params, body } = Expr::lower(&lambda) else {
        panic!("expected a lambda");
    };
    assert_eq!(params, names(&["x", "y"]));
    assert!(matches!(*body, Expr::Call { .. }));

    let def = list([sym("def"), sym("square"), list([sym("x")]), sym("x")]);
    assert_eq!(
        Expr::lower(&def),
        Expr::Def {
            name: Name::new("square"),
            params: names(&["x"]),
            body: Rc::new(Expr::symbol("x")),
        }
    );
}

#[test]
fn lambda_with_non_list_params_is_unimplemented() {
    let sexp = list([sym("lambda"), sym("x"), sym("x")]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn lambda_with_non_symbol_param_is_unimplemented() {
    let sexp = list([sym("lambda"), list([num(1.0)]), sym("x")]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn class_parent_is_optional() {
    let with_parent = list([sym("class"), sym("Point3D"), sym("Point"), list([sym("begin")])]);
    let Expr::Class { name, parent, .. } = Expr::lower(&with_parent) else {
        panic!("expected a class");
    };
    assert_eq!(name, Name::new("Point3D"));
    assert_eq!(parent, Some(Box::new(Expr::symbol("Point"))));

    let without = list([sym("class"), sym("Point"), list([sym("begin")])]);
    let Expr::Class { parent, body, .. } = Expr::lower(&without) else {
        panic!("expected a class");
    };
    assert_eq!(parent, None);
    assert_eq!(*body, Expr::Block(vec![]));
}

#[test]
fn object_forms() {
    assert_eq!(
        Expr::lower(&list([sym("super"), sym("Point3D")])),
        Expr::Super(Box::new(Expr::symbol("Point3D")))
    );
    assert_eq!(
        Expr::lower(&list([sym("new"), sym("Point"), num(10.0), num(20.0)])),
        Expr::New {
            class: Box::new(Expr::symbol("Point")),
            args: vec![Expr::Number(10.0), Expr::Number(20.0)],
        }
    );
    assert_eq!(
        Expr::lower(&list([sym("prop"), sym("p"), sym("x")])),
        Expr::Prop {
            object: Box::new(Expr::symbol("p")),
            name: Name::new("x"),
        }
    );
}

#[test]
fn new_without_class_is_unimplemented() {
    let sexp = list([sym("new")]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn switch_marks_final_else() {
    let sexp = list([
        sym("switch"),
        list([list([sym(">"), sym("x"), num(1.0)]), num(100.0)]),
        list([sym("else"), num(300.0)]),
    ]);
    let Expr::Switch(clauses) = Expr::lower(&sexp) else {
        panic!("expected a switch");
    };
    assert_eq!(clauses.len(), 2);
    assert!(matches!(clauses[0].condition, SwitchCondition::When(_)));
    assert_eq!(clauses[1].condition, SwitchCondition::Else);
    assert_eq!(clauses[1].body, Expr::Number(300.0));
}

#[test]
fn switch_with_else_before_last_clause_is_unimplemented() {
    let sexp = list([
        sym("switch"),
        list([sym("else"), num(1.0)]),
        list([sym("c"), num(2.0)]),
    ]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn empty_switch_is_unimplemented() {
    let sexp = list([sym("switch")]);
    assert_eq!(Expr::lower(&sexp), Expr::Unimplemented(sexp.clone()));
}

#[test]
fn special_form_tags_round_trip() {
    for tag in [
        "begin", "var", "set", "if", "switch", "while", "def", "lambda", "class", "super", "new",
        "prop",
    ] {
        let form = SpecialForm::from_tag(tag);
        assert_eq!(form.map(SpecialForm::as_tag), Some(tag));
    }
    assert_eq!(SpecialForm::from_tag("print"), None);
}
