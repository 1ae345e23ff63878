//! Test helpers: a minimal reader turning source text into `Sexp` trees.
//!
//! Only what the tests need: parentheses, double-quoted strings without
//! escapes, numbers and atoms. Malformed input panics.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use eva_ir::{Expr, Sexp};

/// Read exactly one expression.
pub fn read(source: &str) -> Sexp {
    let mut forms = read_all(source);
    assert_eq!(forms.len(), 1, "expected one form in {source:?}");
    forms.pop().expect("one form")
}

/// Read and lower every top-level expression.
pub fn program(source: &str) -> Vec<Expr> {
    read_all(source).iter().map(Expr::lower).collect()
}

/// Read every top-level expression.
pub fn read_all(source: &str) -> Vec<Sexp> {
    let tokens = tokenize(source);
    let mut pos = 0;
    let mut forms = Vec::new();
    while pos < tokens.len() {
        forms.push(parse(&tokens, &mut pos));
    }
    forms
}

fn tokenize(source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '(' | ')' => {
                tokens.push(c.to_string());
                chars.next();
            }
            '"' => {
                let mut text = String::from('"');
                chars.next();
                for c in chars.by_ref() {
                    text.push(c);
                    if c == '"' {
                        break;
                    }
                }
                tokens.push(text);
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            _ => {
                let mut text = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
                tokens.push(text);
            }
        }
    }
    tokens
}

fn parse(tokens: &[String], pos: &mut usize) -> Sexp {
    let token = &tokens[*pos];
    *pos += 1;
    match token.as_str() {
        "(" => {
            let mut items = Vec::new();
            while tokens[*pos] != ")" {
                items.push(parse(tokens, pos));
            }
            *pos += 1;
            Sexp::List(items)
        }
        ")" => panic!("unbalanced ')'"),
        text if looks_numeric(text) => Sexp::Number(text.parse().unwrap()),
        text => Sexp::atom(text),
    }
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

#[test]
fn reads_nested_forms() {
    assert_eq!(
        read("(+ 1 (* -2.5 x) \"a b\")"),
        Sexp::list([
            Sexp::atom("+"),
            Sexp::number(1.0),
            Sexp::list([Sexp::atom("*"), Sexp::number(-2.5), Sexp::atom("x")]),
            Sexp::string("a b"),
        ])
    );
    assert_eq!(read("-"), Sexp::atom("-"));
    assert_eq!(read_all("1 2").len(), 2);
}
