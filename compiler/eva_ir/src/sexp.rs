//! Structured input trees.
//!
//! The evaluator never reads source text. A reader (outside this workspace)
//! produces `Sexp` trees: numbers, textual atoms and ordered lists. Whether an
//! atom is a string literal or a symbol is decided here, by its characters.

use std::fmt;

/// Delimiter that marks a textual atom as a string literal.
pub const QUOTE: char = '"';

/// A raw expression tree as produced by a reader.
#[derive(Clone, Debug, PartialEq)]
pub enum Sexp {
    /// Numeric literal.
    Number(f64),
    /// Any textual atom: a quoted string literal, a symbol, or neither.
    Atom(String),
    /// Compound form: operator tag first, operands after.
    List(Vec<Sexp>),
}

impl Sexp {
    /// Numeric literal.
    pub fn number(value: f64) -> Self {
        Sexp::Number(value)
    }

    /// Textual atom, taken verbatim.
    pub fn atom(text: impl Into<String>) -> Self {
        Sexp::Atom(text.into())
    }

    /// String literal: wraps `text` in quote delimiters.
    pub fn string(text: &str) -> Self {
        Sexp::Atom(format!("{QUOTE}{text}{QUOTE}"))
    }

    /// Compound form.
    pub fn list(items: impl IntoIterator<Item = Sexp>) -> Self {
        Sexp::List(items.into_iter().collect())
    }

    /// The symbol text, if this is an atom made only of symbol characters.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Atom(text) if is_symbol(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is exactly the symbol `symbol`.
    pub fn is_symbol_named(&self, symbol: &str) -> bool {
        self.as_symbol() == Some(symbol)
    }
}

/// Whether `text` is a symbol token: non-empty, identifier and operator
/// characters only.
pub fn is_symbol(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_symbol_char)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '*' | '/' | '<' | '>' | '=' | '!' | '?')
}

/// The text between the quote delimiters, if `text` is a string literal.
pub fn string_literal(text: &str) -> Option<&str> {
    text.strip_prefix(QUOTE)?.strip_suffix(QUOTE)
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Number(n) => write!(f, "{n}"),
            Sexp::Atom(text) => f.write_str(text),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
