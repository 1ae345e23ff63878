//! Identifier type shared by expressions and environments.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// An identifier: variable, parameter, class or property name.
///
/// Backed by `Rc<str>` so cloning a name (which happens on every closure
/// creation and every `define`) never copies the text. Hashing and equality
/// are by content, and `Borrow<str>` lets maps keyed by `Name` be queried
/// with a plain `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    /// Create a name from its text.
    pub fn new(text: &str) -> Self {
        Name(Rc::from(text))
    }

    /// The text of this name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", &*self.0)
    }
}
