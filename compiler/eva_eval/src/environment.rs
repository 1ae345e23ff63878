//! Chained environments.
//!
//! One type serves four purposes: the global scope, block scopes, function
//! activations, and objects (classes and instances). A class is an
//! environment whose parent is its superclass (or the scope it was declared
//! in); an instance is an environment whose parent is its class. Property
//! access and inheritance are ordinary chain lookups.
//!
//! Environments are shared: closures and instances keep their defining
//! scope alive after the block that created it has finished, and a mutation
//! through one handle is visible through every other.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use eva_ir::Name;
use rustc_hash::FxHashMap;

use crate::errors::undefined_variable;
use crate::{EvalResult, Value};

/// A single scope: its own bindings plus a link to the enclosing scope.
#[derive(Default)]
struct Scope {
    /// Bindings owned by this scope (`FxHashMap` for faster hashing with `Name` keys).
    record: FxHashMap<Name, Value>,
    /// Enclosing scope, if any.
    parent: Option<Environment>,
}

impl Scope {
    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.record.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.0.borrow().lookup(name)
    }

    /// Overwrite `name` in the nearest scope that owns it.
    fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.record.get_mut(name) {
            *slot = value;
            return true;
        }
        match &self.parent {
            Some(parent) => parent.0.borrow_mut().assign(name, value),
            None => false,
        }
    }
}

/// Shared handle to a scope.
///
/// Cloning the handle aliases the scope; it does not copy bindings.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create a root environment with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root environment pre-populated with `bindings`.
    pub fn with_bindings(bindings: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let scope = Scope {
            record: bindings.into_iter().collect(),
            parent: None,
        };
        Environment(Rc::new(RefCell::new(scope)))
    }

    /// Create a new, empty environment whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        let scope = Scope {
            record: FxHashMap::default(),
            parent: Some(self.clone()),
        };
        Environment(Rc::new(RefCell::new(scope)))
    }

    /// The enclosing environment, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Bind `name` in this environment, shadowing any binding further up
    /// the chain and overwriting any binding already here.
    pub fn define(&self, name: Name, value: Value) -> Value {
        self.0.borrow_mut().record.insert(name, value.clone());
        value
    }

    /// Update the nearest existing binding of `name`.
    ///
    /// Fails with `UndefinedVariable` if no environment in the chain owns it.
    pub fn assign(&self, name: &str, value: Value) -> EvalResult {
        if self.0.borrow_mut().assign(name, value.clone()) {
            Ok(value)
        } else {
            Err(undefined_variable(name))
        }
    }

    /// Resolve `name` through this environment and its ancestors.
    ///
    /// Fails with `UndefinedVariable` if no environment in the chain owns it.
    pub fn lookup(&self, name: &str) -> EvalResult {
        let found = self.0.borrow().lookup(name);
        found.ok_or_else(|| undefined_variable(name))
    }

    /// Whether `name` is bound in this environment itself (parents ignored).
    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().record.contains_key(name)
    }

    /// Number of environments from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Whether both handles refer to the same environment.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Prints own binding names only: records routinely hold closures and
/// objects that point back into the same chain.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.record.keys().map(Name::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
