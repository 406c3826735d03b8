//! Scoped name bindings.
//!
//! Scopes live in an arena and point at their parent by index. A procedure
//! call opens a child of the *calling* scope, so free names in a procedure
//! body resolve along the dynamic call chain rather than where the procedure
//! was defined. Calls nest strictly, so scopes are released in LIFO order.

use std::collections::HashMap;
use std::rc::Rc;

use super::ast::Procedure;

/// What a name can be bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Number(f64),
    Procedure(Rc<Procedure>),
}

/// Handle to a scope inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct Scope {
    names: HashMap<String, Binding>,
    parent: Option<ScopeId>,
}

#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// A fresh environment holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Number of live scopes, root included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Open a new scope whose lookups fall back to `parent`.
    pub fn create_child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            names: HashMap::new(),
            parent: Some(parent),
        });
        tracing::debug!(scope = id.0, parent = parent.0, "scope opened");
        id
    }

    /// Drop `scope` and anything opened after it. The root is never released.
    pub fn release(&mut self, scope: ScopeId) {
        debug_assert_eq!(scope.0 + 1, self.scopes.len(), "scopes released out of order");
        if scope.0 > 0 {
            self.scopes.truncate(scope.0);
            tracing::debug!(scope = scope.0, "scope released");
        }
    }

    /// Bind `name` in `scope` only, replacing any existing local binding.
    pub fn set(&mut self, scope: ScopeId, name: impl Into<String>, value: Binding) {
        self.scopes[scope.0].names.insert(name.into(), value);
    }

    /// Find the nearest binding of `name`, starting at `scope` and walking
    /// parents up to the root.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(binding) = scope.names.get(name) {
                return Some(binding);
            }
            current = scope.parent;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
