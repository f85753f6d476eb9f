//! Lexically scoped environments.

use std::collections::HashMap;

use super::value::Value;

/// A lexical scope: a map from names to values, with an optional link to
/// the enclosing scope.
///
/// Lookup walks the chain outward; a miss at the root means the name is
/// undefined. Bindings always go into the innermost scope. Inner
/// environments borrow their outer environment, so scopes nest on the
/// stack and cannot form cycles.
///
/// # Examples
///
/// ```
/// use dang::evaluator::{Environment, Value};
///
/// let mut globals = Environment::new();
/// globals.set("x", Value::Integer(1));
///
/// let inner = Environment::with_outer(&globals);
/// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
/// assert_eq!(inner.get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment<'outer> {
    /// Bindings local to this scope.
    store: HashMap<String, Value>,
    /// The enclosing scope, if any.
    outer: Option<&'outer Environment<'outer>>,
}

impl Environment<'_> {
    /// Creates an empty root environment.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }
}

impl<'outer> Environment<'outer> {
    /// Creates an empty environment nested inside `outer`.
    pub fn with_outer(outer: &'outer Environment<'outer>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    /// Looks up a name through the scope chain.
    ///
    /// Values are cheap to clone, so lookup returns an owned copy.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.and_then(|outer| outer.get(name)),
        }
    }

    /// Binds a name in this scope, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unset_name() {
        let env = Environment::new();
        assert_eq!(env.get("x"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(5));
        assert_eq!(env.get("x"), Some(Value::Integer(5)));
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(1));
        env.set("x", Value::Boolean(true));
        assert_eq!(env.get("x"), Some(Value::Boolean(true)));
    }

    #[test]
    fn test_lookup_recurses_to_outer() {
        let mut outer = Environment::new();
        outer.set("x", Value::Integer(10));

        let inner = Environment::with_outer(&outer);
        assert_eq!(inner.get("x"), Some(Value::Integer(10)));
    }

    #[test]
    fn test_inner_shadows_outer() {
        let mut outer = Environment::new();
        outer.set("x", Value::Integer(1));

        let mut inner = Environment::with_outer(&outer);
        inner.set("x", Value::Integer(2));

        assert_eq!(inner.get("x"), Some(Value::Integer(2)));
        assert_eq!(outer.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn test_miss_at_root() {
        let outer = Environment::new();
        let inner = Environment::with_outer(&outer);
        assert_eq!(inner.get("missing"), None);
    }
}
