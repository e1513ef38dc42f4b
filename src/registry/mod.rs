//! Closed function registry for surface expressions
//!
//! Exactly four elementary functions are registered: `sin`, `cos`, `exp`,
//! and `log`. The numeric namespace alias (`np`) resolves to the same four
//! functions and nothing else; there is no path from an expression to any
//! other code.

pub mod function;
pub mod functions;
pub mod signature;

pub use function::{FunctionError, FunctionResult, SurfaceFunction};
pub use signature::FunctionSignature;

use functions::{CosFunction, ExpFunction, LogFunction, SinFunction};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Namespace alias through which the registered functions are also
/// reachable, as in `np.sin(x)`
pub const NAMESPACE_ALIAS: &str = "np";

/// Registry of the whitelisted functions
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn SurfaceFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    /// The standard registry: sin, cos, exp, log
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SinFunction));
        registry.register(Arc::new(CosFunction));
        registry.register(Arc::new(ExpFunction));
        registry.register(Arc::new(LogFunction));
        registry
    }

    /// Register a function under its own name
    pub fn register(&mut self, function: Arc<dyn SurfaceFunction>) {
        self.functions.insert(function.name().to_string(), function);
    }

    /// Look up an unqualified function name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SurfaceFunction>> {
        self.functions.get(name).cloned()
    }

    /// Resolve a possibly namespace-qualified name
    ///
    /// Unqualified names and names qualified with the `np` alias resolve to
    /// the same registered functions; any other qualifier resolves to
    /// nothing.
    pub fn resolve(&self, namespace: Option<&str>, name: &str) -> Option<Arc<dyn SurfaceFunction>> {
        match namespace {
            None => self.get(name),
            Some(ns) if ns == NAMESPACE_ALIAS => self.get(name),
            Some(_) => None,
        }
    }

    /// Whether a function is registered under this name
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted, for diagnostics
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn standard_registry_contains_the_whitelist() {
        let registry = FunctionRegistry::standard();
        assert_eq!(registry.names(), vec!["cos", "exp", "log", "sin"]);
    }

    #[test]
    fn alias_resolves_to_the_same_functions() {
        let registry = FunctionRegistry::standard();
        let direct = registry.resolve(None, "sin").expect("sin");
        let aliased = registry.resolve(Some("np"), "sin").expect("np.sin");
        assert!(Arc::ptr_eq(&direct, &aliased));
    }

    #[test]
    fn unknown_namespace_resolves_to_nothing() {
        let registry = FunctionRegistry::standard();
        assert!(registry.resolve(Some("os"), "system").is_none());
        assert!(registry.resolve(Some("math"), "sin").is_none());
    }

    #[test]
    fn alias_only_exposes_registered_functions() {
        let registry = FunctionRegistry::standard();
        assert!(registry.resolve(Some("np"), "linalg").is_none());
        assert!(registry.resolve(Some("np"), "frombuffer").is_none());
    }

    #[test]
    fn arity_is_validated() {
        let registry = FunctionRegistry::standard();
        let sin = registry.get("sin").expect("sin");
        let err = sin.evaluate(&[]).expect_err("no arguments");
        assert!(matches!(err, FunctionError::InvalidArity { .. }));

        let err = sin
            .evaluate(&[Value::Scalar(1.0), Value::Scalar(2.0)])
            .expect_err("too many arguments");
        assert!(matches!(err, FunctionError::InvalidArity { .. }));
    }
}
