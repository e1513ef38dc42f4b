//! Evaluation context binding the axis variables

use crate::model::{ScalarField, Value};
use rustc_hash::FxHashMap;

/// Variable bindings available during evaluation
///
/// A context built with [`EvaluationContext::for_mesh`] binds exactly `x`
/// and `y` to the mesh coordinate fields; no other names resolve.
pub struct EvaluationContext {
    variables: FxHashMap<String, Value>,
}

impl EvaluationContext {
    /// Context over mesh coordinate fields
    pub fn for_mesh(x: ScalarField, y: ScalarField) -> Self {
        let mut variables = FxHashMap::default();
        variables.insert("x".to_string(), Value::Field(x));
        variables.insert("y".to_string(), Value::Field(y));
        Self { variables }
    }

    /// Look up a variable binding
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Bound variable names, sorted, for diagnostics
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mesh;

    #[test]
    fn mesh_context_binds_exactly_the_axes() {
        let (x, y) = mesh(1.0, 1.0, 3);
        let context = EvaluationContext::for_mesh(x, y);
        assert!(context.get("x").is_some());
        assert!(context.get("y").is_some());
        assert!(context.get("z").is_none());
        assert!(context.get("np").is_none());
        assert_eq!(context.variable_names(), vec!["x", "y"]);
    }
}
