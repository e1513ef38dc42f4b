//! Tree-walking evaluator for surface expression ASTs

use super::context::EvaluationContext;
use super::error::{EvaluationError, EvaluationResult};
use crate::ast::{BinaryOperator, ExpressionNode, UnaryOperator};
use crate::model::Value;
use crate::registry::FunctionRegistry;
use std::sync::Arc;

/// Evaluates expression trees against a context
pub struct Evaluator {
    registry: Arc<FunctionRegistry>,
}

impl Evaluator {
    /// Create an evaluator over a function registry
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this evaluator resolves functions against
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Walk the tree, producing a scalar or field value
    pub fn evaluate(
        &self,
        node: &ExpressionNode,
        context: &EvaluationContext,
    ) -> EvaluationResult<Value> {
        match node {
            ExpressionNode::Number(value) => Ok(Value::Scalar(*value)),

            ExpressionNode::Variable(name) => context.get(name).cloned().ok_or_else(|| {
                EvaluationError::UnboundIdentifier {
                    name: name.clone(),
                    allowed: context.variable_names().join(", "),
                }
            }),

            ExpressionNode::UnaryOp { op, operand } => {
                let value = self.evaluate(operand, context)?;
                Ok(match op {
                    UnaryOperator::Plus => value,
                    UnaryOperator::Minus => value.map(|v| -v),
                })
            }

            ExpressionNode::BinaryOp { op, left, right } => {
                let left = self.evaluate(left, context)?;
                let right = self.evaluate(right, context)?;
                apply_binary(*op, &left, &right)
            }

            ExpressionNode::FunctionCall {
                namespace,
                name,
                args,
            } => {
                let function = self
                    .registry
                    .resolve(namespace.as_deref(), name)
                    .ok_or_else(|| EvaluationError::UnknownFunction {
                        qualified_name: match namespace {
                            Some(ns) => format!("{ns}.{name}"),
                            None => name.clone(),
                        },
                    })?;

                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.evaluate(arg, context)?);
                }
                Ok(function.evaluate(&values)?)
            }
        }
    }
}

/// Apply a binary operator with scalar/field broadcasting
///
/// Division by zero and overflow follow IEEE semantics; the resulting
/// NaN/Inf samples pass through to the grid.
fn apply_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvaluationResult<Value> {
    let f: fn(f64, f64) -> f64 = match op {
        BinaryOperator::Add => |a, b| a + b,
        BinaryOperator::Subtract => |a, b| a - b,
        BinaryOperator::Multiply => |a, b| a * b,
        BinaryOperator::Divide => |a, b| a / b,
        BinaryOperator::Power => f64::powf,
    };

    left.broadcast_with(right, f)
        .ok_or_else(|| match (left.shape(), right.shape()) {
            (Some((left_rows, left_cols)), Some((right_rows, right_cols))) => {
                EvaluationError::ShapeMismatch {
                    left_rows,
                    left_cols,
                    right_rows,
                    right_cols,
                }
            }
            // broadcast_with only fails on field/field shape conflicts
            _ => EvaluationError::ShapeMismatch {
                left_rows: 0,
                left_cols: 0,
                right_rows: 0,
                right_cols: 0,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mesh;
    use crate::parser::parse_expression;
    use crate::registry::FunctionError;

    fn evaluate(input: &str) -> EvaluationResult<Value> {
        let ast = parse_expression(input).expect("parse");
        let (x, y) = mesh(1.0, 1.0, 3);
        let context = EvaluationContext::for_mesh(x, y);
        Evaluator::new(Arc::new(FunctionRegistry::standard())).evaluate(&ast, &context)
    }

    #[test]
    fn saddle_values() {
        let value = evaluate("x**2 - y**2").expect("evaluate");
        let Value::Field(field) = value else {
            panic!("expected a field");
        };
        // xy convention: corner (0,0) is (x=-1, y=-1), so x^2 - y^2 = 0;
        // (0,2) is (x=1, y=-1) -> 0; (1,0) is (x=-1, y=0) -> 1
        assert_eq!(field.get(1, 0), 1.0);
        assert_eq!(field.get(0, 1), -1.0);
        assert_eq!(field.get(1, 1), 0.0);
    }

    #[test]
    fn qualified_and_plain_calls_agree() {
        let plain = evaluate("sin(x)").expect("sin");
        let qualified = evaluate("np.sin(x)").expect("np.sin");
        assert_eq!(plain, qualified);
    }

    #[test]
    fn unbound_identifier_is_reported() {
        let err = evaluate("x + z").expect_err("z is unbound");
        assert!(matches!(
            err,
            EvaluationError::UnboundIdentifier { ref name, .. } if name == "z"
        ));
    }

    #[test]
    fn unknown_function_is_reported() {
        let err = evaluate("np.arctan(x)").expect_err("arctan is not whitelisted");
        assert!(matches!(
            err,
            EvaluationError::UnknownFunction { ref qualified_name } if qualified_name == "np.arctan"
        ));
    }

    #[test]
    fn log_domain_failure_propagates() {
        let err = evaluate("log(x)").expect_err("x spans non-positive values");
        assert!(matches!(
            err,
            EvaluationError::Function(FunctionError::Domain { .. })
        ));
    }

    #[test]
    fn division_by_zero_passes_through() {
        let value = evaluate("x / x").expect("IEEE semantics, not an error");
        let Value::Field(field) = value else {
            panic!("expected a field");
        };
        // center sample is 0/0
        assert!(field.get(1, 1).is_nan());
        assert_eq!(field.get(0, 0), 1.0);
    }

    #[test]
    fn constant_expression_is_a_scalar() {
        let value = evaluate("2 ** 10").expect("evaluate");
        assert_eq!(value, Value::Scalar(1024.0));
    }
}
