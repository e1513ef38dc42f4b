//! Expression AST node definitions

use crate::ast::operator::{BinaryOperator, UnaryOperator};
use std::fmt;

/// AST representation of surface expressions
///
/// An expression is a formula over the axis variables `x` and `y`, numeric
/// literals, arithmetic operators, and calls to whitelisted functions
/// (optionally qualified with the numeric namespace alias, e.g. `np.sin(x)`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ExpressionNode {
    /// Numeric literal (IEEE double precision)
    Number(f64),

    /// Axis variable reference (`x` or `y`)
    Variable(String),

    /// Function call, optionally namespace-qualified
    FunctionCall {
        /// Namespace qualifier (`np` in `np.sin(x)`), if present
        namespace: Option<String>,
        /// Function name
        name: String,
        /// Function arguments
        args: Vec<ExpressionNode>,
    },

    /// Binary operation (arithmetic)
    BinaryOp {
        /// The operator
        op: BinaryOperator,
        /// Left operand
        left: Box<ExpressionNode>,
        /// Right operand
        right: Box<ExpressionNode>,
    },

    /// Unary operation (sign)
    UnaryOp {
        /// The operator
        op: UnaryOperator,
        /// The operand
        operand: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Create a numeric literal expression
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Create a variable reference expression
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create an unqualified function call expression
    pub fn function_call(name: impl Into<String>, args: Vec<ExpressionNode>) -> Self {
        Self::FunctionCall {
            namespace: None,
            name: name.into(),
            args,
        }
    }

    /// Create a namespace-qualified function call expression
    pub fn qualified_call(
        namespace: impl Into<String>,
        name: impl Into<String>,
        args: Vec<ExpressionNode>,
    ) -> Self {
        Self::FunctionCall {
            namespace: Some(namespace.into()),
            name: name.into(),
            args,
        }
    }

    /// Create a binary operation expression
    pub fn binary(op: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a unary operation expression
    pub fn unary(op: UnaryOperator, operand: ExpressionNode) -> Self {
        Self::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    /// Whether any variable reference appears in this expression
    ///
    /// A formula with no variable reference evaluates to a single value
    /// rather than a field; callers use this to report shape failures early.
    pub fn references_variables(&self) -> bool {
        match self {
            ExpressionNode::Number(_) => false,
            ExpressionNode::Variable(_) => true,
            ExpressionNode::FunctionCall { args, .. } => {
                args.iter().any(ExpressionNode::references_variables)
            }
            ExpressionNode::BinaryOp { left, right, .. } => {
                left.references_variables() || right.references_variables()
            }
            ExpressionNode::UnaryOp { operand, .. } => operand.references_variables(),
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Number(value) => write!(f, "{value}"),
            ExpressionNode::Variable(name) => write!(f, "{name}"),
            ExpressionNode::FunctionCall {
                namespace,
                name,
                args,
            } => {
                if let Some(ns) = namespace {
                    write!(f, "{ns}.")?;
                }
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            ExpressionNode::BinaryOp { op, left, right } => {
                write!(f, "({left} {op} {right})")
            }
            ExpressionNode::UnaryOp { op, operand } => write!(f, "({op}{operand})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_structure() {
        let expr = ExpressionNode::binary(
            BinaryOperator::Subtract,
            ExpressionNode::binary(
                BinaryOperator::Power,
                ExpressionNode::variable("x"),
                ExpressionNode::number(2.0),
            ),
            ExpressionNode::qualified_call("np", "sin", vec![ExpressionNode::variable("y")]),
        );
        assert_eq!(expr.to_string(), "((x ** 2) - np.sin(y))");
    }

    #[test]
    fn variable_detection() {
        assert!(ExpressionNode::variable("x").references_variables());
        assert!(!ExpressionNode::number(3.5).references_variables());
        let call = ExpressionNode::function_call("sin", vec![ExpressionNode::number(1.0)]);
        assert!(!call.references_variables());
        let call = ExpressionNode::function_call("sin", vec![ExpressionNode::variable("y")]);
        assert!(call.references_variables());
    }
}
