//! Error types for surface evaluation

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use crate::registry::FunctionError;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors that can occur while evaluating a parsed expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Function evaluation error (arity or numeric domain)
    #[error("Function error: {0}")]
    Function(#[from] FunctionError),

    /// Identifier outside the whitelist
    #[error("Unbound identifier '{name}': expressions may reference {allowed}")]
    UnboundIdentifier {
        /// The unknown name
        name: String,
        /// Description of the allowed names
        allowed: String,
    },

    /// Function name that resolves to nothing
    #[error("Unknown function '{qualified_name}'")]
    UnknownFunction {
        /// The name as written, including any namespace qualifier
        qualified_name: String,
    },

    /// Result reduced to a single value instead of a field
    #[error("Expression reduced to a single value instead of a {rows}x{cols} grid")]
    ShapeReduction {
        /// Expected row count
        rows: usize,
        /// Expected column count
        cols: usize,
    },

    /// Mismatched field shapes in a binary operation
    #[error("Shape mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        /// Left operand rows
        left_rows: usize,
        /// Left operand columns
        left_cols: usize,
        /// Right operand rows
        right_rows: usize,
        /// Right operand columns
        right_cols: usize,
    },

    /// Request parameters outside the evaluator's contract
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was out of contract
        message: String,
    },
}

impl EvaluationError {
    /// Convert to a diagnostic for the presentation layer
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            EvaluationError::Function(FunctionError::Domain { .. }) => DiagnosticCode::NumericDomain,
            EvaluationError::Function(FunctionError::InvalidArity { .. }) => {
                DiagnosticCode::InvalidArity
            }
            EvaluationError::UnboundIdentifier { .. } | EvaluationError::UnknownFunction { .. } => {
                DiagnosticCode::UnboundIdentifier
            }
            EvaluationError::ShapeReduction { .. } | EvaluationError::ShapeMismatch { .. } => {
                DiagnosticCode::ShapeMismatch
            }
            EvaluationError::InvalidRequest { .. } => DiagnosticCode::InvalidRequest,
        };
        DiagnosticBuilder::error(code)
            .with_message(self.to_string())
            .build()
    }
}
