//! Crate-level error types

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use crate::evaluator::EvaluationError;
use crate::parser::ParseError;
use thiserror::Error;

/// Result type alias for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Any failure between expression text and finished grid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The expression text could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The parsed expression could not be evaluated
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl SurfaceError {
    /// Convert to a diagnostic for the presentation layer
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SurfaceError::Parse(err) => DiagnosticBuilder::error(DiagnosticCode::SyntaxError)
                .with_message(err.to_string())
                .with_position(err.position())
                .build(),
            SurfaceError::Evaluation(err) => err.to_diagnostic(),
        }
    }
}
