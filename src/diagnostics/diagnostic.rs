//! Core diagnostic types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity levels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
    /// Hint - subtle suggestion for improvement
    Hint,
    /// Information - provides helpful information
    #[default]
    Info,
    /// Warning - may indicate a problem but doesn't prevent rendering
    Warning,
    /// Error - the expression could not be evaluated
    Error,
}

impl Severity {
    /// Lowercase label used in formatted output
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Hint => "hint",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Diagnostic codes for surface evaluation failures
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Malformed formula text
    SyntaxError,
    /// Name outside the whitelist
    UnboundIdentifier,
    /// Undefined numeric operation (e.g. log of a negative value)
    NumericDomain,
    /// Result is not grid-shaped
    ShapeMismatch,
    /// Wrong number of function arguments
    InvalidArity,
    /// Request parameters outside the evaluator's contract
    InvalidRequest,
    /// Custom code
    Custom(String),
}

impl DiagnosticCode {
    /// Stable label for this code
    pub fn as_str(&self) -> &str {
        match self {
            DiagnosticCode::SyntaxError => "syntax-error",
            DiagnosticCode::UnboundIdentifier => "unbound-identifier",
            DiagnosticCode::NumericDomain => "numeric-domain",
            DiagnosticCode::ShapeMismatch => "shape-mismatch",
            DiagnosticCode::InvalidArity => "invalid-arity",
            DiagnosticCode::InvalidRequest => "invalid-request",
            DiagnosticCode::Custom(code) => code,
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: Severity,
    /// Failure code
    pub code: DiagnosticCode,
    /// Human-readable message
    pub message: String,
    /// Byte offset into the expression, when known
    pub position: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            position: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {}",
            self.severity.as_str(),
            self.code.as_str(),
            self.message
        )?;
        if let Some(position) = self.position {
            write!(f, " (at position {position})")?;
        }
        Ok(())
    }
}
