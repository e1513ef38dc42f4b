//! Builder API for constructing diagnostics

use super::diagnostic::{Diagnostic, DiagnosticCode, Severity};

/// Fluent builder for [`Diagnostic`] values
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(code: DiagnosticCode) -> Self {
        Self {
            diagnostic: Diagnostic::new(Severity::Error, code, ""),
        }
    }

    /// Start a warning diagnostic
    pub fn warning(code: DiagnosticCode) -> Self {
        Self {
            diagnostic: Diagnostic::new(Severity::Warning, code, ""),
        }
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.diagnostic.message = message.into();
        self
    }

    /// Set the expression position
    pub fn with_position(mut self, position: usize) -> Self {
        self.diagnostic.position = Some(position);
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
