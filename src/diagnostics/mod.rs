//! Diagnostic system for parsing and evaluation failures
//!
//! Evaluation failures never cross the engine boundary as errors; they are
//! converted to diagnostics and surfaced next to the fallback surface.

pub mod builder;
pub mod diagnostic;

pub use builder::DiagnosticBuilder;
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
