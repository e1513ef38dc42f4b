//! Expression-driven surface sampling
//!
//! Evaluates user-supplied formulas of two variables over a rectangular
//! sample grid, producing a height field memoized with wall-clock expiry.
//! The public contract is total: [`SurfaceEngine::evaluate`] always returns
//! a valid grid, substituting a fixed fallback surface (with a diagnostic)
//! when the expression cannot be evaluated.
//!
//! ```
//! use heightfield::SurfaceEngine;
//!
//! let engine = SurfaceEngine::new();
//! let surface = engine.evaluate("np.sin(x) * np.cos(y)", 3.0, 3.0, 40);
//! assert_eq!(surface.grid.shape(), (40, 40));
//! assert!(surface.diagnostic.is_none());
//! ```

pub mod ast;
pub mod cache;
pub mod diagnostics;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod registry;

pub mod engine;
pub mod error;
pub mod export;
pub mod presets;

// Re-export main types
pub use cache::{CacheConfig, CacheStats};
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use engine::{EvaluatedSurface, SurfaceEngine};
pub use error::{Result, SurfaceError};
pub use model::{Grid, ScalarField};
pub use parser::{ParseError, parse_expression as parse};
pub use registry::FunctionRegistry;
