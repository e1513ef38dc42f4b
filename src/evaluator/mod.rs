//! Surface expression evaluation
//!
//! Tree-walking evaluation of parsed expressions against the coordinate
//! fields of a mesh. The evaluation environment is closed: exactly the two
//! axis variables and the registered functions, nothing else.

mod context;
mod error;
mod walker;

pub use context::EvaluationContext;
pub use error::{EvaluationError, EvaluationResult};
pub use walker::Evaluator;
