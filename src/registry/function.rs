//! Function trait and error types for the surface function registry

use super::signature::FunctionSignature;
use crate::model::{ScalarField, Value};
use thiserror::Error;

/// Result type for function evaluation
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Errors reported by whitelisted functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Wrong number of arguments
    #[error("Function '{name}' expects {expected} argument(s), got {actual}")]
    InvalidArity {
        /// Function name
        name: String,
        /// Required argument count
        expected: usize,
        /// Actual argument count
        actual: usize,
    },

    /// Argument outside the function's numeric domain
    #[error("Function '{name}' domain error: {message}")]
    Domain {
        /// Function name
        name: String,
        /// Description of the offending input
        message: String,
    },
}

/// A whitelisted numeric function, applied element-wise over values
///
/// Implementations are pure: the same sample always produces the same
/// result, which is what makes whole-grid memoization sound.
pub trait SurfaceFunction: Send + Sync {
    /// Name as referenced in expressions
    fn name(&self) -> &str;

    /// Signature (name and arity)
    fn signature(&self) -> &FunctionSignature;

    /// Short human-readable description
    fn documentation(&self) -> &str;

    /// Apply to a single sample; may report a domain failure
    fn apply(&self, sample: f64) -> FunctionResult<f64>;

    /// Check the argument count against the signature
    fn validate_args(&self, args: &[Value]) -> FunctionResult<()> {
        let expected = self.signature().arity;
        if args.len() != expected {
            return Err(FunctionError::InvalidArity {
                name: self.name().to_string(),
                expected,
                actual: args.len(),
            });
        }
        Ok(())
    }

    /// Evaluate over a value, broadcasting across fields
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let input = args.first().ok_or_else(|| FunctionError::InvalidArity {
            name: self.name().to_string(),
            expected: self.signature().arity,
            actual: 0,
        })?;

        match input {
            Value::Scalar(v) => Ok(Value::Scalar(self.apply(*v)?)),
            Value::Field(field) => {
                let mut data = Vec::with_capacity(field.len());
                for &sample in field.samples() {
                    data.push(self.apply(sample)?);
                }
                Ok(Value::Field(ScalarField::from_vec(
                    data,
                    field.rows(),
                    field.cols(),
                )))
            }
        }
    }
}
