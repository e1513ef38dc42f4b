//! exp() function - natural exponential

use crate::registry::function::{FunctionResult, SurfaceFunction};
use crate::registry::signature::FunctionSignature;

/// exp() function - natural exponential, element-wise
///
/// Overflow produces infinity, which passes through to the grid untouched.
pub struct ExpFunction;

impl SurfaceFunction for ExpFunction {
    fn name(&self) -> &str {
        "exp"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: FunctionSignature = FunctionSignature::new("exp", 1);
        &SIG
    }

    fn documentation(&self) -> &str {
        "e raised to each sample."
    }

    fn apply(&self, sample: f64) -> FunctionResult<f64> {
        Ok(sample.exp())
    }
}
