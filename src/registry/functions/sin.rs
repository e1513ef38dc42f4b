//! sin() function - sine

use crate::registry::function::{FunctionResult, SurfaceFunction};
use crate::registry::signature::FunctionSignature;

/// sin() function - sine, element-wise
pub struct SinFunction;

impl SurfaceFunction for SinFunction {
    fn name(&self) -> &str {
        "sin"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: FunctionSignature = FunctionSignature::new("sin", 1);
        &SIG
    }

    fn documentation(&self) -> &str {
        "Sine of each sample, in radians."
    }

    fn apply(&self, sample: f64) -> FunctionResult<f64> {
        Ok(sample.sin())
    }
}
