//! cos() function - cosine

use crate::registry::function::{FunctionResult, SurfaceFunction};
use crate::registry::signature::FunctionSignature;

/// cos() function - cosine, element-wise
pub struct CosFunction;

impl SurfaceFunction for CosFunction {
    fn name(&self) -> &str {
        "cos"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: FunctionSignature = FunctionSignature::new("cos", 1);
        &SIG
    }

    fn documentation(&self) -> &str {
        "Cosine of each sample, in radians."
    }

    fn apply(&self, sample: f64) -> FunctionResult<f64> {
        Ok(sample.cos())
    }
}
