//! log() function - natural logarithm

use crate::registry::function::{FunctionError, FunctionResult, SurfaceFunction};
use crate::registry::signature::FunctionSignature;

/// log() function - natural logarithm, element-wise
///
/// The logarithm is undefined for non-positive inputs; any such sample in
/// the argument is a domain failure for the whole evaluation. NaN samples
/// pass through (the comparison is false), matching the pass-through rule
/// for non-finite values.
pub struct LogFunction;

impl SurfaceFunction for LogFunction {
    fn name(&self) -> &str {
        "log"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: FunctionSignature = FunctionSignature::new("log", 1);
        &SIG
    }

    fn documentation(&self) -> &str {
        "Natural logarithm of each sample; inputs must be positive."
    }

    fn apply(&self, sample: f64) -> FunctionResult<f64> {
        if sample <= 0.0 {
            return Err(FunctionError::Domain {
                name: self.name().to_string(),
                message: format!("logarithm undefined for non-positive value {sample}"),
            });
        }
        Ok(sample.ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_inputs_succeed() {
        let log = LogFunction;
        assert_eq!(log.apply(1.0), Ok(0.0));
        assert!((log.apply(std::f64::consts::E).expect("log e") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_inputs_are_domain_errors() {
        let log = LogFunction;
        assert!(matches!(log.apply(0.0), Err(FunctionError::Domain { .. })));
        assert!(matches!(log.apply(-2.5), Err(FunctionError::Domain { .. })));
    }

    #[test]
    fn nan_passes_through() {
        let log = LogFunction;
        let result = log.apply(f64::NAN).expect("nan is not a domain failure");
        assert!(result.is_nan());
    }
}
