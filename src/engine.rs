//! Surface engine - the main entry point for expression evaluation
//!
//! [`SurfaceEngine::evaluate`] is total: it always answers with a valid
//! grid. Failures of any kind are converted to a diagnostic and answered
//! with the fixed fallback surface, so a malformed expression never blanks
//! the caller's rendering. The hard-error variant
//! [`SurfaceEngine::try_evaluate`] exists for callers that prefer to handle
//! failures themselves.

use crate::cache::{CacheConfig, CacheKey, CacheStats, SurfaceCache};
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::evaluator::{EvaluationContext, EvaluationError, Evaluator};
use crate::model::{Grid, Value, mesh};
use crate::parser::parse_expression;
use crate::registry::FunctionRegistry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of a surface evaluation
///
/// Always carries a valid grid. `diagnostic` is set exactly when the grid
/// is the fallback surface.
#[derive(Debug, Clone)]
pub struct EvaluatedSurface {
    /// The sampled grid, shared with the cache
    pub grid: Arc<Grid>,
    /// The failure that triggered the fallback, if any
    pub diagnostic: Option<Diagnostic>,
    /// Whether this outcome was answered from the cache
    pub cached: bool,
}

impl EvaluatedSurface {
    /// Whether the grid is the fallback surface
    pub fn is_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Main engine for parsing, evaluating, and memoizing surface expressions
pub struct SurfaceEngine {
    evaluator: Evaluator,
    cache: SurfaceCache,
    /// Computations actually performed (cache misses), observable by tests
    evaluations: AtomicU64,
}

impl Default for SurfaceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceEngine {
    /// Engine with the standard registry and default cache configuration
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Engine with a custom cache configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            evaluator: Evaluator::new(Arc::new(FunctionRegistry::standard())),
            cache: SurfaceCache::new(config),
            evaluations: AtomicU64::new(0),
        }
    }

    /// Evaluate an expression over the symmetric domain
    ///
    /// `resolution` evenly spaced samples are taken per axis across
    /// `[-x_extent, x_extent]` and `[-y_extent, y_extent]`. Identical
    /// requests within the expiry window are answered from the cache with
    /// the same grid instance (and the same diagnostic, for fallback
    /// entries). This method never fails: any parse or evaluation error is
    /// reported as a diagnostic next to the fallback surface.
    pub fn evaluate(
        &self,
        expression: &str,
        x_extent: f64,
        y_extent: f64,
        resolution: usize,
    ) -> EvaluatedSurface {
        let key = CacheKey::new(expression, x_extent, y_extent, resolution);
        if let Some(entry) = self.cache.lookup(&key) {
            log::debug!("cache hit for '{expression}' ({resolution}x{resolution})");
            return EvaluatedSurface {
                grid: entry.grid,
                diagnostic: entry.diagnostic,
                cached: true,
            };
        }

        match self.compute(expression, x_extent, y_extent, resolution) {
            Ok(grid) => {
                let grid = Arc::new(grid);
                self.cache.insert(key, Arc::clone(&grid), None);
                EvaluatedSurface {
                    grid,
                    diagnostic: None,
                    cached: false,
                }
            }
            Err(err) => {
                log::warn!("invalid expression '{expression}': {err}; substituting fallback");
                let diagnostic = err.to_diagnostic();
                let grid = Arc::new(Grid::fallback());
                self.cache
                    .insert(key, Arc::clone(&grid), Some(diagnostic.clone()));
                EvaluatedSurface {
                    grid,
                    diagnostic: Some(diagnostic),
                    cached: false,
                }
            }
        }
    }

    /// Evaluate, propagating failures instead of falling back
    ///
    /// Successful grids share the same cache as [`Self::evaluate`]. A
    /// cached fallback entry belongs to the total contract and is not
    /// replayed here; this variant recomputes and propagates the failure,
    /// which it does not cache.
    pub fn try_evaluate(
        &self,
        expression: &str,
        x_extent: f64,
        y_extent: f64,
        resolution: usize,
    ) -> Result<Arc<Grid>> {
        let key = CacheKey::new(expression, x_extent, y_extent, resolution);
        if let Some(entry) = self.cache.lookup(&key) {
            if entry.diagnostic.is_none() {
                return Ok(entry.grid);
            }
        }

        let grid = Arc::new(self.compute(expression, x_extent, y_extent, resolution)?);
        self.cache.insert(key, Arc::clone(&grid), None);
        Ok(grid)
    }

    fn compute(
        &self,
        expression: &str,
        x_extent: f64,
        y_extent: f64,
        resolution: usize,
    ) -> Result<Grid> {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        check_request(x_extent, y_extent, resolution)?;

        let ast = parse_expression(expression)?;
        let (x, y) = mesh(x_extent, y_extent, resolution);
        let context = EvaluationContext::for_mesh(x.clone(), y.clone());

        match self.evaluator.evaluate(&ast, &context)? {
            Value::Field(z) => Ok(Grid::new(x, y, z)),
            Value::Scalar(_) => Err(EvaluationError::ShapeReduction {
                rows: resolution,
                cols: resolution,
            }
            .into()),
        }
    }

    /// Number of computations performed (cache hits excluded)
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Cache hit/miss counters
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop all cached grids
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// The function registry expressions resolve against
    pub fn registry(&self) -> &FunctionRegistry {
        self.evaluator.registry()
    }
}

/// Validate request parameters against the evaluator's contract
fn check_request(x_extent: f64, y_extent: f64, resolution: usize) -> Result<()> {
    let message = if !(x_extent.is_finite() && x_extent > 0.0) {
        format!("x_extent must be a positive finite number, got {x_extent}")
    } else if !(y_extent.is_finite() && y_extent > 0.0) {
        format!("y_extent must be a positive finite number, got {y_extent}")
    } else if resolution < 2 {
        format!("resolution must be at least 2, got {resolution}")
    } else {
        return Ok(());
    };
    Err(EvaluationError::InvalidRequest { message }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_contract_requests_fall_back() {
        let engine = SurfaceEngine::new();
        let surface = engine.evaluate("x + y", -1.0, 3.0, 40);
        assert!(surface.is_fallback());
        assert_eq!(surface.grid.shape(), (20, 20));

        let surface = engine.evaluate("x + y", 3.0, 3.0, 1);
        assert!(surface.is_fallback());
    }

    #[test]
    fn registry_is_the_standard_whitelist() {
        let engine = SurfaceEngine::new();
        assert_eq!(engine.registry().names(), vec!["cos", "exp", "log", "sin"]);
    }
}
