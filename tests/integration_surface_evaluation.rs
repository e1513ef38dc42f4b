//! End-to-end surface evaluation integration tests

use heightfield::{Grid, SurfaceEngine};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn shape_contract_all_three_arrays() {
    let engine = SurfaceEngine::new();
    for resolution in [20, 40, 80] {
        let surface = engine.evaluate("x**2 + y**2", 3.0, 3.0, resolution);
        assert!(surface.diagnostic.is_none());
        assert_eq!(surface.grid.x.shape(), (resolution, resolution));
        assert_eq!(surface.grid.y.shape(), (resolution, resolution));
        assert_eq!(surface.grid.z.shape(), (resolution, resolution));
    }
}

#[test]
fn known_values_of_the_bowl() {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate("x**2 + y**2", 1.0, 1.0, 3);
    assert!(surface.diagnostic.is_none());

    // 3-point linspace over [-1, 1] on both axes
    let z = &surface.grid.z;
    assert_eq!(z.get(0, 0), 2.0);
    assert_eq!(z.get(1, 1), 0.0);
    assert_eq!(z.get(2, 2), 2.0);
}

#[rstest]
#[case("")]
#[case("((")]
#[case("x +")]
#[case("__import__('os')")]
#[case("os.system('ls')")]
#[case("1/0 if True else x")]
#[case("lambda: 1")]
#[case("zzz")]
#[case("np.pi")]
#[case("np.linalg.inv(x)")]
#[case("🙂 + x")]
#[case("x ** ** 2")]
#[case("sin(x, y)")]
#[case("3.5")]
fn totality_over_arbitrary_inputs(#[case] expression: &str) {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate(expression, 3.0, 3.0, 40);

    // Never a hard failure: the fallback grid with a diagnostic
    let diagnostic = surface.diagnostic.as_ref().expect("diagnostic");
    assert!(!diagnostic.message.is_empty());
    assert_eq!(*surface.grid, Grid::fallback());
}

#[test]
fn fallback_matches_the_fixed_definition() {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate("log(x - 10)", 3.0, 3.0, 40);
    assert!(surface.is_fallback());

    let grid = &surface.grid;
    assert_eq!(grid.shape(), (20, 20));
    assert_eq!(grid.x.get(0, 0), -3.0);
    assert_eq!(grid.x.get(19, 19), 3.0);
    assert_eq!(grid.y.get(0, 0), -3.0);
    assert_eq!(grid.y.get(19, 19), 3.0);
    for row in 0..20 {
        for col in 0..20 {
            let expected = grid.x.get(row, col).sin() * grid.y.get(row, col).cos();
            assert!((grid.z.get(row, col) - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn numeric_domain_failure_reports_the_function() {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate("log(x - 10)", 3.0, 3.0, 40);
    let diagnostic = surface.diagnostic.expect("domain diagnostic");
    assert!(diagnostic.message.contains("log"));
}

#[test]
fn constant_expressions_are_shape_failures() {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate("2 + 2", 3.0, 3.0, 40);
    let diagnostic = surface.diagnostic.expect("shape diagnostic");
    assert!(diagnostic.message.contains("single value"));
    assert_eq!(*surface.grid, Grid::fallback());
}

#[test]
fn nan_and_inf_pass_through_untouched() {
    let engine = SurfaceEngine::new();

    // 0/0 at the center sample
    let surface = engine.evaluate("x / x", 1.0, 1.0, 3);
    assert!(surface.diagnostic.is_none());
    assert!(surface.grid.z.get(1, 1).is_nan());
    assert_eq!(surface.grid.z.get(0, 0), 1.0);

    // exp overflow
    let surface = engine.evaluate("exp(x * 1000)", 3.0, 3.0, 21);
    assert!(surface.diagnostic.is_none());
    assert!(surface.grid.z.get(0, 20).is_infinite());
}

#[test]
fn every_preset_evaluates_cleanly() {
    let engine = SurfaceEngine::new();
    for preset in heightfield::presets::PRESETS.iter() {
        let surface = engine.evaluate(preset.expression, 3.0, 3.0, 40);
        assert!(
            surface.diagnostic.is_none(),
            "preset '{}' failed: {:?}",
            preset.label,
            surface.diagnostic
        );
        assert_eq!(surface.grid.shape(), (40, 40));
    }
}

#[test]
fn try_evaluate_propagates_failures() {
    let engine = SurfaceEngine::new();
    assert!(engine.try_evaluate("nope(x)", 3.0, 3.0, 40).is_err());
    assert!(engine.try_evaluate("((", 3.0, 3.0, 40).is_err());

    let grid = engine
        .try_evaluate("x * y", 3.0, 3.0, 40)
        .expect("valid expression");
    assert_eq!(grid.shape(), (40, 40));
}
