//! Preset surface expressions
//!
//! The named formulas offered by the explorer UI's selector, in display
//! order. Labels are the human-facing names; expressions are what the
//! parser receives.

use once_cell::sync::Lazy;
use serde::Serialize;

/// A named preset expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Human-facing label
    pub label: &'static str,
    /// Expression text handed to the engine
    pub expression: &'static str,
}

/// The preset table, in UI order
pub static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            label: "sin(x)·cos(y)",
            expression: "np.sin(x) * np.cos(y)",
        },
        Preset {
            label: "x² - y² (saddle)",
            expression: "x**2 - y**2",
        },
        Preset {
            label: "x² + y² (bowl)",
            expression: "x**2 + y**2",
        },
        Preset {
            label: "sin(x² + y²)",
            expression: "np.sin(x**2 + y**2)",
        },
        Preset {
            label: "exp(-x²-y²) (Gaussian)",
            expression: "np.exp(-(x**2 + y**2))",
        },
        Preset {
            label: "sin(x) + cos(y)",
            expression: "np.sin(x) + np.cos(y)",
        },
        Preset {
            label: "x·y·exp(-x²-y²)",
            expression: "x * y * np.exp(-(x**2 + y**2))",
        },
    ]
});

/// Find a preset by its label
pub fn find(label: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.label == label)
}

/// The default preset (first in UI order)
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}
