//! Data model for sampled surfaces
//!
//! Holds the grid/field types the evaluator produces and the mesh
//! construction used to sample the rectangular domain.

pub mod grid;
pub mod value;

pub use grid::{FALLBACK_EXTENT, FALLBACK_RESOLUTION, Grid, ScalarField, linspace, mesh};
pub use value::Value;
