//! Grid export helpers
//!
//! CSV and JSON renditions of an evaluated surface, matching the UI's
//! download buttons.

use crate::model::Grid;
use serde::Serialize;
use std::fmt::Write as _;

/// Serializable evaluation report for JSON export
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceReport<'a> {
    /// The expression as requested
    pub expression: &'a str,
    /// Half-width of the x domain
    pub x_extent: f64,
    /// Half-width of the y domain
    pub y_extent: f64,
    /// Samples per axis
    pub resolution: usize,
    /// Whether the grid is the fallback surface
    pub fallback: bool,
    /// The sampled grid
    pub grid: &'a Grid,
}

/// Render a grid as `x,y,z` CSV rows with a header line
pub fn grid_to_csv(grid: &Grid) -> String {
    let (rows, cols) = grid.shape();
    let mut out = String::with_capacity(rows * cols * 24 + 8);
    out.push_str("x,y,z\n");
    for row in 0..rows {
        for col in 0..cols {
            let _ = writeln!(
                out,
                "{},{},{}",
                grid.x.get(row, col),
                grid.y.get(row, col),
                grid.z.get(row, col)
            );
        }
    }
    out
}

/// Serialize a report to JSON
pub fn report_to_json(report: &SurfaceReport<'_>, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScalarField, mesh};

    fn small_grid() -> Grid {
        let (x, y) = mesh(1.0, 1.0, 2);
        let z = ScalarField::from_vec(vec![0.0, 1.0, 2.0, 3.0], 2, 2);
        Grid::new(x, y, z)
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let csv = grid_to_csv(&small_grid());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "x,y,z");
        assert_eq!(lines[1], "-1,-1,0");
        assert_eq!(lines[4], "1,1,3");
    }

    #[test]
    fn json_report_round_trips() {
        let grid = small_grid();
        let report = SurfaceReport {
            expression: "x + y",
            x_extent: 1.0,
            y_extent: 1.0,
            resolution: 2,
            fallback: false,
            grid: &grid,
        };
        let json = report_to_json(&report, false).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["expression"], "x + y");
        assert_eq!(value["resolution"], 2);
        assert_eq!(value["fallback"], false);
    }
}
